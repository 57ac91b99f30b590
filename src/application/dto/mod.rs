pub mod articles;
pub mod pagination;
pub mod seo;
pub mod tags;

pub use articles::ArticleDto;
pub use pagination::{PaginatedPage, Pagination};
pub use seo::{SeoDto, SeoInput, SeoWriteOutcome};
pub use tags::{TagDto, TagListDto, TagWithCountDto};
