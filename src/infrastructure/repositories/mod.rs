pub mod error;
pub mod sqlite_article;
pub mod sqlite_seo;
pub mod sqlite_tag;

pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_seo::SqliteSeoRepository;
pub use sqlite_tag::SqliteTagRepository;
