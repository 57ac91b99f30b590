pub mod entity;
pub mod repository;

pub use entity::{Seo, SeoFields, SeoId};
pub use repository::SeoRepository;
