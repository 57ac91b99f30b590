pub mod article;
pub mod errors;
pub mod seo;
pub mod tag;
