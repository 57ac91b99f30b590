// src/domain/seo/entity.rs
use crate::domain::article::value_objects::ArticleId;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeoId(pub i64);

impl From<SeoId> for i64 {
    fn from(value: SeoId) -> Self {
        value.0
    }
}

/// One-to-one SEO record owned by an article. Every field is nullable; a
/// write always replaces the whole record (see [`SeoFields`]).
#[derive(Debug, Clone)]
pub struct Seo {
    pub id: SeoId,
    pub article_id: ArticleId,
    pub fields: SeoFields,
}

/// The full set of recognized SEO fields. Constructed from a partial payload
/// by filling every absent field with `None`, so an upsert is always a full
/// replace and never a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoFields {
    pub meta_title: Option<String>,
    pub meta_desc: Option<String>,
    pub meta_image: Option<String>,
    pub og_image: Option<String>,
    pub robots: Option<String>,
    pub structured_data: Option<Value>,
}
