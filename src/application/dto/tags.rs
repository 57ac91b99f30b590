use crate::domain::tag::Tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub category: Option<String>,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name.into(),
            slug: tag.slug,
            category: tag.category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagWithCountDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub category: Option<String>,
    pub article_count: u64,
}

impl TagWithCountDto {
    pub fn from_parts(tag: Tag, article_count: u64) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name.into(),
            slug: tag.slug,
            category: tag.category,
            article_count,
        }
    }
}

/// Tag listing: flat ordered list plus a category-grouped view. Tags with no
/// category land under `UNCATEGORIZED`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagListDto {
    pub data: Vec<TagWithCountDto>,
    pub grouped_by_category: BTreeMap<String, Vec<TagWithCountDto>>,
    pub total: usize,
}
