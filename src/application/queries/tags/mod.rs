// src/application/queries/tags/mod.rs
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{
    application::{
        dto::{TagListDto, TagWithCountDto},
        error::ApplicationResult,
    },
    domain::tag::TagRepository,
};

const UNCATEGORIZED: &str = "UNCATEGORIZED";

pub struct ListTagsQuery {
    pub category: Option<String>,
}

pub struct TagQueryService {
    tag_repo: Arc<dyn TagRepository>,
}

impl TagQueryService {
    pub fn new(tag_repo: Arc<dyn TagRepository>) -> Self {
        Self { tag_repo }
    }

    /// All tags ordered by name with per-tag article counts, plus the same
    /// list grouped by category. Tags without a category group under
    /// `UNCATEGORIZED`.
    pub async fn list_tags(&self, query: ListTagsQuery) -> ApplicationResult<TagListDto> {
        let rows = self
            .tag_repo
            .list_with_counts(query.category.as_deref())
            .await?;

        let data: Vec<TagWithCountDto> = rows
            .into_iter()
            .map(|(tag, count)| TagWithCountDto::from_parts(tag, count))
            .collect();

        let mut grouped: BTreeMap<String, Vec<TagWithCountDto>> = BTreeMap::new();
        for tag in &data {
            let key = tag
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            grouped.entry(key).or_default().push(tag.clone());
        }

        let total = data.len();
        Ok(TagListDto {
            data,
            grouped_by_category: grouped,
            total,
        })
    }
}
