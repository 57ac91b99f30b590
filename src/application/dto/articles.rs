use crate::application::dto::seo::SeoDto;
use crate::application::dto::tags::TagDto;
use crate::domain::article::Article;
use crate::domain::tag::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fully hydrated article as returned from every mutation and query:
/// the record itself plus its tag set and optional SEO record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub published: bool,
    pub tags: Vec<TagDto>,
    pub seo: Option<SeoDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn from_parts(article: Article, tags: Vec<Tag>, seo: Option<SeoDto>) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            slug: article.slug.into(),
            content: article.content.into(),
            category: article.category,
            thumbnail: article.thumbnail,
            published: article.published,
            tags: tags.into_iter().map(TagDto::from).collect(),
            seo,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
