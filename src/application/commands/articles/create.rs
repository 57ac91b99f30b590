// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, SeoInput},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleContent, ArticleTitle, NewArticle},
        tag::TagInput,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub published: Option<bool>,
    pub tags: Option<TagInput>,
    pub seo: Option<SeoInput>,
}

impl CreateArticleCommand {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: None,
            thumbnail: None,
            published: None,
            tags: None,
            seo: None,
        }
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        // SEO payload is validated up front so a malformed payload is a typed
        // failure before any write.
        let seo_fields = command.seo.map(SeoInput::normalize).transpose()?;

        let now = self.clock.now();
        let slug = self.slug_service.generate_unique_slug(&title, None).await?;

        let new_article = NewArticle {
            title,
            slug,
            content,
            category: command.category.filter(|value| !value.is_empty()),
            thumbnail: command.thumbnail.filter(|value| !value.is_empty()),
            published: command.published.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;

        if let Some(tags) = &command.tags {
            self.apply_tags(created.id, tags).await?;
        }

        let seo_outcome = match seo_fields {
            Some(fields) => Some(self.apply_seo(created.id, fields).await),
            None => None,
        };

        self.hydrate(created, seo_outcome).await
    }
}
