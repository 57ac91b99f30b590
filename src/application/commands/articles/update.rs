// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, SeoInput},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleContent, ArticleSlug, ArticleTitle, ArticleUpdate},
        tag::TagInput,
    },
};

/// Partial patch addressed by slug. Absent fields leave the stored value
/// untouched; only `category`/`thumbnail` interpret an empty string as
/// "clear to null".
pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub published: Option<bool>,
    pub tags: Option<TagInput>,
    pub seo: Option<SeoInput>,
}

impl UpdateArticleCommand {
    pub fn for_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: None,
            content: None,
            category: None,
            thumbnail: None,
            published: None,
            tags: None,
            seo: None,
        }
    }
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(command.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let seo_fields = command.seo.map(SeoInput::normalize).transpose()?;

        let now = self.clock.now();
        let mut update = ArticleUpdate::new(article.id, now);

        if let Some(raw_title) = command.title {
            let title = ArticleTitle::new(raw_title)?;
            // Slug regeneration only when the title actually changed; the
            // probe ignores this article, so a title that slugifies back to
            // the current slug is a no-op.
            if title.as_str() != article.title.as_str() {
                let new_slug = self
                    .slug_service
                    .generate_unique_slug(&title, Some(article.id))
                    .await?;
                if new_slug != article.slug {
                    update = update.with_slug(new_slug);
                }
            }
            update = update.with_title(title);
        }

        if let Some(raw) = command.content {
            update = update.with_content(ArticleContent::new(raw)?);
        }
        if let Some(raw) = command.category {
            update = update.with_category(Some(raw).filter(|value| !value.is_empty()));
        }
        if let Some(raw) = command.thumbnail {
            update = update.with_thumbnail(Some(raw).filter(|value| !value.is_empty()));
        }
        if let Some(published) = command.published {
            update = update.with_published(published);
        }

        let updated = self.write_repo.update(update).await?;

        if let Some(tags) = &command.tags {
            self.apply_tags(updated.id, tags).await?;
        }

        let seo_outcome = match seo_fields {
            Some(fields) => Some(self.apply_seo(updated.id, fields).await),
            None => None,
        };

        // Read back by the (possibly new) slug so the returned record
        // reflects every side write.
        let fresh = self
            .read_repo
            .find_by_slug(&updated.slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.hydrate(fresh, seo_outcome).await
    }
}
