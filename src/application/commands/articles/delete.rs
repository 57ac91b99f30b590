// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleSlug,
};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Deletes the article addressed by slug. The owned SEO record is removed
    /// first (best effort); tag links cascade with the article while shared
    /// Tag rows are never touched.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let slug = ArticleSlug::new(command.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if let Err(err) = self.seo_repo.delete_by_article(article.id).await {
            tracing::warn!(
                error = %err,
                article_id = i64::from(article.id),
                "seo delete failed; continuing with article delete"
            );
        }

        self.write_repo.delete(article.id).await?;
        Ok(())
    }
}
