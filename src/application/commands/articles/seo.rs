// src/application/commands/articles/seo.rs
use super::ArticleCommandService;
use crate::{
    application::dto::SeoWriteOutcome,
    domain::{article::ArticleId, seo::SeoFields},
};

impl ArticleCommandService {
    /// Best-effort SEO side write. The record is replaced wholesale, keyed by
    /// article identity. A store failure never fails the enclosing article
    /// mutation; it is logged and reported through the outcome instead of an
    /// error.
    pub(super) async fn apply_seo(
        &self,
        article_id: ArticleId,
        fields: SeoFields,
    ) -> SeoWriteOutcome {
        match self.seo_repo.upsert(article_id, fields).await {
            Ok(seo) => SeoWriteOutcome::Written(seo.into()),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    article_id = i64::from(article_id),
                    "seo upsert failed; article mutation unaffected"
                );
                SeoWriteOutcome::Failed
            }
        }
    }
}
