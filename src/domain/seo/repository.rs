use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::seo::entity::{Seo, SeoFields};
use async_trait::async_trait;

#[async_trait]
pub trait SeoRepository: Send + Sync {
    /// Keyed by `article_id`: create the record if missing, otherwise
    /// overwrite every field in place.
    async fn upsert(&self, article_id: ArticleId, fields: SeoFields) -> DomainResult<Seo>;

    async fn find_by_article(&self, article_id: ArticleId) -> DomainResult<Option<Seo>>;

    async fn delete_by_article(&self, article_id: ArticleId) -> DomainResult<()>;
}
