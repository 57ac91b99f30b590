use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::{Tag, TagId, TagName};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Atomic find-or-create by exact name. Must be a single store operation
    /// so concurrent requests referencing a brand-new tag cannot produce
    /// duplicate rows.
    async fn find_or_create(&self, name: &TagName, slug: &str) -> DomainResult<Tag>;

    /// Full relation replace: drop every tag link of the article, then attach
    /// exactly the given set.
    async fn replace_article_tags(
        &self,
        article_id: ArticleId,
        tag_ids: &[TagId],
    ) -> DomainResult<()>;

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>>;

    /// All tags ordered by name, each with the number of articles referencing
    /// it, optionally filtered by tag category.
    async fn list_with_counts(&self, category: Option<&str>)
    -> DomainResult<Vec<(Tag, u64)>>;
}
