use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, PaginatedPage},
    error::{ApplicationError, ApplicationResult},
};

/// Published articles carrying a given tag, addressed by exact tag name.
pub struct ListArticlesByTagQuery {
    pub tag: String,
    pub page: u32,
    pub limit: u32,
}

impl ListArticlesByTagQuery {
    pub fn for_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            page: 1,
            limit: 20,
        }
    }
}

impl ArticleQueryService {
    /// Newest first, same pagination envelope as the main listing. The tag
    /// name match is exact and case-sensitive; a name no tag carries yields
    /// an empty page rather than an error.
    pub async fn list_articles_by_tag(
        &self,
        query: ListArticlesByTagQuery,
    ) -> ApplicationResult<PaginatedPage<ArticleDto>> {
        if query.tag.trim().is_empty() {
            return Err(ApplicationError::validation("tag name cannot be empty"));
        }
        Self::check_page_params(query.page, query.limit)?;

        let (articles, total) = self
            .read_repo
            .list_by_tag(&query.tag, true, query.page, query.limit)
            .await?;

        let data = self.hydrate_page(articles).await?;
        Ok(PaginatedPage::new(data, query.page, query.limit, total))
    }
}
