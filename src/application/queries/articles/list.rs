use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, PaginatedPage},
    error::ApplicationResult,
};

pub struct ListArticlesQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
}

impl Default for ListArticlesQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            search: None,
        }
    }
}

impl ArticleQueryService {
    /// Published articles, newest first, with optional title/content
    /// substring search.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<PaginatedPage<ArticleDto>> {
        Self::check_page_params(query.page, query.limit)?;

        let (articles, total) = self
            .read_repo
            .list_paginated(true, query.page, query.limit, query.search.as_deref())
            .await?;

        let data = self.hydrate_page(articles).await?;
        Ok(PaginatedPage::new(data, query.page, query.limit, total))
    }
}
