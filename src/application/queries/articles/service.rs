use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, SeoDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::Article, article::ArticleReadRepository, seo::SeoRepository, tag::TagRepository},
};

const MAX_PAGE_SIZE: u32 = 100;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) seo_repo: Arc<dyn SeoRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        seo_repo: Arc<dyn SeoRepository>,
    ) -> Self {
        Self {
            read_repo,
            tag_repo,
            seo_repo,
        }
    }

    pub(super) fn check_page_params(page: u32, limit: u32) -> ApplicationResult<()> {
        if page < 1 {
            return Err(ApplicationError::validation("page must be greater than 0"));
        }
        if limit < 1 || limit > MAX_PAGE_SIZE {
            return Err(ApplicationError::validation(
                "limit must be between 1 and 100",
            ));
        }
        Ok(())
    }

    pub(super) async fn hydrate_page(
        &self,
        articles: Vec<Article>,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let mut data = Vec::with_capacity(articles.len());
        for article in articles {
            data.push(self.hydrate(article).await?);
        }
        Ok(data)
    }

    pub(super) async fn hydrate(&self, article: Article) -> ApplicationResult<ArticleDto> {
        let tags = self.tag_repo.list_for_article(article.id).await?;
        let seo = self.seo_repo.find_by_article(article.id).await?.map(SeoDto::from);
        Ok(ArticleDto::from_parts(article, tags, seo))
    }
}
