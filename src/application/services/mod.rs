// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::{articles::ArticleQueryService, tags::TagQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        seo::SeoRepository,
        tag::TagRepository,
    },
};

/// Aggregate wiring every service from its injected ports, so an embedding
/// host only deals in `Arc<dyn …>` implementations.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub tag_queries: Arc<TagQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        seo_repo: Arc<dyn SeoRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&seo_repo),
            Arc::clone(&slug_service),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&seo_repo),
        ));

        let tag_queries = Arc::new(TagQueryService::new(Arc::clone(&tag_repo)));

        Self {
            article_commands,
            article_queries,
            tag_queries,
        }
    }
}
