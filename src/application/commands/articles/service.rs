// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, SeoDto, SeoWriteOutcome},
        error::ApplicationResult,
        ports::{time::Clock, util::SlugGenerator},
    },
    domain::{
        article::{
            Article, ArticleId, ArticleReadRepository, ArticleWriteRepository,
            services::ArticleSlugService,
        },
        seo::SeoRepository,
        tag::{TagInput, TagName, TagRepository},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) seo_repo: Arc<dyn SeoRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        seo_repo: Arc<dyn SeoRepository>,
        slug_service: Arc<ArticleSlugService>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            tag_repo,
            seo_repo,
            slug_service,
            slugger,
            clock,
        }
    }

    /// Effectful half of tag reconciliation: find-or-create every resolved
    /// name, then replace the article's tag links with exactly that set.
    /// Duplicate names land on the same row, so the final set is dedup'd.
    pub(super) async fn apply_tags(
        &self,
        article_id: ArticleId,
        input: &TagInput,
    ) -> ApplicationResult<()> {
        let mut tag_ids = Vec::new();
        for raw in input.resolve_names() {
            let name = TagName::new(raw)?;
            let tag_slug = self.slugger.slugify(name.as_str());
            let tag = self.tag_repo.find_or_create(&name, &tag_slug).await?;
            if !tag_ids.contains(&tag.id) {
                tag_ids.push(tag.id);
            }
        }
        self.tag_repo
            .replace_article_tags(article_id, &tag_ids)
            .await?;
        Ok(())
    }

    /// Assemble the returned record. When the mutation carried an SEO payload
    /// the side-write outcome is authoritative for the `seo` field; otherwise
    /// the stored record is read back.
    pub(super) async fn hydrate(
        &self,
        article: Article,
        seo_outcome: Option<SeoWriteOutcome>,
    ) -> ApplicationResult<ArticleDto> {
        let tags = self.tag_repo.list_for_article(article.id).await?;
        let seo = match seo_outcome {
            Some(outcome) => outcome.into_written(),
            None => self
                .seo_repo
                .find_by_article(article.id)
                .await?
                .map(SeoDto::from),
        };
        Ok(ArticleDto::from_parts(article, tags, seo))
    }
}
