// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service responsible for producing globally unique article slugs.
///
/// The slugification itself is pure (the injected [`SlugGenerator`]); the
/// uniqueness probe runs against the read repository. Two concurrent callers
/// can both pass the probe for the same base slug — the store's unique
/// constraint is the final authority and surfaces as a conflict.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Sequential probe-and-retry loop: try the base slug, then `base-1`,
    /// `base-2`, … until a free slug is found. On update, the article being
    /// edited is excluded from the probe so resubmitting an unchanged title
    /// keeps the existing slug.
    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let base_slug = self.generator.slugify(title.as_str());
        if base_slug.is_empty() {
            return Err(DomainError::Validation(
                "title does not produce a usable slug".into(),
            ));
        }

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = ArticleSlug::new(candidate.clone())?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if ignore_id.is_some_and(|id| id == existing.id) => {
                    return Ok(slug);
                }
                Some(_) => {
                    candidate = format!("{base_slug}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}
