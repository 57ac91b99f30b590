// tests/support/mod.rs
//
// Shared fixture: application services wired against the in-memory store.
#![allow(dead_code)]

pub mod mocks;

use std::sync::Arc;

use papyrus_core::application::ports::time::Clock;
use papyrus_core::application::services::ApplicationServices;
use papyrus_core::domain::seo::SeoRepository;
use papyrus_core::infrastructure::util::DefaultSlugGenerator;

use mocks::store::{InMemoryArticleRepo, InMemorySeoRepo, InMemoryStore, InMemoryTagRepo};
use mocks::time::FixedClock;

pub struct TestHarness {
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<FixedClock>,
    pub services: ApplicationServices,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        let seo_repo = Arc::new(InMemorySeoRepo {
            store: Arc::clone(&store),
        });
        Self::with_seo_repo(store, seo_repo)
    }

    /// Same wiring but with a caller-supplied SEO repository, so failure
    /// behavior of the side write can be exercised.
    pub fn with_seo_repo(store: Arc<InMemoryStore>, seo_repo: Arc<dyn SeoRepository>) -> Self {
        let article_repo = Arc::new(InMemoryArticleRepo {
            store: Arc::clone(&store),
        });
        let tag_repo = Arc::new(InMemoryTagRepo {
            store: Arc::clone(&store),
        });
        let clock = Arc::new(FixedClock::default());

        let write_repo = Arc::clone(&article_repo);
        let services = ApplicationServices::new(
            write_repo,
            article_repo,
            tag_repo,
            seo_repo,
            Arc::clone(&clock) as Arc<dyn Clock>,
            Arc::new(DefaultSlugGenerator),
        );

        Self {
            store,
            clock,
            services,
        }
    }
}
