// tests/support/mocks/store.rs
//
// In-memory stand-in for the SQLite store. One shared `InMemoryStore` backs
// the article/tag/seo repositories so cross-record behavior (cascades,
// shared tags) can be asserted without a database.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use papyrus_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use papyrus_core::domain::errors::{DomainError, DomainResult};
use papyrus_core::domain::seo::{Seo, SeoFields, SeoId, SeoRepository};
use papyrus_core::domain::tag::{Tag, TagId, TagName, TagRepository};

#[derive(Default)]
pub struct InMemoryStore {
    pub articles: Mutex<HashMap<i64, Article>>,
    pub tags: Mutex<HashMap<i64, Tag>>,
    pub links: Mutex<Vec<(i64, i64)>>, // (article_id, tag_id)
    pub seo: Mutex<HashMap<i64, Seo>>, // keyed by article_id
    next_article_id: Mutex<i64>,
    next_tag_id: Mutex<i64>,
    next_seo_id: Mutex<i64>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn next_id(counter: &Mutex<i64>) -> i64 {
        let mut guard = counter.lock().unwrap();
        *guard += 1;
        *guard
    }

    pub fn tag_count(&self) -> usize {
        self.tags.lock().unwrap().len()
    }

    pub fn links_for(&self, article_id: i64) -> Vec<i64> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .filter(|(aid, _)| *aid == article_id)
            .map(|(_, tid)| *tid)
            .collect()
    }
}

pub struct InMemoryArticleRepo {
    pub store: Arc<InMemoryStore>,
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.store.articles.lock().unwrap();
        // unique constraint on slug, the store's final authority
        if articles
            .values()
            .any(|existing| existing.slug == article.slug)
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let id = InMemoryStore::next_id(&self.store.next_article_id);
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            slug: article.slug,
            content: article.content,
            category: article.category,
            thumbnail: article.thumbnail,
            published: article.published,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        articles.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.store.articles.lock().unwrap();
        let id = i64::from(update.id);

        if let Some(slug) = &update.slug {
            if articles
                .values()
                .any(|existing| existing.slug == *slug && i64::from(existing.id) != id)
            {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }

        let article = articles
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(category) = update.category {
            article.category = category;
        }
        if let Some(thumbnail) = update.thumbnail {
            article.thumbnail = thumbnail;
        }
        if let Some(published) = update.published {
            article.published = published;
        }
        article.updated_at = update.updated_at;

        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let id = i64::from(id);
        self.store.articles.lock().unwrap().remove(&id);
        // tag links cascade with the article; tag rows never do
        self.store
            .links
            .lock()
            .unwrap()
            .retain(|(aid, _)| *aid != id);
        self.store.seo.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .store
            .articles
            .lock()
            .unwrap()
            .get(&i64::from(id))
            .cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .store
            .articles
            .lock()
            .unwrap()
            .values()
            .find(|article| article.slug == *slug)
            .cloned())
    }

    async fn list_paginated(
        &self,
        published_only: bool,
        page: u32,
        page_size: u32,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let articles = self.store.articles.lock().unwrap();
        let mut matching: Vec<Article> = articles
            .values()
            .filter(|article| !published_only || article.published)
            .filter(|article| {
                search.is_none_or(|needle| {
                    article.title.as_str().contains(needle)
                        || article.content.as_str().contains(needle)
                })
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as u64;
        let start = ((page - 1) * page_size) as usize;
        let data = matching
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();
        Ok((data, total))
    }

    async fn list_by_tag(
        &self,
        tag_name: &str,
        published_only: bool,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let tag_id = self
            .store
            .tags
            .lock()
            .unwrap()
            .values()
            .find(|tag| tag.name.as_str() == tag_name)
            .map(|tag| i64::from(tag.id));

        let linked: Vec<i64> = match tag_id {
            Some(tag_id) => self
                .store
                .links
                .lock()
                .unwrap()
                .iter()
                .filter(|(_, tid)| *tid == tag_id)
                .map(|(aid, _)| *aid)
                .collect(),
            None => Vec::new(),
        };

        let articles = self.store.articles.lock().unwrap();
        let mut matching: Vec<Article> = articles
            .values()
            .filter(|article| linked.contains(&i64::from(article.id)))
            .filter(|article| !published_only || article.published)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as u64;
        let start = ((page - 1) * page_size) as usize;
        let data = matching
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();
        Ok((data, total))
    }
}

pub struct InMemoryTagRepo {
    pub store: Arc<InMemoryStore>,
}

#[async_trait]
impl TagRepository for InMemoryTagRepo {
    async fn find_or_create(&self, name: &TagName, slug: &str) -> DomainResult<Tag> {
        let mut tags = self.store.tags.lock().unwrap();
        if let Some(existing) = tags.values().find(|tag| tag.name == *name) {
            return Ok(existing.clone());
        }
        let id = InMemoryStore::next_id(&self.store.next_tag_id);
        let tag = Tag {
            id: TagId::new(id)?,
            name: name.clone(),
            slug: slug.to_string(),
            category: None,
        };
        tags.insert(id, tag.clone());
        Ok(tag)
    }

    async fn replace_article_tags(
        &self,
        article_id: ArticleId,
        tag_ids: &[TagId],
    ) -> DomainResult<()> {
        let article_id = i64::from(article_id);
        let mut links = self.store.links.lock().unwrap();
        links.retain(|(aid, _)| *aid != article_id);
        for tag_id in tag_ids {
            links.push((article_id, i64::from(*tag_id)));
        }
        Ok(())
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>> {
        let article_id = i64::from(article_id);
        let links = self.store.links.lock().unwrap();
        let tags = self.store.tags.lock().unwrap();
        let mut result: Vec<Tag> = links
            .iter()
            .filter(|(aid, _)| *aid == article_id)
            .filter_map(|(_, tid)| tags.get(tid).cloned())
            .collect();
        result.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(result)
    }

    async fn list_with_counts(
        &self,
        category: Option<&str>,
    ) -> DomainResult<Vec<(Tag, u64)>> {
        let links = self.store.links.lock().unwrap();
        let tags = self.store.tags.lock().unwrap();
        let mut result: Vec<(Tag, u64)> = tags
            .values()
            .filter(|tag| category.is_none_or(|c| tag.category.as_deref() == Some(c)))
            .map(|tag| {
                let count = links
                    .iter()
                    .filter(|(_, tid)| *tid == i64::from(tag.id))
                    .count() as u64;
                (tag.clone(), count)
            })
            .collect();
        result.sort_by(|a, b| a.0.name.as_str().cmp(b.0.name.as_str()));
        Ok(result)
    }
}

pub struct InMemorySeoRepo {
    pub store: Arc<InMemoryStore>,
}

#[async_trait]
impl SeoRepository for InMemorySeoRepo {
    async fn upsert(&self, article_id: ArticleId, fields: SeoFields) -> DomainResult<Seo> {
        let mut seo = self.store.seo.lock().unwrap();
        let key = i64::from(article_id);
        let record = match seo.get(&key) {
            Some(existing) => Seo {
                id: existing.id,
                article_id,
                fields,
            },
            None => Seo {
                id: SeoId(InMemoryStore::next_id(&self.store.next_seo_id)),
                article_id,
                fields,
            },
        };
        seo.insert(key, record.clone());
        Ok(record)
    }

    async fn find_by_article(&self, article_id: ArticleId) -> DomainResult<Option<Seo>> {
        Ok(self
            .store
            .seo
            .lock()
            .unwrap()
            .get(&i64::from(article_id))
            .cloned())
    }

    async fn delete_by_article(&self, article_id: ArticleId) -> DomainResult<()> {
        self.store.seo.lock().unwrap().remove(&i64::from(article_id));
        Ok(())
    }
}

/// Seo repository that accepts writes but never returns them on read, for
/// asserting that a mutation's returned record reflects the write outcome
/// rather than a read-back.
pub struct WriteOnlySeoRepo {
    pub store: Arc<InMemoryStore>,
}

#[async_trait]
impl SeoRepository for WriteOnlySeoRepo {
    async fn upsert(&self, article_id: ArticleId, fields: SeoFields) -> DomainResult<Seo> {
        InMemorySeoRepo {
            store: Arc::clone(&self.store),
        }
        .upsert(article_id, fields)
        .await
    }

    async fn find_by_article(&self, _article_id: ArticleId) -> DomainResult<Option<Seo>> {
        Ok(None)
    }

    async fn delete_by_article(&self, article_id: ArticleId) -> DomainResult<()> {
        self.store.seo.lock().unwrap().remove(&i64::from(article_id));
        Ok(())
    }
}

/// Seo repository whose writes always fail, for asserting the best-effort
/// contract around the article mutation.
pub struct FailingSeoRepo;

#[async_trait]
impl SeoRepository for FailingSeoRepo {
    async fn upsert(&self, _article_id: ArticleId, _fields: SeoFields) -> DomainResult<Seo> {
        Err(DomainError::Persistence("seo store unavailable".into()))
    }

    async fn find_by_article(&self, _article_id: ArticleId) -> DomainResult<Option<Seo>> {
        Ok(None)
    }

    async fn delete_by_article(&self, _article_id: ArticleId) -> DomainResult<()> {
        Err(DomainError::Persistence("seo store unavailable".into()))
    }
}
