use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleSlug, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str =
    "id, title, slug, content, category, thumbnail, published, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    category: Option<String>,
    thumbnail: Option<String>,
    published: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            content: ArticleContent::new(row.content)?,
            category: row.category,
            thumbnail: row.thumbnail,
            published: row.published != 0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            content,
            category,
            thumbnail,
            published,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, slug, content, category, thumbnail, published, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id, title, slug, content, category, thumbnail, published, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(category)
        .bind(thumbnail)
        .bind(i64::from(published))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        // SET clauses are assembled dynamically: absent fields must stay
        // untouched, while a present `category`/`thumbnail` may bind NULL.
        let mut builder: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(title) = &update.title {
            builder.push(", title = ");
            builder.push_bind(title.as_str());
        }
        if let Some(slug) = &update.slug {
            builder.push(", slug = ");
            builder.push_bind(slug.as_str());
        }
        if let Some(content) = &update.content {
            builder.push(", content = ");
            builder.push_bind(content.as_str());
        }
        if let Some(category) = &update.category {
            builder.push(", category = ");
            builder.push_bind(category.as_deref());
        }
        if let Some(thumbnail) = &update.thumbnail {
            builder.push(", thumbnail = ");
            builder.push_bind(thumbnail.as_deref());
        }
        if let Some(published) = update.published {
            builder.push(", published = ");
            builder.push_bind(i64::from(published));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(update.id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, slug, content, category, thumbnail, published, created_at, updated_at FROM articles WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, slug, content, category, thumbnail, published, created_at, updated_at FROM articles WHERE slug = ?",
        )
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_paginated(
        &self,
        published_only: bool,
        page: u32,
        page_size: u32,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let offset = i64::from(page - 1) * i64::from(page_size);
        let search_pattern = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{s}%"));

        fn apply_conditions<'a>(
            builder: &mut QueryBuilder<'a, Sqlite>,
            published_only: bool,
            search_pattern: Option<&'a str>,
        ) {
            let mut has_where = false;
            if published_only {
                builder.push(" WHERE published = 1");
                has_where = true;
            }

            if let Some(pattern) = search_pattern {
                if has_where {
                    builder.push(" AND (");
                } else {
                    builder.push(" WHERE (");
                }
                builder.push("title LIKE ");
                builder.push_bind(pattern);
                builder.push(" OR content LIKE ");
                builder.push_bind(pattern);
                builder.push(")");
            }
        }

        let mut list_builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles"
        ));
        apply_conditions(&mut list_builder, published_only, search_pattern.as_deref());
        list_builder.push(" ORDER BY created_at DESC LIMIT ");
        list_builder.push_bind(i64::from(page_size));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(offset);

        let rows = list_builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) FROM articles");
        apply_conditions(&mut count_builder, published_only, search_pattern.as_deref());

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, total.unsigned_abs()))
    }

    async fn list_by_tag(
        &self,
        tag_name: &str,
        published_only: bool,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let offset = i64::from(page - 1) * i64::from(page_size);

        // columns are qualified because tags carries an id column too
        let mut list_builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new(
            "SELECT a.id, a.title, a.slug, a.content, a.category, a.thumbnail, a.published, a.created_at, a.updated_at \
             FROM articles a \
             JOIN article_tags links ON links.article_id = a.id \
             JOIN tags t ON t.id = links.tag_id WHERE t.name = ",
        );
        list_builder.push_bind(tag_name);
        if published_only {
            list_builder.push(" AND a.published = 1");
        }
        list_builder.push(" ORDER BY a.created_at DESC LIMIT ");
        list_builder.push_bind(i64::from(page_size));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(offset);

        let rows = list_builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new(
            "SELECT COUNT(1) FROM articles a \
             JOIN article_tags links ON links.article_id = a.id \
             JOIN tags t ON t.id = links.tag_id WHERE t.name = ",
        );
        count_builder.push_bind(tag_name);
        if published_only {
            count_builder.push(" AND a.published = 1");
        }

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, total.unsigned_abs()))
    }
}
