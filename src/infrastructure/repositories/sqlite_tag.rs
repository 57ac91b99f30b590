use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{Tag, TagId, TagName, TagRepository};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteTagRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTagRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
    slug: String,
    category: Option<String>,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
            slug: row.slug,
            category: row.category,
        })
    }
}

#[derive(Debug, FromRow)]
struct TagCountRow {
    id: i64,
    name: String,
    slug: String,
    category: Option<String>,
    article_count: i64,
}

#[async_trait]
impl TagRepository for SqliteTagRepository {
    async fn find_or_create(&self, name: &TagName, slug: &str) -> DomainResult<Tag> {
        // Single-statement upsert so two concurrent requests referencing the
        // same brand-new name cannot produce duplicate rows. The no-op
        // DO UPDATE makes the existing row flow through RETURNING.
        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (name, slug) VALUES (?, ?) ON CONFLICT(name) DO UPDATE SET name = excluded.name RETURNING id, name, slug, category",
        )
        .bind(name.as_str())
        .bind(slug)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn replace_article_tags(
        &self,
        article_id: ArticleId,
        tag_ids: &[TagId],
    ) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM article_tags WHERE article_id = ?")
            .bind(i64::from(article_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        for tag_id in tag_ids {
            sqlx::query("INSERT INTO article_tags (article_id, tag_id) VALUES (?, ?)")
                .bind(i64::from(article_id))
                .bind(i64::from(*tag_id))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT t.id, t.name, t.slug, t.category FROM tags t JOIN article_tags links ON links.tag_id = t.id WHERE links.article_id = ? ORDER BY t.name ASC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn list_with_counts(
        &self,
        category: Option<&str>,
    ) -> DomainResult<Vec<(Tag, u64)>> {
        let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new(
            "SELECT t.id, t.name, t.slug, t.category, COUNT(links.article_id) AS article_count FROM tags t LEFT JOIN article_tags links ON links.tag_id = t.id",
        );
        if let Some(category) = category {
            builder.push(" WHERE t.category = ");
            builder.push_bind(category);
        }
        builder.push(" GROUP BY t.id, t.name, t.slug, t.category ORDER BY t.name ASC");

        let rows = builder
            .build_query_as::<TagCountRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                let count = row.article_count.unsigned_abs();
                let tag = Tag::try_from(TagRow {
                    id: row.id,
                    name: row.name,
                    slug: row.slug,
                    category: row.category,
                })?;
                Ok((tag, count))
            })
            .collect()
    }
}
