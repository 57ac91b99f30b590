use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::seo::{Seo, SeoFields, SeoId, SeoRepository};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteSeoRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSeoRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SeoRow {
    id: i64,
    article_id: i64,
    meta_title: Option<String>,
    meta_desc: Option<String>,
    meta_image: Option<String>,
    og_image: Option<String>,
    robots: Option<String>,
    structured_data: Option<Json<serde_json::Value>>,
}

impl TryFrom<SeoRow> for Seo {
    type Error = DomainError;

    fn try_from(row: SeoRow) -> Result<Self, Self::Error> {
        Ok(Seo {
            id: SeoId(row.id),
            article_id: ArticleId::new(row.article_id)?,
            fields: SeoFields {
                meta_title: row.meta_title,
                meta_desc: row.meta_desc,
                meta_image: row.meta_image,
                og_image: row.og_image,
                robots: row.robots,
                structured_data: row.structured_data.map(|json| json.0),
            },
        })
    }
}

#[async_trait]
impl SeoRepository for SqliteSeoRepository {
    async fn upsert(&self, article_id: ArticleId, fields: SeoFields) -> DomainResult<Seo> {
        // Every column is written on conflict: the record is a full replace
        // keyed by the owning article, never a merge.
        let row = sqlx::query_as::<_, SeoRow>(
            "INSERT INTO seo (article_id, meta_title, meta_desc, meta_image, og_image, robots, structured_data) VALUES (?, ?, ?, ?, ?, ?, ?) ON CONFLICT(article_id) DO UPDATE SET meta_title = excluded.meta_title, meta_desc = excluded.meta_desc, meta_image = excluded.meta_image, og_image = excluded.og_image, robots = excluded.robots, structured_data = excluded.structured_data RETURNING id, article_id, meta_title, meta_desc, meta_image, og_image, robots, structured_data",
        )
        .bind(i64::from(article_id))
        .bind(fields.meta_title)
        .bind(fields.meta_desc)
        .bind(fields.meta_image)
        .bind(fields.og_image)
        .bind(fields.robots)
        .bind(fields.structured_data.map(Json))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Seo::try_from(row)
    }

    async fn find_by_article(&self, article_id: ArticleId) -> DomainResult<Option<Seo>> {
        let row = sqlx::query_as::<_, SeoRow>(
            "SELECT id, article_id, meta_title, meta_desc, meta_image, og_image, robots, structured_data FROM seo WHERE article_id = ?",
        )
        .bind(i64::from(article_id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Seo::try_from).transpose()
    }

    async fn delete_by_article(&self, article_id: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM seo WHERE article_id = ?")
            .bind(i64::from(article_id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
