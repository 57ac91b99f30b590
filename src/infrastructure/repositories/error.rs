use crate::domain::errors::DomainError;

// SQLite reports the offending column set in the constraint message.
const CNT_ARTICLE_SLUG: &str = "articles.slug";
const CNT_TAG_NAME: &str = "tags.name";
const CNT_SEO_ARTICLE: &str = "seo.article_id";

/// Map store failures onto domain errors. Unique-constraint violations are
/// the interesting case: the slug probe loop is inherently racy and the
/// store's constraint is the final authority, so a losing writer must see a
/// distinguishable conflict rather than an opaque persistence failure.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            if message.contains("UNIQUE constraint failed") {
                return if message.contains(CNT_ARTICLE_SLUG) {
                    DomainError::Conflict("slug already exists".into())
                } else if message.contains(CNT_TAG_NAME) {
                    DomainError::Conflict("tag name already exists".into())
                } else if message.contains(CNT_SEO_ARTICLE) {
                    DomainError::Conflict("seo record already exists for article".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }
            if message.contains("FOREIGN KEY constraint failed") {
                return DomainError::NotFound("referenced record not found".into());
            }
            DomainError::Persistence(message.to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
