// src/domain/errors.rs
//
// Error taxonomy shared by the article, tag and seo modules. Conflicts are
// first-class because slug and tag-name uniqueness is ultimately enforced by
// the store, not by in-process checks.
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("conflicts with an existing record: {0}")]
    Conflict(String),
    #[error("no such record: {0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Persistence(String),
}
