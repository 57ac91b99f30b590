use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::seo::{Seo, SeoFields};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoDto {
    pub id: i64,
    pub article_id: i64,
    pub meta_title: Option<String>,
    pub meta_desc: Option<String>,
    pub meta_image: Option<String>,
    pub og_image: Option<String>,
    pub robots: Option<String>,
    pub structured_data: Option<Value>,
}

impl From<Seo> for SeoDto {
    fn from(seo: Seo) -> Self {
        Self {
            id: seo.id.into(),
            article_id: seo.article_id.into(),
            meta_title: seo.fields.meta_title,
            meta_desc: seo.fields.meta_desc,
            meta_image: seo.fields.meta_image,
            og_image: seo.fields.og_image,
            robots: seo.fields.robots,
            structured_data: seo.fields.structured_data,
        }
    }
}

/// Partial SEO payload as submitted. Normalization always yields the full
/// field set: present fields keep their value, everything else becomes an
/// explicit `None` (full replace, never a merge).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeoInput {
    pub meta_title: Option<String>,
    pub meta_desc: Option<String>,
    pub meta_image: Option<String>,
    pub og_image: Option<String>,
    pub robots: Option<String>,
    pub structured_data: Option<Value>,
}

impl SeoInput {
    /// A structured-data value submitted as a JSON string is parsed here;
    /// malformed JSON is a validation failure before any write happens.
    pub fn normalize(self) -> ApplicationResult<SeoFields> {
        let structured_data = match self.structured_data {
            Some(Value::String(raw)) => Some(serde_json::from_str(&raw).map_err(|err| {
                ApplicationError::validation(format!("malformed structured data: {err}"))
            })?),
            other => other,
        };

        Ok(SeoFields {
            meta_title: self.meta_title,
            meta_desc: self.meta_desc,
            meta_image: self.meta_image,
            og_image: self.og_image,
            robots: self.robots,
            structured_data,
        })
    }
}

/// Outcome of the best-effort SEO side write. A failed write never fails the
/// enclosing article mutation; it is reported here and logged.
#[derive(Debug, Clone)]
pub enum SeoWriteOutcome {
    Written(SeoDto),
    Failed,
}

impl SeoWriteOutcome {
    /// The written record, if the side write went through. A `Failed` write
    /// surfaces as an absent SEO record on the returned article.
    pub fn into_written(self) -> Option<SeoDto> {
        match self {
            Self::Written(seo) => Some(seo),
            Self::Failed => None,
        }
    }
}
