//! Template types and error definitions

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Largest fragment body accepted by the store (1 MiB)
pub const MAX_TEMPLATE_BYTES: usize = 1024 * 1024;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid template ID: {0}")]
    InvalidId(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Failed to read template from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Check that a component refers to some template.
///
/// Sources may use any identifier scheme (`emails/header`, `layout.v2`), so
/// the only requirement on a node's template ID is that it is not empty.
pub fn require_id(id: &str) -> TemplateResult<()> {
    if id.is_empty() {
        return Err(TemplateError::InvalidId("ID must not be empty".to_string()));
    }
    Ok(())
}

/// Check that a stored template identifier is 1-64 characters of alphanumeric, dash or underscore
pub fn validate_id(id: &str) -> TemplateResult<()> {
    if id.is_empty() || id.len() > 64 {
        return Err(TemplateError::InvalidId(
            "ID must be 1-64 characters".to_string(),
        ));
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(TemplateError::InvalidId(
            "ID must contain only alphanumeric, dash, or underscore".to_string(),
        ));
    }

    Ok(())
}

/// A registered template fragment
#[derive(Debug, Clone)]
pub struct Template {
    /// Unique template identifier (alphanumeric, dash, underscore)
    pub id: String,

    /// Fragment text with {placeholder} markers
    pub body: String,

    /// Template description (optional)
    pub description: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// Create a template stamped with the current time
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            body: body.into(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate the template
    pub fn validate(&self) -> TemplateResult<()> {
        validate_id(&self.id)?;

        if self.body.len() > MAX_TEMPLATE_BYTES {
            return Err(TemplateError::InvalidTemplate(format!(
                "Body must be at most {} bytes",
                MAX_TEMPLATE_BYTES
            )));
        }

        Ok(())
    }
}

/// Fields to change on an existing template; `None` leaves a field as it is
#[derive(Debug, Default)]
pub struct TemplateUpdate {
    pub body: Option<String>,

    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_validation_valid() {
        let template = Template::new("order-shipped", "<p>{content}</p>");
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_template_validation_empty_id() {
        let template = Template::new("", "<p>{content}</p>");
        assert!(matches!(
            template.validate(),
            Err(TemplateError::InvalidId(_))
        ));
    }

    #[test]
    fn test_template_validation_invalid_id_chars() {
        let template = Template::new("invalid/id", "");
        assert!(matches!(
            template.validate(),
            Err(TemplateError::InvalidId(_))
        ));
    }

    #[test]
    fn test_template_validation_oversized_body() {
        let template = Template::new("big", "x".repeat(MAX_TEMPLATE_BYTES + 1));
        assert!(matches!(
            template.validate(),
            Err(TemplateError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn test_require_id_accepts_any_scheme() {
        for id in ["emails/header", "layout.v2", "bad id", "x"] {
            assert!(require_id(id).is_ok(), "{} rejected", id);
        }
        assert!(matches!(require_id(""), Err(TemplateError::InvalidId(_))));
    }

    #[test]
    fn test_not_found_message() {
        let err = TemplateError::NotFound("title".to_string());
        assert_eq!(err.to_string(), "Template not found: title");
    }
}
