use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Invalid blueprint: {0}")]
    Blueprint(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl AppError {
    /// Stable error code for log records and process output
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Template(TemplateError::NotFound(_)) => "TEMPLATE_NOT_FOUND",
            AppError::Template(_) => "TEMPLATE_ERROR",
            AppError::Blueprint(_) => "BLUEPRINT_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Metrics(_) => "METRICS_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_not_found_code() {
        let err: AppError = TemplateError::NotFound("title".to_string()).into();
        assert_eq!(err.code(), "TEMPLATE_NOT_FOUND");
        assert_eq!(err.to_string(), "Template error: Template not found: title");
    }

    #[test]
    fn test_blueprint_error_code() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "BLUEPRINT_ERROR");
    }
}
