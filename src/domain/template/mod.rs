//! Mail template system.
//!
//! This module provides:
//! - Template fragments with `{placeholder}` markers
//! - The [`TemplateSource`] capability components resolve fragments through
//! - Bundled catalog fragments and an in-memory store for overrides
//! - The single-pass substitution engine
//!
//! # Example
//!
//! ```ignore
//! let store = TemplateStore::new();
//! store.create(Template::new("greeting", "<p>Hello, {name}!</p>"))?;
//!
//! let mut placeholders = PlaceholderMap::new();
//! placeholders.insert("name".to_string(), "World".to_string());
//!
//! let body = store.get_template("greeting")?;
//! assert_eq!(substitute(&body, &placeholders), "<p>Hello, World!</p>");
//! ```

mod source;
mod store;
mod substitution;
mod types;

pub use source::{BundledTemplates, LayeredTemplates, TemplateSource};
pub use store::{create_template_store, TemplateStore};
pub use substitution::{placeholder_names, substitute, PlaceholderMap};
pub use types::{
    require_id, validate_id, Template, TemplateError, TemplateResult, TemplateUpdate,
    MAX_TEMPLATE_BYTES,
};
