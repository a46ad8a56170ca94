//! Mail components: typed nodes that render themselves through template fragments.
//!
//! Every node implements [`MailComponent`]. Leaves substitute their content
//! into their fragment; containers render their children in order, join the
//! output and substitute it as their own content. [`DocumentBuilder`] is the
//! root container and the entry point callers use to produce a document.
//!
//! # Example
//!
//! ```ignore
//! let document = DocumentBuilder::new()
//!     .child(
//!         Section::new()
//!             .child(Title::new("Welcome aboard").brand("Ara"))
//!             .child(Text::new("Thanks for signing up."))
//!             .child(Button::new("Get started", "https://example.com/start")),
//!     )
//!     .child(Footer::new("You are receiving this because you signed up."));
//!
//! let html = document.build(&BundledTemplates)?;
//! ```

mod catalog;
mod container;
mod document;
mod leaf;

pub use catalog::{
    Alignment, Button, Column, Divider, Footer, Image, Row, Section, Spacer, Text, Title,
};
pub use container::{render_children, render_container, Container};
pub use document::{DocumentBuilder, DOCUMENT_TEMPLATE_ID};
pub use leaf::{render_leaf, Leaf};

use std::borrow::Cow;

use crate::metrics::TemplateMetrics;
use crate::template::{TemplateResult, TemplateSource};

/// Placeholder every fragment receives: leaf content, or the joined output
/// of a container's children
pub const CONTENT_PLACEHOLDER: &str = "content";

/// A node in a mail document tree.
///
/// Rendering reads the node's current fields and never mutates them, so the
/// same tree renders to the same text every time it is left unchanged.
pub trait MailComponent: Send + Sync {
    /// Render this node, resolving fragments through `templates`
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String>;
}

/// Owned handle to a child node
pub type Component = Box<dyn MailComponent>;

impl<T: MailComponent + ?Sized> MailComponent for Box<T> {
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        (**self).render(templates)
    }
}

/// Look up a fragment, recording the outcome
fn resolve<'a>(templates: &'a dyn TemplateSource, id: &str) -> TemplateResult<Cow<'a, str>> {
    match templates.get_template(id) {
        Ok(fragment) => {
            TemplateMetrics::record_hit();
            tracing::trace!(template_id = %id, "Template resolved");
            Ok(fragment)
        }
        Err(e) => {
            TemplateMetrics::record_miss();
            tracing::warn!(template_id = %id, error = %e, "Template lookup failed");
            Err(e)
        }
    }
}
