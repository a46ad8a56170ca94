//! Document builder: the root of every mail document tree

use std::time::Instant;

use crate::metrics::RenderMetrics;
use crate::template::{PlaceholderMap, TemplateResult, TemplateSource};

use super::container::{impl_children, render_container};
use super::{Component, MailComponent};

/// Template ID of the top-level HTML wrapper
pub const DOCUMENT_TEMPLATE_ID: &str = "document";

/// Root container wrapping its components in the document template
#[derive(Default)]
pub struct DocumentBuilder {
    /// Top-level components in render order
    pub children: Vec<Component>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document holding `children` in the given order
    pub fn with_children(children: impl IntoIterator<Item = Component>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    /// Render the whole document.
    ///
    /// Either the complete HTML is returned or the first missing template
    /// aborts the build; there is no partial output.
    #[tracing::instrument(skip_all, fields(components = self.children.len()))]
    pub fn build(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        let start = Instant::now();
        let result = self.render(templates);
        let elapsed = start.elapsed().as_secs_f64();

        match &result {
            Ok(html) => {
                RenderMetrics::record_success(elapsed);
                tracing::debug!(bytes = html.len(), elapsed_secs = elapsed, "Document built");
            }
            Err(e) => {
                RenderMetrics::record_failure(elapsed);
                tracing::error!(error = %e, "Document build failed");
            }
        }

        result
    }
}

impl_children!(DocumentBuilder);

impl MailComponent for DocumentBuilder {
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        render_container(
            templates,
            DOCUMENT_TEMPLATE_ID,
            &self.children,
            PlaceholderMap::new(),
        )
    }
}
