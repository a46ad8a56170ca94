//! Leaf components: a single content value rendered into a fragment

use crate::template::{
    require_id, substitute, PlaceholderMap, TemplateResult, TemplateSource,
};

use super::{resolve, MailComponent, CONTENT_PLACEHOLDER};

/// Render a leaf: resolve `template_id`, then substitute `content` and the
/// kind-specific `extra` placeholders into it.
///
/// `content` always wins over an extra placeholder of the same name.
pub fn render_leaf(
    templates: &dyn TemplateSource,
    template_id: &str,
    content: &str,
    extra: PlaceholderMap,
) -> TemplateResult<String> {
    let fragment = resolve(templates, template_id)?;

    let mut placeholders = extra;
    placeholders.insert(CONTENT_PLACEHOLDER.to_string(), content.to_string());

    Ok(substitute(&fragment, &placeholders))
}

/// A leaf of any kind, identified by its template ID
#[derive(Debug, Clone)]
pub struct Leaf {
    template_id: String,

    /// Text substituted for `{content}`
    pub content: String,

    /// Additional placeholders for this kind
    pub placeholders: PlaceholderMap,
}

impl Leaf {
    /// Create a leaf, rejecting an empty template ID
    pub fn new(template_id: impl Into<String>, content: impl Into<String>) -> TemplateResult<Self> {
        let template_id = template_id.into();
        require_id(&template_id)?;

        Ok(Self {
            template_id,
            content: content.into(),
            placeholders: PlaceholderMap::new(),
        })
    }

    /// Add or replace an extra placeholder
    pub fn with_placeholder(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.placeholders.insert(name.into(), value.into());
        self
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }
}

impl MailComponent for Leaf {
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        render_leaf(
            templates,
            &self.template_id,
            &self.content,
            self.placeholders.clone(),
        )
    }
}
