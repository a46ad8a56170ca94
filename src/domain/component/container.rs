//! Container components: ordered children rendered into a wrapper fragment

use crate::template::{
    require_id, substitute, PlaceholderMap, TemplateResult, TemplateSource,
};

use super::{resolve, Component, MailComponent, CONTENT_PLACEHOLDER};

/// Render `children` in order and concatenate their output.
///
/// No separator is inserted between children. The first failing child aborts
/// the whole render.
pub fn render_children(
    templates: &dyn TemplateSource,
    children: &[Component],
) -> TemplateResult<String> {
    let mut output = String::new();
    for child in children {
        output.push_str(&child.render(templates)?);
    }
    Ok(output)
}

/// Render a container: resolve `template_id`, render the children, then
/// substitute their joined output for `{content}` alongside `extra`.
pub fn render_container(
    templates: &dyn TemplateSource,
    template_id: &str,
    children: &[Component],
    extra: PlaceholderMap,
) -> TemplateResult<String> {
    let fragment = resolve(templates, template_id)?;
    let child_output = render_children(templates, children)?;

    let mut placeholders = extra;
    placeholders.insert(CONTENT_PLACEHOLDER.to_string(), child_output);

    Ok(substitute(&fragment, &placeholders))
}

/// Builder-style child management shared by every container type
macro_rules! impl_children {
    ($($ty:ty),+ $(,)?) => {$(
        impl $ty {
            /// Append a child, builder style
            pub fn child(mut self, component: impl $crate::component::MailComponent + 'static) -> Self {
                self.children.push(Box::new(component));
                self
            }

            /// Append a child in place
            pub fn push(&mut self, component: impl $crate::component::MailComponent + 'static) {
                self.children.push(Box::new(component));
            }

            /// Append children that are already boxed
            pub fn extend_children(&mut self, children: impl IntoIterator<Item = $crate::component::Component>) {
                self.children.extend(children);
            }

            /// Number of direct children
            pub fn len(&self) -> usize {
                self.children.len()
            }

            pub fn is_empty(&self) -> bool {
                self.children.is_empty()
            }
        }
    )+};
}

pub(crate) use impl_children;

/// A container of any kind, identified by its template ID
pub struct Container {
    template_id: String,

    /// Children in render order
    pub children: Vec<Component>,

    /// Additional placeholders for this kind
    pub placeholders: PlaceholderMap,
}

impl Container {
    /// Create an empty container, rejecting an empty template ID
    pub fn new(template_id: impl Into<String>) -> TemplateResult<Self> {
        let template_id = template_id.into();
        require_id(&template_id)?;

        Ok(Self {
            template_id,
            children: Vec::new(),
            placeholders: PlaceholderMap::new(),
        })
    }

    /// Create a container holding `children` in the given order
    pub fn with_children(
        template_id: impl Into<String>,
        children: impl IntoIterator<Item = Component>,
    ) -> TemplateResult<Self> {
        let mut container = Self::new(template_id)?;
        container.children.extend(children);
        Ok(container)
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

impl_children!(Container);

impl MailComponent for Container {
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        render_container(
            templates,
            &self.template_id,
            &self.children,
            self.placeholders.clone(),
        )
    }
}
