//! JSON description of a mail document.
//!
//! A blueprint lists the top-level components of a document; each node is
//! tagged with its `type` and carries the fields of that component kind.
//! Omitted fields fall back to the component's defaults.
//!
//! ```json
//! {
//!   "components": [
//!     { "type": "section", "children": [
//!       { "type": "title", "content": "Your order shipped", "brand": "Ara" },
//!       { "type": "text", "content": "It is on its way.", "alignment": "center" },
//!       { "type": "button", "content": "Track it", "url": "https://example.com/t/1" }
//!     ]},
//!     { "type": "footer", "content": "Ara Inc." }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::component::{
    Alignment, Button, Column, Component, Container, Divider, DocumentBuilder, Footer, Image,
    Leaf, Row, Section, Spacer, Text, Title,
};
use crate::error::Result;
use crate::template::{PlaceholderMap, TemplateResult};

/// Top-level document description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Blueprint {
    #[serde(default)]
    pub components: Vec<Node>,
}

/// One component in a blueprint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Title {
        content: String,
        #[serde(default)]
        logo: Option<String>,
        #[serde(default)]
        brand: Option<String>,
        #[serde(default)]
        background_color: Option<String>,
        #[serde(default)]
        separator_color: Option<String>,
        #[serde(default)]
        brand_font_color: Option<String>,
    },
    Text {
        content: String,
        #[serde(default)]
        alignment: Option<Alignment>,
        #[serde(default)]
        font_size: Option<u32>,
        #[serde(default)]
        color: Option<String>,
    },
    Button {
        content: String,
        url: String,
        #[serde(default)]
        background_color: Option<String>,
        #[serde(default)]
        font_color: Option<String>,
        #[serde(default)]
        alignment: Option<Alignment>,
    },
    Image {
        src: String,
        #[serde(default)]
        alt: String,
        #[serde(default)]
        width: Option<u8>,
        #[serde(default)]
        alignment: Option<Alignment>,
    },
    Divider {
        #[serde(default)]
        color: Option<String>,
    },
    Spacer {
        #[serde(default)]
        height: Option<u32>,
    },
    Footer {
        content: String,
        #[serde(default)]
        year: Option<i32>,
        #[serde(default)]
        alignment: Option<Alignment>,
    },
    Section {
        #[serde(default)]
        children: Vec<Node>,
        #[serde(default)]
        background_color: Option<String>,
        #[serde(default)]
        padding: Option<u32>,
    },
    Row {
        #[serde(default)]
        children: Vec<Node>,
    },
    Column {
        #[serde(default)]
        children: Vec<Node>,
        #[serde(default)]
        width: Option<u8>,
    },
    /// Leaf rendered through any registered template
    CustomLeaf {
        template: String,
        #[serde(default)]
        content: String,
        #[serde(default)]
        placeholders: PlaceholderMap,
    },
    /// Container rendered through any registered template
    CustomContainer {
        template: String,
        #[serde(default)]
        children: Vec<Node>,
        #[serde(default)]
        placeholders: PlaceholderMap,
    },
}

fn build_children(children: Vec<Node>) -> TemplateResult<Vec<Component>> {
    children.into_iter().map(Node::into_component).collect()
}

impl Node {
    /// Convert this node, and its children, into a renderable component
    pub fn into_component(self) -> TemplateResult<Component> {
        let component: Component = match self {
            Node::Title {
                content,
                logo,
                brand,
                background_color,
                separator_color,
                brand_font_color,
            } => {
                let mut title = Title::new(content);
                if let Some(logo) = logo {
                    title.logo = logo;
                }
                if let Some(brand) = brand {
                    title.brand = brand;
                }
                if let Some(color) = background_color {
                    title.background_color = color;
                }
                if let Some(color) = separator_color {
                    title.separator_color = color;
                }
                if let Some(color) = brand_font_color {
                    title.brand_font_color = color;
                }
                Box::new(title)
            }
            Node::Text {
                content,
                alignment,
                font_size,
                color,
            } => {
                let mut text = Text::new(content);
                if let Some(alignment) = alignment {
                    text.alignment = alignment;
                }
                if let Some(px) = font_size {
                    text.font_size = px;
                }
                if let Some(color) = color {
                    text.color = color;
                }
                Box::new(text)
            }
            Node::Button {
                content,
                url,
                background_color,
                font_color,
                alignment,
            } => {
                let mut button = Button::new(content, url);
                if let Some(color) = background_color {
                    button.background_color = color;
                }
                if let Some(color) = font_color {
                    button.font_color = color;
                }
                if let Some(alignment) = alignment {
                    button.alignment = alignment;
                }
                Box::new(button)
            }
            Node::Image {
                src,
                alt,
                width,
                alignment,
            } => {
                let mut image = Image::new(src, alt);
                if let Some(width) = width {
                    image.width = width;
                }
                if let Some(alignment) = alignment {
                    image.alignment = alignment;
                }
                Box::new(image)
            }
            Node::Divider { color } => {
                let mut divider = Divider::new();
                if let Some(color) = color {
                    divider.color = color;
                }
                Box::new(divider)
            }
            Node::Spacer { height } => Box::new(height.map(Spacer::new).unwrap_or_default()),
            Node::Footer {
                content,
                year,
                alignment,
            } => {
                let mut footer = Footer::new(content);
                if let Some(year) = year {
                    footer.year = year;
                }
                if let Some(alignment) = alignment {
                    footer.alignment = alignment;
                }
                Box::new(footer)
            }
            Node::Section {
                children,
                background_color,
                padding,
            } => {
                let mut section = Section::new();
                if let Some(color) = background_color {
                    section.background_color = color;
                }
                if let Some(px) = padding {
                    section.padding = px;
                }
                section.extend_children(build_children(children)?);
                Box::new(section)
            }
            Node::Row { children } => {
                let mut row = Row::new();
                row.extend_children(build_children(children)?);
                Box::new(row)
            }
            Node::Column { children, width } => {
                let mut column = width.map(Column::new).unwrap_or_default();
                column.extend_children(build_children(children)?);
                Box::new(column)
            }
            Node::CustomLeaf {
                template,
                content,
                placeholders,
            } => {
                let mut leaf = Leaf::new(template, content)?;
                leaf.placeholders = placeholders;
                Box::new(leaf)
            }
            Node::CustomContainer {
                template,
                children,
                placeholders,
            } => {
                let mut container = Container::with_children(template, build_children(children)?)?;
                container.placeholders = placeholders;
                Box::new(container)
            }
        };

        Ok(component)
    }
}

impl Blueprint {
    /// Parse a blueprint from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Assemble the document tree described by this blueprint
    pub fn into_document(self) -> Result<DocumentBuilder> {
        let children = build_children(self.components)?;
        tracing::debug!(components = children.len(), "Blueprint assembled");
        Ok(DocumentBuilder::with_children(children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::template::{BundledTemplates, Template, TemplateError, TemplateStore};

    #[test]
    fn test_parse_nested_blueprint() {
        let blueprint = Blueprint::from_json(
            r#"{
                "components": [
                    {"type": "section", "padding": 12, "children": [
                        {"type": "title", "content": "Hi", "brand": "Ara"},
                        {"type": "row", "children": [
                            {"type": "column", "width": 50, "children": [{"type": "text", "content": "L"}]},
                            {"type": "column", "width": 50, "children": [{"type": "text", "content": "R"}]}
                        ]}
                    ]},
                    {"type": "divider"},
                    {"type": "footer", "content": "Bye", "year": 2024}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(blueprint.components.len(), 3);
        match &blueprint.components[0] {
            Node::Section {
                children, padding, ..
            } => {
                assert_eq!(children.len(), 2);
                assert_eq!(*padding, Some(12));
            }
            other => panic!("expected section, got {:?}", other),
        }
    }

    #[test]
    fn test_render_blueprint_with_bundled_templates() {
        let document = Blueprint::from_json(
            r#"{"components": [
                {"type": "text", "content": "First", "alignment": "center"},
                {"type": "button", "content": "Open", "url": "https://example.com/open"},
                {"type": "footer", "content": "Last", "year": 1999}
            ]}"#,
        )
        .unwrap()
        .into_document()
        .unwrap();

        let html = document.build(&BundledTemplates).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("text-align:center"));
        assert!(html.contains("href=\"https://example.com/open\""));
        assert!(html.contains("&copy; 1999"));
        assert!(html.find("First").unwrap() < html.find("Last").unwrap());
    }

    #[test]
    fn test_custom_nodes() {
        let store = TemplateStore::new();
        store.create(Template::new("document", "{content}")).unwrap();
        store
            .create(Template::new("callout", "<aside class=\"{tone}\">{content}</aside>"))
            .unwrap();
        store.create(Template::new("em", "<em>{content}</em>")).unwrap();

        let document = Blueprint::from_json(
            r#"{"components": [
                {"type": "custom_container", "template": "callout", "placeholders": {"tone": "warn"},
                 "children": [{"type": "custom_leaf", "template": "em", "content": "careful"}]}
            ]}"#,
        )
        .unwrap()
        .into_document()
        .unwrap();

        assert_eq!(
            document.build(&store).unwrap(),
            "<aside class=\"warn\"><em>careful</em></aside>"
        );
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result = Blueprint::from_json(r#"{"components": [{"type": "carousel"}]}"#);
        assert!(matches!(result, Err(AppError::Blueprint(_))));
    }

    #[test]
    fn test_invalid_custom_template_id() {
        let result = Blueprint::from_json(
            r#"{"components": [{"type": "custom_leaf", "template": ""}]}"#,
        )
        .unwrap()
        .into_document();

        assert!(matches!(
            result,
            Err(AppError::Template(TemplateError::InvalidId(_)))
        ));
    }

    #[test]
    fn test_empty_blueprint() {
        let document = Blueprint::from_json("{}").unwrap().into_document().unwrap();
        assert!(document.is_empty());
    }
}
