//! Built-in component kinds backed by the bundled fragments

use std::fmt;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::template::{PlaceholderMap, TemplateResult, TemplateSource};

use super::container::{impl_children, render_container};
use super::leaf::render_leaf;
use super::{Component, MailComponent};

/// Horizontal alignment, rendered as the CSS keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn placeholders<const N: usize>(entries: [(&str, String); N]) -> PlaceholderMap {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

// ============================================================================
// Leaves
// ============================================================================

/// Header with brand logo and name above a headline
#[derive(Debug, Clone)]
pub struct Title {
    pub content: String,
    /// Logo image URL
    pub logo: String,
    pub brand: String,
    pub background_color: String,
    /// Color of the rule under the header
    pub separator_color: String,
    pub brand_font_color: String,
}

impl Title {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            logo: String::new(),
            brand: String::new(),
            background_color: "#ffffff".to_string(),
            separator_color: "#e5e5e5".to_string(),
            brand_font_color: "#333333".to_string(),
        }
    }

    pub fn logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = logo.into();
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn separator_color(mut self, color: impl Into<String>) -> Self {
        self.separator_color = color.into();
        self
    }

    pub fn brand_font_color(mut self, color: impl Into<String>) -> Self {
        self.brand_font_color = color.into();
        self
    }
}

impl MailComponent for Title {
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        let extra = placeholders([
            ("logo", self.logo.clone()),
            ("brand", self.brand.clone()),
            ("backgroundColor", self.background_color.clone()),
            ("separatorColor", self.separator_color.clone()),
            ("brandFontColor", self.brand_font_color.clone()),
        ]);
        render_leaf(templates, "title", &self.content, extra)
    }
}

/// Paragraph of body text
#[derive(Debug, Clone)]
pub struct Text {
    pub content: String,
    pub alignment: Alignment,
    /// Font size in pixels
    pub font_size: u32,
    pub color: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            alignment: Alignment::Left,
            font_size: 14,
            color: "#333333".to_string(),
        }
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn font_size(mut self, px: u32) -> Self {
        self.font_size = px;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

impl MailComponent for Text {
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        let extra = placeholders([
            ("alignment", self.alignment.to_string()),
            ("fontSize", format!("{}px", self.font_size)),
            ("color", self.color.clone()),
        ]);
        render_leaf(templates, "text", &self.content, extra)
    }
}

/// Call-to-action link styled as a button
#[derive(Debug, Clone)]
pub struct Button {
    /// Button label
    pub content: String,
    /// Link target
    pub url: String,
    pub background_color: String,
    pub font_color: String,
    pub alignment: Alignment,
}

impl Button {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: label.into(),
            url: url.into(),
            background_color: "#1a73e8".to_string(),
            font_color: "#ffffff".to_string(),
            alignment: Alignment::Center,
        }
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn font_color(mut self, color: impl Into<String>) -> Self {
        self.font_color = color.into();
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl MailComponent for Button {
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        let extra = placeholders([
            ("url", self.url.clone()),
            ("backgroundColor", self.background_color.clone()),
            ("fontColor", self.font_color.clone()),
            ("alignment", self.alignment.to_string()),
        ]);
        render_leaf(templates, "button", &self.content, extra)
    }
}

/// Inline image; the content is its alt text
#[derive(Debug, Clone)]
pub struct Image {
    pub src: String,
    pub alt: String,
    /// Width as a percentage of the enclosing cell
    pub width: u8,
    pub alignment: Alignment,
}

impl Image {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width: 100,
            alignment: Alignment::Center,
        }
    }

    pub fn width(mut self, percent: u8) -> Self {
        self.width = percent;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl MailComponent for Image {
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        let extra = placeholders([
            ("src", self.src.clone()),
            ("width", self.width.to_string()),
            ("alignment", self.alignment.to_string()),
        ]);
        render_leaf(templates, "image", &self.alt, extra)
    }
}

/// Horizontal rule
#[derive(Debug, Clone)]
pub struct Divider {
    pub color: String,
}

impl Default for Divider {
    fn default() -> Self {
        Self {
            color: "#e5e5e5".to_string(),
        }
    }
}

impl Divider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

impl MailComponent for Divider {
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        let extra = placeholders([("color", self.color.clone())]);
        render_leaf(templates, "divider", "", extra)
    }
}

/// Vertical whitespace
#[derive(Debug, Clone)]
pub struct Spacer {
    /// Height in pixels
    pub height: u32,
}

impl Default for Spacer {
    fn default() -> Self {
        Self { height: 16 }
    }
}

impl Spacer {
    pub fn new(height: u32) -> Self {
        Self { height }
    }
}

impl MailComponent for Spacer {
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        let extra = placeholders([("height", format!("{}px", self.height))]);
        render_leaf(templates, "spacer", "", extra)
    }
}

/// Closing notice with a copyright year
#[derive(Debug, Clone)]
pub struct Footer {
    pub content: String,
    /// Copyright year, the current UTC year unless overridden
    pub year: i32,
    pub alignment: Alignment,
}

impl Footer {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            year: Utc::now().year(),
            alignment: Alignment::Center,
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl MailComponent for Footer {
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        let extra = placeholders([
            ("year", self.year.to_string()),
            ("alignment", self.alignment.to_string()),
        ]);
        render_leaf(templates, "footer", &self.content, extra)
    }
}

// ============================================================================
// Containers
// ============================================================================

/// Padded block with its own background
pub struct Section {
    pub children: Vec<Component>,
    pub background_color: String,
    /// Padding in pixels on every side
    pub padding: u32,
}

impl Default for Section {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            background_color: "#ffffff".to_string(),
            padding: 24,
        }
    }
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn padding(mut self, px: u32) -> Self {
        self.padding = px;
        self
    }
}

impl MailComponent for Section {
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        let extra = placeholders([
            ("backgroundColor", self.background_color.clone()),
            ("padding", format!("{}px", self.padding)),
        ]);
        render_container(templates, "section", &self.children, extra)
    }
}

/// Horizontal group of [`Column`]s
#[derive(Default)]
pub struct Row {
    pub children: Vec<Component>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MailComponent for Row {
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        render_container(templates, "row", &self.children, PlaceholderMap::new())
    }
}

/// One cell of a [`Row`]
pub struct Column {
    pub children: Vec<Component>,
    /// Width as a percentage of the row
    pub width: u8,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            width: 100,
        }
    }
}

impl Column {
    pub fn new(width: u8) -> Self {
        Self {
            children: Vec::new(),
            width,
        }
    }
}

impl MailComponent for Column {
    fn render(&self, templates: &dyn TemplateSource) -> TemplateResult<String> {
        let extra = placeholders([("width", self.width.to_string())]);
        render_container(templates, "column", &self.children, extra)
    }
}

impl_children!(Section, Row, Column);
