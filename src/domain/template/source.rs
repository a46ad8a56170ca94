//! Template sources: where components look up their fragment text

use std::borrow::Cow;
use std::sync::Arc;

use super::store::TemplateStore;
use super::types::{TemplateError, TemplateResult};

/// Resolves a template identifier to its fragment text
pub trait TemplateSource: Send + Sync {
    /// Fetch the fragment registered under `id`, failing with
    /// [`TemplateError::NotFound`] when there is none
    fn get_template(&self, id: &str) -> TemplateResult<Cow<'_, str>>;
}

impl<T: TemplateSource + ?Sized> TemplateSource for &T {
    fn get_template(&self, id: &str) -> TemplateResult<Cow<'_, str>> {
        (**self).get_template(id)
    }
}

impl<T: TemplateSource + ?Sized> TemplateSource for Arc<T> {
    fn get_template(&self, id: &str) -> TemplateResult<Cow<'_, str>> {
        (**self).get_template(id)
    }
}

impl<T: TemplateSource + ?Sized> TemplateSource for Box<T> {
    fn get_template(&self, id: &str) -> TemplateResult<Cow<'_, str>> {
        (**self).get_template(id)
    }
}

impl TemplateSource for TemplateStore {
    fn get_template(&self, id: &str) -> TemplateResult<Cow<'_, str>> {
        self.body(id).map(Cow::Owned)
    }
}

macro_rules! bundled {
    ($($id:literal),* $(,)?) => {
        &[$(($id, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $id, ".html")))),*]
    };
}

/// Fragments compiled into the binary for the built-in component catalog
const BUNDLED: &[(&str, &str)] = bundled![
    "document", "section", "row", "column", "title", "text", "button", "image", "divider",
    "spacer", "footer",
];

/// The built-in catalog fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledTemplates;

impl BundledTemplates {
    /// Identifiers of every bundled fragment, in catalog order
    pub fn ids() -> impl Iterator<Item = &'static str> {
        BUNDLED.iter().map(|(id, _)| *id)
    }

    /// Look up a bundled fragment without going through the trait
    pub fn get(id: &str) -> Option<&'static str> {
        BUNDLED
            .iter()
            .find(|(bundled_id, _)| *bundled_id == id)
            .map(|(_, body)| *body)
    }
}

impl TemplateSource for BundledTemplates {
    fn get_template(&self, id: &str) -> TemplateResult<Cow<'_, str>> {
        Self::get(id)
            .map(Cow::Borrowed)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }
}

/// Overrides from a [`TemplateStore`] layered on top of the bundled catalog
#[derive(Clone)]
pub struct LayeredTemplates {
    overrides: Arc<TemplateStore>,
}

impl LayeredTemplates {
    pub fn new(overrides: Arc<TemplateStore>) -> Self {
        Self { overrides }
    }

    /// The override store
    pub fn overrides(&self) -> &Arc<TemplateStore> {
        &self.overrides
    }

    /// Every identifier resolvable through this source, sorted
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = BundledTemplates::ids().map(str::to_string).collect();
        ids.extend(self.overrides.list().into_iter().map(|t| t.id));
        ids.sort();
        ids.dedup();
        ids
    }
}

impl TemplateSource for LayeredTemplates {
    fn get_template(&self, id: &str) -> TemplateResult<Cow<'_, str>> {
        match self.overrides.get_template(id) {
            Err(TemplateError::NotFound(_)) => BundledTemplates.get_template(id),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Template;

    #[test]
    fn test_bundled_contains_catalog() {
        for id in BundledTemplates::ids() {
            let body = BundledTemplates.get_template(id).unwrap();
            assert!(body.contains("{content}"), "{} lacks a content marker", id);
        }
    }

    #[test]
    fn test_bundled_missing() {
        assert!(matches!(
            BundledTemplates.get_template("carousel"),
            Err(TemplateError::NotFound(id)) if id == "carousel"
        ));
    }

    #[test]
    fn test_layered_prefers_override() {
        let store = Arc::new(TemplateStore::new());
        store
            .create(Template::new("title", "<h1>{content}</h1>"))
            .unwrap();

        let layered = LayeredTemplates::new(store);
        assert_eq!(layered.get_template("title").unwrap(), "<h1>{content}</h1>");
        assert_eq!(
            layered.get_template("text").unwrap(),
            BundledTemplates::get("text").unwrap()
        );
        assert!(matches!(
            layered.get_template("nope"),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_layered_ids_merge() {
        let store = Arc::new(TemplateStore::new());
        store.create(Template::new("banner", "{content}")).unwrap();
        store.create(Template::new("title", "{content}")).unwrap();

        let ids = LayeredTemplates::new(store).ids();
        assert!(ids.contains(&"banner".to_string()));
        assert_eq!(ids.iter().filter(|id| *id == "title").count(), 1);
    }

    #[test]
    fn test_source_through_arc_and_box() {
        let boxed: Box<dyn TemplateSource> = Box::new(BundledTemplates);
        assert!(boxed.get_template("row").is_ok());

        let shared: Arc<dyn TemplateSource> = Arc::new(BundledTemplates);
        assert!(shared.get_template("row").is_ok());
    }
}
