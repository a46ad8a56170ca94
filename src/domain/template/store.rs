//! Template storage with CRUD operations

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::types::{Template, TemplateError, TemplateResult, TemplateUpdate};

/// In-memory template storage
pub struct TemplateStore {
    templates: DashMap<String, Template>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    /// Create a new template store
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    /// Create a new template
    pub fn create(&self, template: Template) -> TemplateResult<Template> {
        template.validate()?;

        match self.templates.entry(template.id.clone()) {
            Entry::Occupied(_) => Err(TemplateError::AlreadyExists(template.id)),
            Entry::Vacant(slot) => {
                slot.insert(template.clone());
                Ok(template)
            }
        }
    }

    /// Insert a template, replacing any existing one with the same ID
    pub fn upsert(&self, mut template: Template) -> TemplateResult<Template> {
        template.validate()?;

        if let Some(existing) = self.templates.get(&template.id) {
            template.created_at = existing.created_at;
        }

        self.templates.insert(template.id.clone(), template.clone());
        Ok(template)
    }

    /// Get a template by ID
    pub fn get(&self, id: &str) -> TemplateResult<Template> {
        self.templates
            .get(id)
            .map(|t| t.clone())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// Get only the fragment text of a template
    pub fn body(&self, id: &str) -> TemplateResult<String> {
        self.templates
            .get(id)
            .map(|t| t.body.clone())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// List all templates, sorted by ID
    pub fn list(&self) -> Vec<Template> {
        let mut templates: Vec<Template> = self
            .templates
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        templates.sort_by(|a, b| a.id.cmp(&b.id));
        templates
    }

    /// Update an existing template
    pub fn update(&self, id: &str, updates: TemplateUpdate) -> TemplateResult<Template> {
        let mut template = self.get(id)?;

        if let Some(body) = updates.body {
            template.body = body;
        }

        if let Some(description) = updates.description {
            template.description = description;
        }

        template.updated_at = Utc::now();
        template.validate()?;

        self.templates.insert(id.to_string(), template.clone());

        Ok(template)
    }

    /// Delete a template by ID
    pub fn delete(&self, id: &str) -> TemplateResult<()> {
        self.templates
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// Check if a template exists
    pub fn exists(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Get the number of templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }

    /// Register every `*.html` file in `dir`, keyed by file stem.
    ///
    /// Existing templates with the same ID are replaced. Files whose stem is
    /// not a valid template ID, or whose body is too large, are skipped with a
    /// warning. Returns the number of files loaded.
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> TemplateResult<usize> {
        let dir = dir.as_ref();
        let io_err = |source: std::io::Error| TemplateError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut loaded = 0;
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();

            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }

            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!(path = %path.display(), "Skipping template with non UTF-8 file name");
                continue;
            };

            let body = fs::read_to_string(&path).map_err(|source| TemplateError::Io {
                path: path.clone(),
                source,
            })?;

            let template = Template::new(id, body);
            if let Err(e) = template.validate() {
                tracing::warn!(path = %path.display(), error = %e, "Skipping invalid template file");
                continue;
            }

            self.upsert(template)?;
            tracing::debug!(template_id = %id, path = %path.display(), "Loaded template");
            loaded += 1;
        }

        tracing::info!(dir = %dir.display(), count = loaded, "Template directory loaded");
        Ok(loaded)
    }
}

/// Create an Arc-wrapped template store
pub fn create_template_store() -> Arc<TemplateStore> {
    Arc::new(TemplateStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_create_and_get() {
        let store = TemplateStore::new();

        let template = Template::new("test-template", "<p>{content}</p>")
            .with_description("A test template");

        let created = store.create(template).unwrap();
        assert_eq!(created.id, "test-template");

        let retrieved = store.get("test-template").unwrap();
        assert_eq!(retrieved.body, "<p>{content}</p>");
        assert_eq!(retrieved.description.as_deref(), Some("A test template"));
        assert_eq!(store.body("test-template").unwrap(), "<p>{content}</p>");
    }

    #[test]
    fn test_store_create_duplicate() {
        let store = TemplateStore::new();

        let template = Template::new("duplicate", "{content}");

        store.create(template.clone()).unwrap();
        assert!(matches!(
            store.create(template),
            Err(TemplateError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_store_create_invalid() {
        let store = TemplateStore::new();
        assert!(matches!(
            store.create(Template::new("bad id", "")),
            Err(TemplateError::InvalidId(_))
        ));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_store_upsert_keeps_created_at() {
        let store = TemplateStore::new();

        let first = store.upsert(Template::new("upsert", "v1")).unwrap();
        let second = store.upsert(Template::new("upsert", "v2")).unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert_eq!(store.body("upsert").unwrap(), "v2");
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_store_update() {
        let store = TemplateStore::new();

        store.create(Template::new("update-test", "Original")).unwrap();

        let updates = TemplateUpdate {
            body: Some("Updated".to_string()),
            description: Some(Some("now described".to_string())),
        };

        let updated = store.update("update-test", updates).unwrap();
        assert_eq!(updated.body, "Updated");
        assert_eq!(updated.description.as_deref(), Some("now described"));
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn test_store_update_missing() {
        let store = TemplateStore::new();
        assert!(matches!(
            store.update("missing", TemplateUpdate::default()),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_store_delete() {
        let store = TemplateStore::new();

        store.create(Template::new("delete-test", "")).unwrap();
        assert!(store.exists("delete-test"));

        store.delete("delete-test").unwrap();
        assert!(!store.exists("delete-test"));
        assert!(matches!(
            store.delete("delete-test"),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_store_list_sorted() {
        let store = TemplateStore::new();

        for i in [2, 0, 1] {
            store
                .create(Template::new(format!("template-{}", i), "{content}"))
                .unwrap();
        }

        let ids: Vec<String> = store.list().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["template-0", "template-1", "template-2"]);
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("title.html"), "<h1>{content}</h1>").unwrap();
        fs::write(dir.path().join("text.html"), "<p>{content}</p>").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let store = TemplateStore::new();
        assert_eq!(store.load_dir(dir.path()).unwrap(), 2);
        assert_eq!(store.body("title").unwrap(), "<h1>{content}</h1>");
        assert!(!store.exists("notes"));
    }

    #[test]
    fn test_load_dir_skips_invalid_file_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("text.html"), "<p>{content}</p>").unwrap();
        fs::write(dir.path().join("text copy.html"), "<p>copy</p>").unwrap();

        let store = TemplateStore::new();
        assert_eq!(store.load_dir(dir.path()).unwrap(), 1);
        assert_eq!(store.body("text").unwrap(), "<p>{content}</p>");
        assert!(!store.exists("text copy"));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_load_dir_missing() {
        let store = TemplateStore::new();
        assert!(matches!(
            store.load_dir("/definitely/not/a/template/dir"),
            Err(TemplateError::Io { .. })
        ));
    }
}
