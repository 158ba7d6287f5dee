//! Template catalog: built-in plus custom templates and the selection
//!
//! Persisted state lives in an injected [`KeyValueStore`]. Storage failures
//! never abort a catalog call; reads degrade to "no custom templates" or
//! the default selection, writes are dropped. The `*_recovered` variants
//! report whether that happened.

use crate::builtin::{builtin_templates, is_builtin, DEFAULT_TEMPLATE_ID};
use crate::error::{ExtractResult, StorageError, StorageResult};
use crate::model::Template;
use crate::pptx::ThemeExtractor;
use crate::settings::CatalogSettings;
use crate::storage::{KeyValueStore, Recovered};

/// Catalog of presentation templates over a storage backend
#[derive(Debug)]
pub struct TemplateCatalog<S: KeyValueStore> {
    storage: S,
    settings: CatalogSettings,
    builtins: Vec<Template>,
}

impl<S: KeyValueStore> TemplateCatalog<S> {
    /// Create a catalog with default settings
    pub fn new(storage: S) -> Self {
        Self::with_settings(storage, CatalogSettings::default())
    }

    /// Create a catalog with explicit settings
    pub fn with_settings(storage: S, settings: CatalogSettings) -> Self {
        Self {
            storage,
            settings,
            builtins: builtin_templates(),
        }
    }

    /// Settings in effect
    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    /// Borrow the storage backend
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Take the storage backend back
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Built-in templates followed by custom templates in insertion order
    pub fn list_templates(&self) -> Vec<Template> {
        let mut templates = self.builtins.clone();
        templates.extend(self.load_custom_templates().into_inner());
        templates
    }

    /// Custom templates only, reporting storage fallbacks
    ///
    /// A list that cannot be read or parsed degrades to empty. Entries whose
    /// colors are not all 6 hex digits are dropped.
    pub fn load_custom_templates(&self) -> Recovered<Vec<Template>> {
        let recovered = Recovered::from_result(self.read_custom_templates(), Vec::new);
        match recovered {
            Recovered::Fresh(templates) => Recovered::Fresh(
                templates
                    .into_iter()
                    .filter(|t| {
                        let ok = t.colors.is_well_formed();
                        if !ok {
                            tracing::warn!(
                                "Dropping custom template {} with malformed colors",
                                t.id
                            );
                        }
                        ok
                    })
                    .collect(),
            ),
            Recovered::Fallback { value, error } => {
                tracing::warn!("Failed to load custom templates, using none: {}", error);
                Recovered::Fallback { value, error }
            }
        }
    }

    fn read_custom_templates(&self) -> StorageResult<Vec<Template>> {
        match self.storage.get(&self.settings.custom_templates_key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Stored list for a read-modify-write
    ///
    /// Unlike [`Self::load_custom_templates`] nothing is filtered, so entries
    /// with malformed colors survive an unrelated add or delete.
    fn read_custom_templates_for_update(&self) -> Recovered<Vec<Template>> {
        let recovered = Recovered::from_result(self.read_custom_templates(), Vec::new);
        if let Some(error) = recovered.error() {
            tracing::warn!("Failed to load custom templates, rewriting list: {}", error);
        }
        recovered
    }

    fn write_custom_templates(&mut self, templates: &[Template]) -> StorageResult<()> {
        let json = serde_json::to_string(templates)?;
        self.storage.set(&self.settings.custom_templates_key, &json)
    }

    /// Look up a template by id
    pub fn get_template(&self, id: &str) -> Option<Template> {
        self.list_templates().into_iter().find(|t| t.id == id)
    }

    /// True iff `id` is a built-in template
    pub fn is_builtin(&self, id: &str) -> bool {
        is_builtin(id)
    }

    /// Persisted selection, or the default template id
    pub fn get_selected_id(&self) -> String {
        self.load_selected_id().into_inner()
    }

    /// Persisted selection, reporting storage fallbacks
    pub fn load_selected_id(&self) -> Recovered<String> {
        let result = self
            .storage
            .get(&self.settings.selected_template_key)
            .map(|id| id.unwrap_or_else(|| DEFAULT_TEMPLATE_ID.to_string()));
        let recovered = Recovered::from_result(result, || DEFAULT_TEMPLATE_ID.to_string());
        if let Some(error) = recovered.error() {
            tracing::warn!("Failed to read selected template, using default: {}", error);
        }
        recovered
    }

    /// Persist the selection verbatim; existence is not checked
    pub fn set_selected_id(&mut self, id: &str) {
        let _ = self.set_selected_id_recovered(id);
    }

    /// Persist the selection, reporting a dropped write
    pub fn set_selected_id_recovered(&mut self, id: &str) -> Recovered<()> {
        let result = self.storage.set(&self.settings.selected_template_key, id);
        log_write_failure("selected template", &result);
        Recovered::from_result(result, || ())
    }

    /// Resolve the selection against the catalog
    ///
    /// Falls back to the first template (the default) when the selected id
    /// is not in the catalog.
    pub fn get_selected(&self) -> Template {
        let selected_id = self.get_selected_id();
        let mut templates = self.list_templates();
        match templates.iter().position(|t| t.id == selected_id) {
            Some(index) => templates.swap_remove(index),
            None => {
                tracing::debug!(
                    "Selected template {} not found, falling back to {}",
                    selected_id,
                    templates[0].id
                );
                templates.swap_remove(0)
            }
        }
    }

    /// Append a custom template and persist; no duplicate check
    pub fn add_template(&mut self, template: Template) {
        let _ = self.add_template_recovered(template);
    }

    /// Append a custom template, reporting a dropped write
    pub fn add_template_recovered(&mut self, template: Template) -> Recovered<()> {
        let mut custom = self.read_custom_templates_for_update().into_inner();
        tracing::info!("Adding custom template {} ({})", template.id, template.name);
        custom.push(template);

        let result = self.write_custom_templates(&custom);
        log_write_failure("custom templates", &result);
        Recovered::from_result(result, || ())
    }

    /// Remove a custom template; built-ins are ignored
    ///
    /// Resets the selection to the default when the deleted id was selected.
    pub fn delete_template(&mut self, id: &str) {
        let _ = self.delete_template_recovered(id);
    }

    /// Remove a custom template, returning whether one was removed
    pub fn delete_template_recovered(&mut self, id: &str) -> Recovered<bool> {
        if is_builtin(id) {
            tracing::debug!("Refusing to delete built-in template {}", id);
            return Recovered::Fresh(false);
        }

        let (mut custom, mut outcome): (_, StorageResult<()>) =
            match self.read_custom_templates_for_update() {
                Recovered::Fresh(custom) => (custom, Ok(())),
                Recovered::Fallback { value, error } => (value, Err(error)),
            };
        let before = custom.len();
        custom.retain(|t| t.id != id);
        let removed = custom.len() != before;

        if removed {
            tracing::info!("Deleting custom template {}", id);
            outcome = self.write_custom_templates(&custom);
            log_write_failure("custom templates", &outcome);
        }

        if self.get_selected_id() == id {
            if let Recovered::Fallback { error, .. } =
                self.set_selected_id_recovered(DEFAULT_TEMPLATE_ID)
            {
                if outcome.is_ok() {
                    outcome = Err(error);
                }
            }
        }

        Recovered::from_result(outcome.map(|()| removed), || false)
    }

    /// Extract a template from an uploaded package and add it
    ///
    /// The catalog is untouched when extraction fails.
    pub fn import_package(&mut self, bytes: &[u8], file_name: &str) -> ExtractResult<Template> {
        let extractor = ThemeExtractor::with_fallback_typeface(&self.settings.fallback_typeface);
        let template = extractor.extract_from_bytes(bytes, file_name)?;
        self.add_template(template.clone());
        Ok(template)
    }
}

fn log_write_failure(what: &str, result: &Result<(), StorageError>) {
    if let Err(e) = result {
        tracing::warn!("Failed to persist {}: {}", what, e);
    }
}
