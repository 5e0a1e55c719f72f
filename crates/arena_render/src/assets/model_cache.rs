//! Model registration and lookup

use std::collections::HashMap;

use crate::foundation::collections::{HandleMap, TypedHandle};
use crate::render::effects::ContentEffects;

/// Handle identifying a registered model
pub type ModelHandle = TypedHandle<Model>;

/// Model resource as the effects systems see it: a name and an identity.
/// Mesh data lives behind the backend boundary.
#[derive(Debug, Clone)]
pub struct Model {
    /// Model name as referenced by content
    pub name: String,
}

impl Model {
    /// Create a model record with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Owning store of session models, keyed by handle with name lookup
pub struct ModelCache {
    models: HandleMap<Model>,
    by_name: HashMap<String, ModelHandle>,
}

impl Default for ModelCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            models: HandleMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a model and run creation processing on it
    pub fn create_model(&mut self, model: Model, effects: &mut ContentEffects) -> ModelHandle {
        let name_key = model.name.to_ascii_lowercase();
        let handle = ModelHandle::new(self.models.insert(model));
        self.by_name.entry(name_key).or_insert(handle);
        log::debug!(
            "Registered model {:?} ({} total)",
            self.get(handle).map(|m| m.name.as_str()),
            self.models.len()
        );
        effects.on_model_create(handle, self);
        handle
    }

    /// Get a model by handle
    pub fn get(&self, handle: ModelHandle) -> Option<&Model> {
        self.models.get(handle.key())
    }

    /// Find the first model registered under a name, case-insensitively
    pub fn find(&self, name: &str) -> Option<ModelHandle> {
        self.by_name.get(&name.to_ascii_lowercase()).copied()
    }

    /// Look up a model that callers require to exist
    pub fn require(&self, name: &str) -> Result<ModelHandle, crate::assets::AssetError> {
        self.find(name)
            .ok_or_else(|| crate::assets::AssetError::NotFound(name.to_string()))
    }

    /// Number of registered models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the cache holds no models
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
