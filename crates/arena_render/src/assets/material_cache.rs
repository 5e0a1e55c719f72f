//! Material registration and lookup
//!
//! The cache owns every material for the current content session. Creation
//! goes through [`MaterialCache::create_material`], which runs the
//! content-effects hook on the new material and on any material the hook
//! derives from it (reflective variants), so callers never invoke the hook
//! directly.

use std::collections::HashMap;

use crate::config::RenderConfig;
use crate::foundation::collections::HandleMap;
use crate::render::effects::ContentEffects;
use crate::render::material::{Material, MaterialHandle};
use crate::render::texture::TextureCache;

/// Owning store of session materials, keyed by handle with name lookup
pub struct MaterialCache {
    materials: HandleMap<Material>,
    by_name: HashMap<String, MaterialHandle>,
}

impl Default for MaterialCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            materials: HandleMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a material and run creation processing on it.
    ///
    /// Derived materials produced by the hook (reflective front sides) are
    /// registered and processed the same way before this returns. Returns the
    /// handle of the material passed in, not of any derived variant.
    pub fn create_material(
        &mut self,
        material: Material,
        effects: &mut ContentEffects,
        textures: &TextureCache,
        config: &RenderConfig,
    ) -> MaterialHandle {
        let handle = self.insert(material);

        let mut pending = vec![handle];
        while let Some(next) = pending.pop() {
            if let Some(derived) =
                effects.on_material_create(next, self, textures, config.water_reflections)
            {
                pending.push(derived);
            }
        }

        handle
    }

    /// Insert a material without creation processing.
    ///
    /// Used by the effects hook to register derived materials; everything else
    /// goes through [`create_material`](Self::create_material).
    pub fn insert(&mut self, material: Material) -> MaterialHandle {
        let name_key = material.name.to_ascii_lowercase();
        let handle = MaterialHandle::new(self.materials.insert(material));
        self.by_name.entry(name_key).or_insert(handle);
        log::debug!(
            "Registered material {:?} ({} total)",
            self.get(handle).map(|m| m.name.as_str()),
            self.materials.len()
        );
        handle
    }

    /// Get a material by handle
    pub fn get(&self, handle: MaterialHandle) -> Option<&Material> {
        self.materials.get(handle.key())
    }

    /// Get a mutable material by handle
    pub fn get_mut(&mut self, handle: MaterialHandle) -> Option<&mut Material> {
        self.materials.get_mut(handle.key())
    }

    /// Find the first material registered under a name, case-insensitively
    pub fn find(&self, name: &str) -> Option<MaterialHandle> {
        self.by_name.get(&name.to_ascii_lowercase()).copied()
    }

    /// Look up a material that callers require to exist
    pub fn require(&self, name: &str) -> Result<MaterialHandle, crate::assets::AssetError> {
        self.find(name)
            .ok_or_else(|| crate::assets::AssetError::NotFound(name.to_string()))
    }

    /// Number of registered materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the cache holds no materials
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
