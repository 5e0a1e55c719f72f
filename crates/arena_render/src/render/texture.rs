//! Texture resources and the name-keyed texture cache
//!
//! The cache resolves textures by the names content refers to them with,
//! including reserved dynamic names (prefixed `*`) that are backed by render
//! targets instead of image files.

use std::collections::HashMap;

use crate::foundation::collections::{HandleMap, TypedHandle};

/// Reserved name of the current reflection buffer
pub const REFLECTION_TEXTURE_NAME: &str = "*reflection";

/// Handle identifying a registered texture
pub type TextureHandle = TypedHandle<Texture>;

/// How a texture's contents are sourced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    /// Loaded from an image file
    File,
    /// Backed by a render target updated every frame
    Dynamic,
}

/// Texture resource
#[derive(Debug, Clone)]
pub struct Texture {
    /// Name as referenced by content
    pub name: String,
    /// Content source of this texture
    pub kind: TextureKind,
}

impl Texture {
    /// Create a file-backed texture record
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TextureKind::File,
        }
    }

    /// Create a dynamic render-target-backed texture record
    pub fn dynamic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TextureKind::Dynamic,
        }
    }
}

/// Name-keyed texture cache
///
/// Lookups are case-insensitive; registration preserves the authored name.
pub struct TextureCache {
    textures: HandleMap<Texture>,
    by_name: HashMap<String, TextureHandle>,
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureCache {
    /// Create a new cache, pre-seeding the reserved dynamic textures
    pub fn new() -> Self {
        let mut cache = Self {
            textures: HandleMap::new(),
            by_name: HashMap::new(),
        };
        cache.register(Texture::dynamic(REFLECTION_TEXTURE_NAME));
        cache
    }

    /// Register a texture and return its handle.
    ///
    /// A texture already registered under the same name (case-insensitive)
    /// keeps its original handle.
    pub fn register(&mut self, texture: Texture) -> TextureHandle {
        let key = texture.name.to_ascii_lowercase();
        if let Some(&existing) = self.by_name.get(&key) {
            return existing;
        }
        let handle = TextureHandle::new(self.textures.insert(texture));
        self.by_name.insert(key, handle);
        log::debug!("Registered texture {:?}", self.name_of(handle));
        handle
    }

    /// Find a texture by name, case-insensitively
    pub fn find(&self, name: &str) -> Option<TextureHandle> {
        self.by_name.get(&name.to_ascii_lowercase()).copied()
    }

    /// Get a texture by handle
    pub fn get(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle.key())
    }

    /// Get the authored name of a texture by handle
    pub fn name_of(&self, handle: TextureHandle) -> Option<&str> {
        self.get(handle).map(|texture| texture.name.as_str())
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether the cache holds no textures
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
