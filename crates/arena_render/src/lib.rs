//! # Arena Render
//!
//! Rendering support crate for id Tech 3 style ("arena") content.
//!
//! The crate's centerpiece is [`render::effects`]: hard-coded, content-specific
//! visual effects that the generic material/entity/lighting pipeline cannot
//! express declaratively. Known projectile, explosion, and water assets are
//! recognized by name when they are created and by identity afterwards; each
//! frame, matching entities contribute synthesized dynamic lights, and water
//! materials gain a mirrored reflective variant at load time.
//!
//! The collaborating systems (material and model caches, texture cache, dynamic
//! light accumulation, scene submission, frame timing, configuration) are
//! defined here at their interface boundary.
//!
//! ## Quick Start
//!
//! ```
//! use arena_render::prelude::*;
//!
//! let mut effects = ContentEffects::new();
//! let mut materials = MaterialCache::new();
//! let textures = TextureCache::new();
//! let config = RenderConfig::default();
//!
//! // Asset load phase: creation hooks populate the effects registry.
//! let bfg = materials.create_material(
//!     Material::new("bfgExplosion"),
//!     &mut effects,
//!     &textures,
//!     &config,
//! );
//!
//! // Frame phase: submitted entities may contribute dynamic lights.
//! let clock = FrameClock::new();
//! let mut frame = SceneFrame::new();
//! let mut entity = RefEntity::new(RenderType::Sprite, Vec3::new(10.0, 0.0, 4.0));
//! entity.material = Some(bfg);
//! frame.add_entity(entity, true, &effects, &config, &clock);
//! assert_eq!(frame.lights().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for crate users
pub mod prelude {
    pub use crate::assets::{MaterialCache, Model, ModelCache, ModelHandle};
    pub use crate::config::{Config, RenderConfig};
    pub use crate::foundation::{
        math::{Vec3, Vec4},
        time::FrameClock,
    };
    pub use crate::render::{
        ContentEffects, ContentLightKind, DynamicLight, DynamicLightList, DynamicLightShape,
        Material, MaterialHandle, Texture, TextureCache, TextureHandle,
    };
    pub use crate::scene::{RefEntity, RenderType, SceneFrame};
}
