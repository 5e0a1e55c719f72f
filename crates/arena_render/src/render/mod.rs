//! Rendering data model: materials, textures, dynamic lights, and the
//! content-specific effects built on top of them

pub mod effects;
pub mod lighting;
pub mod material;
pub mod texture;

pub use effects::{explosion_fade, ContentEffects, ContentLightKind};
pub use lighting::{DynamicLight, DynamicLightList, DynamicLightShape};
pub use material::{
    AlphaGen, BlendFactor, ColorGen, CullType, Material, MaterialHandle, MaterialStage,
    ReflectiveSide, TexCoordGen, TextureBundle,
};
pub use texture::{Texture, TextureCache, TextureHandle, TextureKind};
