//! Staged material definitions
//!
//! Materials are fixed-capacity stacks of render stages, processed front to
//! back; the first inactive stage terminates iteration. This module defines the
//! material data model and the bounded stage operations the rest of the
//! renderer builds on. GPU pipeline state derived from these descriptors lives
//! behind the backend boundary, not here.

use crate::foundation::collections::TypedHandle;
use crate::render::texture::TextureHandle;

/// Maximum number of stages per material
pub const MAX_STAGES: usize = 8;

/// Maximum number of animation frames per texture bundle
pub const MAX_IMAGE_ANIMATIONS: usize = 8;

/// Number of texture bundles per stage
pub const MAX_TEXTURE_BUNDLES: usize = 2;

/// Bundle index carrying the diffuse map and its animation frames
pub const DIFFUSE_BUNDLE: usize = 0;

/// Handle identifying a registered material
pub type MaterialHandle = TypedHandle<Material>;

/// Blend factor constants for stage blending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    /// Factor of zero
    Zero,
    /// Factor of one
    One,
    /// Source color
    SrcColor,
    /// One minus source color
    OneMinusSrcColor,
    /// Source alpha
    SrcAlpha,
    /// One minus source alpha
    OneMinusSrcAlpha,
    /// Destination alpha
    DstAlpha,
    /// One minus destination alpha
    OneMinusDstAlpha,
}

/// Per-stage RGB generation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorGen {
    /// Constant white
    Identity,
    /// Vertex colors
    Vertex,
    /// Entity-supplied color
    Entity,
}

/// Per-stage alpha generation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaGen {
    /// Constant opaque alpha
    Identity,
    /// Vertex alpha
    Vertex,
    /// Entity-supplied alpha
    Entity,
    /// View-angle dependent water transparency
    Water,
}

/// Texture coordinate generation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TexCoordGen {
    /// Coordinates from the base texture channel
    Texture,
    /// Coordinates from the lightmap channel
    Lightmap,
    /// Environment-mapped coordinates
    Environment,
    /// Coordinates derived from fragment screen position
    Fragment,
}

/// Triangle culling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullType {
    /// Cull back faces (default)
    FrontSided,
    /// Cull front faces
    BackSided,
    /// No culling
    TwoSided,
}

/// Which side of a reflective surface a material renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectiveSide {
    /// Not part of a reflective surface
    None,
    /// The mirrored side seen from above the surface plane
    FrontSide,
    /// The see-through side seen from below the surface plane
    BackSide,
}

/// Texture bundle: an animated set of textures plus coordinate generation
#[derive(Debug, Clone)]
pub struct TextureBundle {
    /// Animation frames, in playback order; the first `None` ends the set
    pub textures: [Option<TextureHandle>; MAX_IMAGE_ANIMATIONS],
    /// Texture coordinate generation for this bundle
    pub tc_gen: TexCoordGen,
}

impl Default for TextureBundle {
    fn default() -> Self {
        Self {
            textures: [None; MAX_IMAGE_ANIMATIONS],
            tc_gen: TexCoordGen::Texture,
        }
    }
}

impl TextureBundle {
    /// Animation frames in order, stopping at the first empty slot
    pub fn frames(&self) -> impl Iterator<Item = TextureHandle> + '_ {
        self.textures.iter().map_while(|t| *t)
    }
}

/// A single render stage within a material
#[derive(Debug, Clone)]
pub struct MaterialStage {
    /// Whether this stage participates in rendering
    pub active: bool,
    /// Texture bundles bound by this stage
    pub bundles: [TextureBundle; MAX_TEXTURE_BUNDLES],
    /// Source blend factor
    pub blend_src: BlendFactor,
    /// Destination blend factor
    pub blend_dst: BlendFactor,
    /// RGB generation mode
    pub rgb_gen: ColorGen,
    /// Alpha generation mode
    pub alpha_gen: AlphaGen,
    /// Self-illumination strength; 0 means the stage is lit normally
    pub emissive_light: f32,
}

impl Default for MaterialStage {
    fn default() -> Self {
        Self {
            active: false,
            bundles: Default::default(),
            blend_src: BlendFactor::One,
            blend_dst: BlendFactor::Zero,
            rgb_gen: ColorGen::Identity,
            alpha_gen: AlphaGen::Identity,
            emissive_light: 0.0,
        }
    }
}

/// Material resource: a named, ordered stack of render stages
#[derive(Debug, Clone)]
pub struct Material {
    /// Material name as authored in content
    pub name: String,
    /// Stage stack, processed front to back until the first inactive stage
    pub stages: [MaterialStage; MAX_STAGES],
    /// Triangle culling mode
    pub cull_type: CullType,
    /// Reflective-surface role of this material
    pub reflective: ReflectiveSide,
    /// Derived front-side variant, when this material is a reflective back side
    pub reflective_front_side: Option<MaterialHandle>,
}

impl Material {
    /// Create a new material with the given name and no active stages
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stages: Default::default(),
            cull_type: CullType::FrontSided,
            reflective: ReflectiveSide::None,
            reflective_front_side: None,
        }
    }

    /// Active stages in draw order, terminated by the first inactive stage
    pub fn active_stages(&self) -> impl Iterator<Item = &MaterialStage> {
        self.stages.iter().take_while(|stage| stage.active)
    }

    /// Mutable view of the active stages, same termination rule
    pub fn active_stages_mut(&mut self) -> impl Iterator<Item = &mut MaterialStage> {
        self.stages.iter_mut().take_while(|stage| stage.active)
    }

    /// Number of active stages
    pub fn stage_count(&self) -> usize {
        self.active_stages().count()
    }

    /// Insert a stage at index 0, shifting existing stages toward the tail.
    ///
    /// Capacity is fixed: a stage shifted past index `MAX_STAGES - 1` is
    /// dropped. Only stages with an active predecessor are copied, so the
    /// active prefix shifts as a block and trailing inactive slots are left
    /// untouched.
    pub fn insert_stage_front(&mut self, stage: MaterialStage) {
        for i in (1..MAX_STAGES).rev() {
            if self.stages[i - 1].active {
                self.stages[i] = self.stages[i - 1].clone();
            }
        }
        self.stages[0] = stage;
    }
}
