//! Scene submission
//!
//! Game code submits entities once per frame; the frame stores them for the
//! draw passes and forwards each submission to the content-effects classifier,
//! which may contribute a dynamic light. Submissions from secondary passes
//! (mirrors, portals) are marked as non-world and never produce content
//! lights.

use crate::assets::model_cache::ModelHandle;
use crate::config::RenderConfig;
use crate::foundation::math::Vec3;
use crate::foundation::time::FrameClock;
use crate::render::effects::ContentEffects;
use crate::render::lighting::{DynamicLight, DynamicLightList};
use crate::render::material::MaterialHandle;

/// How an entity is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderType {
    /// Mesh model
    Model,
    /// Camera-facing billboard sprite
    Sprite,
    /// Capsule-shaped lightning bolt between two points
    Lightning,
    /// Railgun core beam between two points
    RailCore,
    /// Arbitrary polygon soup
    Poly,
}

/// A renderable entity as submitted by game code, one instance per frame.
///
/// `old_origin` is the secondary endpoint for beam-shaped render types;
/// `shader_time` is the effect start timestamp in clock seconds, used by
/// time-varying material and light evaluation.
#[derive(Debug, Clone)]
pub struct RefEntity {
    /// How this entity is drawn
    pub render_type: RenderType,
    /// World position
    pub origin: Vec3,
    /// Secondary origin for beam-shaped entities
    pub old_origin: Vec3,
    /// Model identity for model render types
    pub model: Option<ModelHandle>,
    /// Custom material identity, overriding the model's own
    pub material: Option<MaterialHandle>,
    /// Per-instance RGBA color
    pub color: [u8; 4],
    /// Effect start time in clock seconds
    pub shader_time: f32,
}

impl RefEntity {
    /// Create an entity of the given render type at a position, with neutral
    /// defaults for the remaining fields
    pub fn new(render_type: RenderType, origin: Vec3) -> Self {
        Self {
            render_type,
            origin,
            old_origin: origin,
            model: None,
            material: None,
            color: [255, 255, 255, 255],
            shader_time: 0.0,
        }
    }
}

/// Per-frame scene: submitted entities plus accumulated dynamic lights
#[derive(Debug, Default)]
pub struct SceneFrame {
    entities: Vec<RefEntity>,
    lights: DynamicLightList,
}

impl SceneFrame {
    /// Create an empty scene frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's entities and lights
    pub fn begin_frame(&mut self) {
        self.entities.clear();
        self.lights.clear();
    }

    /// Submit an entity for this frame.
    ///
    /// When dynamic lights are enabled, the content-effects classifier may
    /// add a light for this entity at the clock's current time; the entity
    /// itself is always stored for drawing.
    pub fn add_entity(
        &mut self,
        entity: RefEntity,
        is_world_scene: bool,
        effects: &ContentEffects,
        config: &RenderConfig,
        clock: &FrameClock,
    ) {
        if config.dynamic_lights {
            effects.on_entity_added(&entity, is_world_scene, clock.total_time(), &mut self.lights);
        }
        self.entities.push(entity);
    }

    /// Add an externally authored dynamic light for this frame
    pub fn add_light(&mut self, light: DynamicLight) {
        self.lights.add(light);
    }

    /// Entities submitted this frame, in submission order
    pub fn entities(&self) -> &[RefEntity] {
        &self.entities
    }

    /// Dynamic lights accumulated this frame
    pub fn lights(&self) -> &DynamicLightList {
        &self.lights
    }
}
