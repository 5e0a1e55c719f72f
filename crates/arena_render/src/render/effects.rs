//! Hard-coded content effects
//!
//! The generic material and lighting systems cannot express everything the
//! stock arena content expects: projectiles and explosions that throw colored
//! dynamic light, self-illuminated effect textures, and water surfaces that
//! render a mirrored reflection. This module recognizes those specific assets
//! by name at load time and by handle identity afterwards, and synthesizes the
//! extra state the generic systems need.
//!
//! Asset-creation hooks ([`ContentEffects::on_material_create`],
//! [`ContentEffects::on_model_create`]) run once per asset during load and
//! populate the identity registry. [`ContentEffects::on_entity_added`] runs
//! once per submitted entity per frame and only reads the registry.

use crate::assets::material_cache::MaterialCache;
use crate::assets::model_cache::{ModelCache, ModelHandle};
use crate::foundation::collections::TypedHandle;
use crate::foundation::math::{color_from_bytes, srgb_to_linear, table_sin, Vec3};
use crate::render::lighting::{DynamicLight, DynamicLightList};
use crate::render::material::{
    AlphaGen, BlendFactor, ColorGen, CullType, MaterialHandle, MaterialStage, ReflectiveSide,
    TexCoordGen, DIFFUSE_BUNDLE, MAX_IMAGE_ANIMATIONS, MAX_STAGES,
};
use crate::render::texture::{TextureCache, REFLECTION_TEXTURE_NAME};
use crate::scene::{RefEntity, RenderType};

/// Material name of the BFG explosion sprite
pub const BFG_EXPLOSION_MATERIAL_NAME: &str = "bfgExplosion";

/// Material name of the plasma projectile sprite
pub const PLASMA_BALL_MATERIAL_NAME: &str = "sprites/plasma1";

/// Material name of the plasma explosion effect
pub const PLASMA_EXPLOSION_MATERIAL_NAME: &str = "plasmaExplosion";

/// Model name of the BFG projectile
pub const BFG_MISSILE_MODEL_NAME: &str = "models/weaphits/bfg.md3";

/// Texture treated as self-illuminated wherever it appears in a material
const EMISSIVE_TEXTURE_NAME: &str = "textures/sfx/fireswirl2blue.tga";

/// Emissive strength applied to tagged stages
const EMISSIVE_LIGHT: f32 = 2.0;

/// Name suffix of synthesized reflective front-side materials
pub const REFLECTION_SUFFIX: &str = "/reflection";

/// Water materials eligible for reflective-surface synthesis
const REFLECTIVE_MATERIAL_NAMES: [&str; 3] = [
    "textures/liquids/clear_ripple1",
    "textures/liquids/calm_poollight",
    "textures/liquids/clear_calm1",
];

fn bfg_color() -> Vec3 {
    srgb_to_linear(Vec3::new(0.08, 1.0, 0.4))
}

fn lightning_color() -> Vec3 {
    srgb_to_linear(Vec3::new(0.6, 0.6, 1.0))
}

fn plasma_color() -> Vec3 {
    srgb_to_linear(Vec3::new(0.6, 0.6, 1.0))
}

/// Intensity of an explosion flash at `now`, for an effect that started at
/// `shader_time` and nominally lasts `duration_ms`.
///
/// Full intensity for the first half of the duration, then a linear fade
/// reaching zero at the full duration. The curve keeps falling past the end,
/// going negative; callers discard nonpositive contributions rather than this
/// function clamping. Both halves of that contract are load-bearing.
pub fn explosion_fade(now: f32, shader_time: f32, duration_ms: f32) -> f32 {
    let t = (now - shader_time) / (duration_ms / 1000.0);

    if t < 0.5 {
        return 1.0;
    }

    1.0 - (t - 0.5) * 2.0
}

/// The content light recipes an entity can match, in priority order.
///
/// Render type and asset identity are mutually exclusive across the catalog,
/// so an entity matches at most one kind; classification still evaluates the
/// rules strictly in this order, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLightKind {
    /// BFG projectile model in flight
    BfgProjectile,
    /// BFG explosion sprite
    BfgExplosion,
    /// Lightning gun bolt
    LightningBolt,
    /// Plasma projectile sprite
    PlasmaBall,
    /// Plasma impact explosion
    PlasmaExplosion,
    /// Railgun core beam
    RailCore,
}

fn identity_matches<T>(entity: Option<TypedHandle<T>>, cached: Option<TypedHandle<T>>) -> bool {
    matches!((entity, cached), (Some(a), Some(b)) if a == b)
}

/// Content-effects context: the identity registry plus the derivation logic.
///
/// One instance lives for one loaded content session. [`reset`] marks the
/// session boundary; each registry field is then written at most once, the
/// first time a matching named asset is created. Entity classification never
/// mutates the registry.
///
/// [`reset`]: ContentEffects::reset
#[derive(Debug, Default)]
pub struct ContentEffects {
    bfg_explosion_material: Option<MaterialHandle>,
    bfg_missile_model: Option<ModelHandle>,
    plasma_ball_material: Option<MaterialHandle>,
    plasma_explosion_material: Option<MaterialHandle>,
}

impl ContentEffects {
    /// Create an effects context with an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every registry field, starting a new content session
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Registered BFG explosion material, if it has been created this session
    pub fn bfg_explosion_material(&self) -> Option<MaterialHandle> {
        self.bfg_explosion_material
    }

    /// Registered BFG missile model, if it has been created this session
    pub fn bfg_missile_model(&self) -> Option<ModelHandle> {
        self.bfg_missile_model
    }

    /// Registered plasma ball material, if it has been created this session
    pub fn plasma_ball_material(&self) -> Option<MaterialHandle> {
        self.plasma_ball_material
    }

    /// Registered plasma explosion material, if it has been created this session
    pub fn plasma_explosion_material(&self) -> Option<MaterialHandle> {
        self.plasma_explosion_material
    }

    /// Match an entity against the content catalog.
    ///
    /// A registry field that was never bound this session fails its comparison,
    /// so the corresponding rule simply never fires. That is the intended
    /// degradation for sessions whose content does not include the asset.
    pub fn classify(&self, entity: &RefEntity) -> Option<ContentLightKind> {
        match entity.render_type {
            RenderType::Model if identity_matches(entity.model, self.bfg_missile_model) => {
                Some(ContentLightKind::BfgProjectile)
            }
            RenderType::Sprite
                if identity_matches(entity.material, self.bfg_explosion_material) =>
            {
                Some(ContentLightKind::BfgExplosion)
            }
            RenderType::Lightning => Some(ContentLightKind::LightningBolt),
            RenderType::Sprite if identity_matches(entity.material, self.plasma_ball_material) => {
                Some(ContentLightKind::PlasmaBall)
            }
            RenderType::Model
                if identity_matches(entity.material, self.plasma_explosion_material) =>
            {
                Some(ContentLightKind::PlasmaExplosion)
            }
            RenderType::RailCore => Some(ContentLightKind::RailCore),
            _ => None,
        }
    }

    /// Derive the dynamic light for an entity at the given frame time.
    ///
    /// Returns the raw descriptor; explosion fades past their duration produce
    /// nonpositive radii here, which [`on_entity_added`] filters out.
    ///
    /// [`on_entity_added`]: ContentEffects::on_entity_added
    pub fn light_for_entity(&self, entity: &RefEntity, time: f32) -> Option<DynamicLight> {
        let kind = self.classify(entity)?;

        let light = match kind {
            ContentLightKind::BfgProjectile => {
                // Same radius as the rocket projectile.
                DynamicLight::point(entity.origin, bfg_color(), 200.0)
            }
            ContentLightKind::BfgExplosion => {
                // Same radius and duration as the rocket explosion.
                DynamicLight::point(
                    entity.origin,
                    bfg_color(),
                    300.0 * explosion_fade(time, entity.shader_time, 1000.0),
                )
            }
            ContentLightKind::LightningBolt => {
                let base = 1.0;
                let amplitude = 0.1;
                let phase = 0.0;
                let freq = 10.1;
                let flicker = base + table_sin(phase + time * freq) * amplitude;
                DynamicLight::capsule(
                    entity.origin,
                    entity.old_origin,
                    lightning_color(),
                    200.0 * flicker,
                )
            }
            ContentLightKind::PlasmaBall => {
                DynamicLight::point(entity.origin, plasma_color(), 150.0)
            }
            ContentLightKind::PlasmaExplosion => {
                // Impact effect duration is 600ms.
                DynamicLight::point(
                    entity.origin,
                    plasma_color(),
                    200.0 * explosion_fade(time, entity.shader_time, 600.0),
                )
            }
            ContentLightKind::RailCore => {
                let color = srgb_to_linear(color_from_bytes(entity.color).xyz());
                DynamicLight::capsule(entity.origin, entity.old_origin, color, 200.0)
            }
        };

        Some(light)
    }

    /// Per-entity scene submission hook.
    ///
    /// Content lights apply only to the primary world scene, not to secondary
    /// passes such as mirrors or portals. At most one light is forwarded per
    /// call, and only when its radius is strictly positive.
    pub fn on_entity_added(
        &self,
        entity: &RefEntity,
        is_world_scene: bool,
        time: f32,
        lights: &mut DynamicLightList,
    ) {
        if !is_world_scene {
            return;
        }

        let Some(light) = self.light_for_entity(entity, time) else {
            return;
        };

        if light.radius > 0.0 {
            lights.add(light);
        }
    }

    /// Material-creation hook, run once per material immediately after it is
    /// registered and before first use.
    ///
    /// Binds catalog names into the registry (first writer wins), tags the
    /// first stage referencing the emissive effect texture, and, when
    /// `water_reflections` is set, synthesizes the reflective front-side
    /// variant of catalog water materials. Returns the handle of a derived
    /// material that itself still needs creation processing, if one was built.
    pub fn on_material_create(
        &mut self,
        handle: MaterialHandle,
        materials: &mut MaterialCache,
        textures: &TextureCache,
        water_reflections: bool,
    ) -> Option<MaterialHandle> {
        let Some(material) = materials.get(handle) else {
            return None;
        };
        let name = material.name.clone();

        if name.eq_ignore_ascii_case(BFG_EXPLOSION_MATERIAL_NAME) {
            Self::bind(&mut self.bfg_explosion_material, handle, &name);
        } else if name.eq_ignore_ascii_case(PLASMA_BALL_MATERIAL_NAME) {
            Self::bind(&mut self.plasma_ball_material, handle, &name);
        } else if name.eq_ignore_ascii_case(PLASMA_EXPLOSION_MATERIAL_NAME) {
            Self::bind(&mut self.plasma_explosion_material, handle, &name);
        }

        Self::tag_emissive_stage(handle, materials, textures);

        if water_reflections && Self::is_reflective_name(&name) {
            return Self::synthesize_reflection(handle, materials, textures);
        }

        None
    }

    /// Model-creation hook, run once per model immediately after registration
    pub fn on_model_create(&mut self, handle: ModelHandle, models: &ModelCache) {
        let Some(model) = models.get(handle) else {
            return;
        };

        if model.name.eq_ignore_ascii_case(BFG_MISSILE_MODEL_NAME)
            && self.bfg_missile_model.is_none()
        {
            log::debug!("Recognized content model '{}'", model.name);
            self.bfg_missile_model = Some(handle);
        }
    }

    fn bind(slot: &mut Option<MaterialHandle>, handle: MaterialHandle, name: &str) {
        if slot.is_none() {
            log::debug!("Recognized content material '{name}'");
            *slot = Some(handle);
        }
    }

    fn is_reflective_name(name: &str) -> bool {
        REFLECTIVE_MATERIAL_NAMES
            .iter()
            .any(|catalog_name| catalog_name.eq_ignore_ascii_case(name))
    }

    /// Mark the first stage whose diffuse animation references the emissive
    /// effect texture as self-illuminated. The stage scan stops at the first
    /// inactive stage, the frame scan at the first empty slot.
    fn tag_emissive_stage(
        handle: MaterialHandle,
        materials: &mut MaterialCache,
        textures: &TextureCache,
    ) {
        let Some(material) = materials.get_mut(handle) else {
            return;
        };

        'stages: for stage_index in 0..MAX_STAGES {
            let stage = &mut material.stages[stage_index];
            if !stage.active {
                break;
            }

            for frame_index in 0..MAX_IMAGE_ANIMATIONS {
                let Some(texture) = stage.bundles[DIFFUSE_BUNDLE].textures[frame_index] else {
                    break;
                };

                let matches_sentinel = textures
                    .name_of(texture)
                    .is_some_and(|texture_name| {
                        texture_name.eq_ignore_ascii_case(EMISSIVE_TEXTURE_NAME)
                    });
                if matches_sentinel {
                    stage.emissive_light = EMISSIVE_LIGHT;
                    break 'stages;
                }
            }
        }
    }

    /// Split a water material into reflective back and front sides.
    ///
    /// The existing material becomes the back side, what you see when under
    /// the water plane. A renamed copy becomes the front side that displays
    /// the reflection, with a reflection-buffer stage inserted at index 0.
    fn synthesize_reflection(
        handle: MaterialHandle,
        materials: &mut MaterialCache,
        textures: &TextureCache,
    ) -> Option<MaterialHandle> {
        let reflection = {
            let material = materials.get_mut(handle)?;
            material.cull_type = CullType::BackSided;
            material.reflective = ReflectiveSide::BackSide;

            let mut reflection = material.clone();
            reflection.name = format!("{}{}", material.name, REFLECTION_SUFFIX);
            reflection.cull_type = CullType::FrontSided;
            reflection.reflective = ReflectiveSide::FrontSide;
            reflection.reflective_front_side = None;

            let mut stage = MaterialStage {
                active: true,
                blend_src: BlendFactor::SrcAlpha,
                blend_dst: BlendFactor::OneMinusSrcAlpha,
                rgb_gen: ColorGen::Identity,
                alpha_gen: AlphaGen::Water,
                ..MaterialStage::default()
            };
            stage.bundles[DIFFUSE_BUNDLE].textures[0] = textures.find(REFLECTION_TEXTURE_NAME);
            stage.bundles[DIFFUSE_BUNDLE].tc_gen = TexCoordGen::Fragment;
            reflection.insert_stage_front(stage);
            reflection
        };

        log::debug!("Synthesized reflective variant '{}'", reflection.name);
        let derived = materials.insert(reflection);
        if let Some(material) = materials.get_mut(handle) {
            material.reflective_front_side = Some(derived);
        }

        Some(derived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::render::material::Material;
    use crate::render::texture::Texture;
    use crate::assets::model_cache::Model;
    use crate::render::lighting::DynamicLightShape;

    const EPSILON: f32 = 0.001;

    struct Fixture {
        effects: ContentEffects,
        materials: MaterialCache,
        models: ModelCache,
        textures: TextureCache,
        config: RenderConfig,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                effects: ContentEffects::new(),
                materials: MaterialCache::new(),
                models: ModelCache::new(),
                textures: TextureCache::new(),
                config: RenderConfig::default(),
            }
        }

        fn create_material(&mut self, material: Material) -> MaterialHandle {
            self.materials.create_material(
                material,
                &mut self.effects,
                &self.textures,
                &self.config,
            )
        }

        fn create_model(&mut self, name: &str) -> ModelHandle {
            self.models.create_model(Model::new(name), &mut self.effects)
        }
    }

    fn origin() -> Vec3 {
        Vec3::new(16.0, -32.0, 64.0)
    }

    fn endpoint() -> Vec3 {
        Vec3::new(16.0, -32.0, 128.0)
    }

    // --- fade curve ---

    #[test]
    fn test_fade_full_intensity_first_half() {
        for t in [0.0_f32, 0.1, 0.25, 0.49] {
            assert!((explosion_fade(t, 0.0, 1000.0) - 1.0).abs() < EPSILON);
        }
        // Exactly at the midpoint the fade term is zero.
        assert!((explosion_fade(0.5, 0.0, 1000.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_fade_linear_second_half() {
        assert!((explosion_fade(0.75, 0.0, 1000.0) - 0.5).abs() < EPSILON);
        assert!(explosion_fade(1.0, 0.0, 1000.0).abs() < EPSILON);
    }

    #[test]
    fn test_fade_goes_negative_past_duration() {
        assert!(explosion_fade(1.25, 0.0, 1000.0) < 0.0);
        assert!((explosion_fade(1.25, 0.0, 1000.0) + 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_fade_respects_duration_scaling() {
        // 600ms duration: 0.45s elapsed is t = 0.75.
        assert!((explosion_fade(0.45, 0.0, 600.0) - 0.5).abs() < EPSILON);
    }

    // --- classification and synthesis ---

    #[test]
    fn test_unmatched_entity_produces_no_light() {
        let fixture = Fixture::new();
        let mut lights = DynamicLightList::new();

        let poly = RefEntity::new(RenderType::Poly, origin());
        fixture.effects.on_entity_added(&poly, true, 0.0, &mut lights);
        assert!(lights.is_empty());
        assert!(fixture.effects.classify(&poly).is_none());
    }

    #[test]
    fn test_unbound_registry_never_matches() {
        // Neither the entity nor the registry carries an identity; the rules
        // must not treat empty-equals-empty as a match.
        let fixture = Fixture::new();

        let sprite = RefEntity::new(RenderType::Sprite, origin());
        assert!(fixture.effects.classify(&sprite).is_none());

        let model = RefEntity::new(RenderType::Model, origin());
        assert!(fixture.effects.classify(&model).is_none());
    }

    #[test]
    fn test_bfg_projectile_light() {
        let mut fixture = Fixture::new();
        let missile = fixture.create_model(BFG_MISSILE_MODEL_NAME);

        let mut entity = RefEntity::new(RenderType::Model, origin());
        entity.model = Some(missile);

        let light = fixture.effects.light_for_entity(&entity, 12.0).unwrap();
        assert_eq!(light.shape, DynamicLightShape::Point);
        assert_eq!(light.position, origin());
        assert_eq!(light.color, srgb_to_linear(Vec3::new(0.08, 1.0, 0.4)));
        assert!((light.radius - 200.0).abs() < EPSILON);
    }

    #[test]
    fn test_bfg_explosion_light_fades() {
        let mut fixture = Fixture::new();
        let material = fixture.create_material(Material::new(BFG_EXPLOSION_MATERIAL_NAME));

        let mut entity = RefEntity::new(RenderType::Sprite, origin());
        entity.material = Some(material);
        entity.shader_time = 2.0;

        // Effect just started: full 300 radius.
        let fresh = fixture.effects.light_for_entity(&entity, 2.0).unwrap();
        assert!((fresh.radius - 300.0).abs() < EPSILON);
        assert_eq!(fresh.color, srgb_to_linear(Vec3::new(0.08, 1.0, 0.4)));

        // 750ms into a 1000ms effect: fade is 0.5.
        let fading = fixture.effects.light_for_entity(&entity, 2.75).unwrap();
        assert!((fading.radius - 150.0).abs() < EPSILON);
    }

    #[test]
    fn test_lightning_bolt_flickering_capsule() {
        let fixture = Fixture::new();

        let mut entity = RefEntity::new(RenderType::Lightning, origin());
        entity.old_origin = endpoint();

        for step in 0..100 {
            let time = step as f32 * 0.033;
            let light = fixture.effects.light_for_entity(&entity, time).unwrap();
            assert_eq!(light.shape, DynamicLightShape::Capsule { end: endpoint() });
            assert_eq!(light.color, srgb_to_linear(Vec3::new(0.6, 0.6, 1.0)));
            assert!(light.radius >= 180.0 - EPSILON);
            assert!(light.radius <= 220.0 + EPSILON);
        }
    }

    #[test]
    fn test_plasma_ball_light() {
        let mut fixture = Fixture::new();
        let material = fixture.create_material(Material::new(PLASMA_BALL_MATERIAL_NAME));

        let mut entity = RefEntity::new(RenderType::Sprite, origin());
        entity.material = Some(material);

        let light = fixture.effects.light_for_entity(&entity, 5.0).unwrap();
        assert_eq!(light.shape, DynamicLightShape::Point);
        assert_eq!(light.color, srgb_to_linear(Vec3::new(0.6, 0.6, 1.0)));
        assert!((light.radius - 150.0).abs() < EPSILON);
    }

    #[test]
    fn test_plasma_explosion_light_fades() {
        let mut fixture = Fixture::new();
        let material = fixture.create_material(Material::new(PLASMA_EXPLOSION_MATERIAL_NAME));

        let mut entity = RefEntity::new(RenderType::Model, origin());
        entity.material = Some(material);
        entity.shader_time = 0.0;

        // 450ms into a 600ms effect: fade is 0.5.
        let light = fixture.effects.light_for_entity(&entity, 0.45).unwrap();
        assert!((light.radius - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_rail_core_uses_entity_color() {
        let fixture = Fixture::new();

        let mut entity = RefEntity::new(RenderType::RailCore, origin());
        entity.old_origin = endpoint();
        entity.color = [255, 0, 0, 255];

        let light = fixture.effects.light_for_entity(&entity, 0.0).unwrap();
        assert_eq!(light.shape, DynamicLightShape::Capsule { end: endpoint() });
        assert_eq!(light.color, srgb_to_linear(Vec3::new(1.0, 0.0, 0.0)));
        assert!((light.radius - 200.0).abs() < EPSILON);
    }

    #[test]
    fn test_sprite_priority_prefers_bfg_explosion_rule() {
        let mut fixture = Fixture::new();
        let bfg = fixture.create_material(Material::new(BFG_EXPLOSION_MATERIAL_NAME));
        fixture.create_material(Material::new(PLASMA_BALL_MATERIAL_NAME));

        let mut entity = RefEntity::new(RenderType::Sprite, origin());
        entity.material = Some(bfg);
        assert_eq!(
            fixture.effects.classify(&entity),
            Some(ContentLightKind::BfgExplosion)
        );
    }

    #[test]
    fn test_expired_explosion_is_filtered() {
        let mut fixture = Fixture::new();
        let material = fixture.create_material(Material::new(BFG_EXPLOSION_MATERIAL_NAME));

        let mut entity = RefEntity::new(RenderType::Sprite, origin());
        entity.material = Some(material);
        entity.shader_time = 0.0;

        // Well past the 1000ms duration: the fade is negative and the
        // submission guard must drop the light.
        let mut lights = DynamicLightList::new();
        fixture.effects.on_entity_added(&entity, true, 3.0, &mut lights);
        assert!(lights.is_empty());

        // The raw descriptor really is negative, not absent.
        let raw = fixture.effects.light_for_entity(&entity, 3.0).unwrap();
        assert!(raw.radius < 0.0);
    }

    #[test]
    fn test_secondary_scene_gets_no_content_lights() {
        let fixture = Fixture::new();
        let mut lights = DynamicLightList::new();

        let entity = RefEntity::new(RenderType::Lightning, origin());
        fixture.effects.on_entity_added(&entity, false, 0.0, &mut lights);
        assert!(lights.is_empty());
    }

    // --- registry lifecycle ---

    #[test]
    fn test_registry_first_writer_wins() {
        let mut fixture = Fixture::new();
        let first = fixture.create_material(Material::new(BFG_EXPLOSION_MATERIAL_NAME));
        let second = fixture.create_material(Material::new("BFGEXPLOSION"));

        assert_ne!(first, second);
        assert_eq!(fixture.effects.bfg_explosion_material(), Some(first));
    }

    #[test]
    fn test_registry_binding_is_case_insensitive() {
        let mut fixture = Fixture::new();
        let ball = fixture.create_material(Material::new("SPRITES/PLASMA1"));
        assert_eq!(fixture.effects.plasma_ball_material(), Some(ball));
    }

    #[test]
    fn test_reset_clears_all_registry_fields() {
        let mut fixture = Fixture::new();
        fixture.create_material(Material::new(BFG_EXPLOSION_MATERIAL_NAME));
        fixture.create_material(Material::new(PLASMA_BALL_MATERIAL_NAME));
        fixture.create_material(Material::new(PLASMA_EXPLOSION_MATERIAL_NAME));
        fixture.create_model(BFG_MISSILE_MODEL_NAME);

        assert!(fixture.effects.bfg_explosion_material().is_some());
        assert!(fixture.effects.plasma_ball_material().is_some());
        assert!(fixture.effects.plasma_explosion_material().is_some());
        assert!(fixture.effects.bfg_missile_model().is_some());

        fixture.effects.reset();

        assert!(fixture.effects.bfg_explosion_material().is_none());
        assert!(fixture.effects.plasma_ball_material().is_none());
        assert!(fixture.effects.plasma_explosion_material().is_none());
        assert!(fixture.effects.bfg_missile_model().is_none());
    }

    // --- emissive tagging ---

    fn material_with_frame(texture: crate::render::texture::TextureHandle) -> Material {
        let mut material = Material::new("gfx/effect");
        material.stages[0].active = true;
        material.stages[0].bundles[DIFFUSE_BUNDLE].textures[0] = Some(texture);
        material
    }

    #[test]
    fn test_emissive_texture_tags_stage() {
        let mut fixture = Fixture::new();
        let swirl = fixture
            .textures
            .register(Texture::file("textures/sfx/FireSwirl2Blue.TGA"));

        let handle = fixture.create_material(material_with_frame(swirl));
        let material = fixture.materials.get(handle).unwrap();
        assert!((material.stages[0].emissive_light - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_only_first_qualifying_stage_is_tagged() {
        let mut fixture = Fixture::new();
        let swirl = fixture
            .textures
            .register(Texture::file("textures/sfx/fireswirl2blue.tga"));

        let mut material = material_with_frame(swirl);
        material.stages[1].active = true;
        material.stages[1].bundles[DIFFUSE_BUNDLE].textures[0] = Some(swirl);

        let handle = fixture.create_material(material);
        let material = fixture.materials.get(handle).unwrap();
        assert!((material.stages[0].emissive_light - 2.0).abs() < EPSILON);
        assert!(material.stages[1].emissive_light.abs() < EPSILON);
    }

    #[test]
    fn test_stage_scan_stops_at_first_inactive() {
        let mut fixture = Fixture::new();
        let swirl = fixture
            .textures
            .register(Texture::file("textures/sfx/fireswirl2blue.tga"));

        // Qualifying frame sits in a stage beyond an inactive gap.
        let mut material = Material::new("gfx/effect");
        material.stages[1].active = true;
        material.stages[1].bundles[DIFFUSE_BUNDLE].textures[0] = Some(swirl);

        let handle = fixture.create_material(material);
        let material = fixture.materials.get(handle).unwrap();
        assert!(material.stages[1].emissive_light.abs() < EPSILON);
    }

    #[test]
    fn test_other_textures_are_not_emissive() {
        let mut fixture = Fixture::new();
        let flame = fixture.textures.register(Texture::file("textures/sfx/flame1.tga"));

        let handle = fixture.create_material(material_with_frame(flame));
        let material = fixture.materials.get(handle).unwrap();
        assert!(material.stages[0].emissive_light.abs() < EPSILON);
    }

    // --- reflective synthesis ---

    fn water_material(name: &str, base: crate::render::texture::TextureHandle) -> Material {
        let mut material = Material::new(name);
        material.stages[0].active = true;
        material.stages[0].bundles[DIFFUSE_BUNDLE].textures[0] = Some(base);
        material.stages[0].rgb_gen = ColorGen::Vertex;
        material
    }

    #[test]
    fn test_reflective_synthesis_splits_sides() {
        let mut fixture = Fixture::new();
        let ripple = fixture
            .textures
            .register(Texture::file("textures/liquids/ripple_base"));
        let original = fixture
            .create_material(water_material("textures/liquids/clear_ripple1", ripple));

        assert_eq!(fixture.materials.len(), 2);

        let back = fixture.materials.get(original).unwrap();
        assert_eq!(back.cull_type, CullType::BackSided);
        assert_eq!(back.reflective, ReflectiveSide::BackSide);
        let front_handle = back.reflective_front_side.unwrap();

        let front = fixture.materials.get(front_handle).unwrap();
        assert_eq!(front.name, "textures/liquids/clear_ripple1/reflection");
        assert_eq!(front.cull_type, CullType::FrontSided);
        assert_eq!(front.reflective, ReflectiveSide::FrontSide);
        assert_eq!(
            fixture.materials.find("textures/liquids/clear_ripple1/reflection"),
            Some(front_handle)
        );
    }

    #[test]
    fn test_reflection_stage_layout() {
        let mut fixture = Fixture::new();
        let ripple = fixture
            .textures
            .register(Texture::file("textures/liquids/ripple_base"));
        let original = fixture
            .create_material(water_material("textures/liquids/calm_poollight", ripple));

        let front_handle = fixture
            .materials
            .get(original)
            .unwrap()
            .reflective_front_side
            .unwrap();
        let front = fixture.materials.get(front_handle).unwrap();

        // Stage 0 is the synthesized reflection stage.
        let reflection_stage = &front.stages[0];
        assert!(reflection_stage.active);
        assert_eq!(
            reflection_stage.bundles[DIFFUSE_BUNDLE].textures[0],
            fixture.textures.find(REFLECTION_TEXTURE_NAME)
        );
        assert_eq!(
            reflection_stage.bundles[DIFFUSE_BUNDLE].tc_gen,
            TexCoordGen::Fragment
        );
        assert_eq!(reflection_stage.blend_src, BlendFactor::SrcAlpha);
        assert_eq!(reflection_stage.blend_dst, BlendFactor::OneMinusSrcAlpha);
        assert_eq!(reflection_stage.rgb_gen, ColorGen::Identity);
        assert_eq!(reflection_stage.alpha_gen, AlphaGen::Water);

        // The original stage content shifted to index 1.
        let shifted = &front.stages[1];
        assert!(shifted.active);
        assert_eq!(shifted.rgb_gen, ColorGen::Vertex);
        assert_eq!(
            shifted.bundles[DIFFUSE_BUNDLE].textures[0],
            Some(ripple)
        );
        assert_eq!(front.stage_count(), 2);
    }

    #[test]
    fn test_reflective_synthesis_respects_toggle() {
        let mut fixture = Fixture::new();
        fixture.config.water_reflections = false;
        let ripple = fixture
            .textures
            .register(Texture::file("textures/liquids/ripple_base"));
        let original = fixture
            .create_material(water_material("textures/liquids/clear_calm1", ripple));

        assert_eq!(fixture.materials.len(), 1);
        let material = fixture.materials.get(original).unwrap();
        assert_eq!(material.cull_type, CullType::FrontSided);
        assert_eq!(material.reflective, ReflectiveSide::None);
        assert!(material.reflective_front_side.is_none());
    }

    #[test]
    fn test_non_catalog_water_name_is_not_synthesized() {
        let mut fixture = Fixture::new();
        let ripple = fixture
            .textures
            .register(Texture::file("textures/liquids/ripple_base"));
        fixture.create_material(water_material("textures/liquids/pool3", ripple));
        assert_eq!(fixture.materials.len(), 1);
    }
}
