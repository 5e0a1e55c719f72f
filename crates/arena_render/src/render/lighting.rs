//! Dynamic lighting types
//!
//! Dynamic lights are transient per-frame contributions accumulated into a
//! [`DynamicLightList`] during scene submission and consumed by the shading
//! passes. Nothing here persists across frames.

use crate::foundation::math::Vec3;

/// Spatial shape of a dynamic light
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DynamicLightShape {
    /// Omnidirectional light at a single point
    Point,
    /// Light distributed along the segment from the position to `end`
    Capsule {
        /// Far endpoint of the capsule axis
        end: Vec3,
    },
}

/// A single dynamic light contribution
///
/// Color is in linear space. `radius` doubles as intensity: the contribution
/// falls off to zero at `radius` world units from the light's axis.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicLight {
    /// Light origin in world space
    pub position: Vec3,
    /// Point or capsule shape
    pub shape: DynamicLightShape,
    /// Linear-space color
    pub color: Vec3,
    /// Falloff radius in world units
    pub radius: f32,
}

impl DynamicLight {
    /// Create a point light
    pub fn point(position: Vec3, color: Vec3, radius: f32) -> Self {
        Self {
            position,
            shape: DynamicLightShape::Point,
            color,
            radius,
        }
    }

    /// Create a capsule light spanning `position` to `end`
    pub fn capsule(position: Vec3, end: Vec3, color: Vec3, radius: f32) -> Self {
        Self {
            position,
            shape: DynamicLightShape::Capsule { end },
            color,
            radius,
        }
    }
}

/// Per-frame dynamic light accumulator
///
/// Scene submission adds lights here; the shading system drains the list when
/// the frame is rendered. Ownership of each light transfers on `add`.
#[derive(Debug, Default)]
pub struct DynamicLightList {
    lights: Vec<DynamicLight>,
}

impl DynamicLightList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a light contribution for this frame
    pub fn add(&mut self, light: DynamicLight) {
        self.lights.push(light);
    }

    /// Drop all accumulated lights (start of a new frame)
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    /// Accumulated lights in submission order
    pub fn lights(&self) -> &[DynamicLight] {
        &self.lights
    }

    /// Number of accumulated lights
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Whether no lights have been accumulated
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }
}
