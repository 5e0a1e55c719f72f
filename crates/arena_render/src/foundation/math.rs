//! Math utilities and types
//!
//! Provides the vector types used throughout the renderer plus the color-space
//! and periodic-function helpers the content effects depend on.

use std::sync::OnceLock;

pub use nalgebra::{Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// Convert a single sRGB-encoded channel to linear light.
fn srgb_channel_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert an sRGB-encoded color to linear light, per channel.
///
/// Light colors are authored in gamma space; the lighting accumulator works in
/// linear space, so every color crossing that boundary goes through here.
pub fn srgb_to_linear(color: Vec3) -> Vec3 {
    Vec3::new(
        srgb_channel_to_linear(color.x),
        srgb_channel_to_linear(color.y),
        srgb_channel_to_linear(color.z),
    )
}

/// Decode an RGBA byte color to normalized floats.
pub fn color_from_bytes(rgba: [u8; 4]) -> Vec4 {
    Vec4::new(
        f32::from(rgba[0]) / 255.0,
        f32::from(rgba[1]) / 255.0,
        f32::from(rgba[2]) / 255.0,
        f32::from(rgba[3]) / 255.0,
    )
}

/// Number of entries in the quantized function tables.
pub const FUNC_TABLE_SIZE: usize = 1024;

/// Index mask for wrapping table lookups.
pub const FUNC_TABLE_MASK: usize = FUNC_TABLE_SIZE - 1;

fn sin_table() -> &'static [f32; FUNC_TABLE_SIZE] {
    static TABLE: OnceLock<[f32; FUNC_TABLE_SIZE]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0.0_f32; FUNC_TABLE_SIZE];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = (i as f32 / FUNC_TABLE_SIZE as f32 * std::f32::consts::TAU).sin();
        }
        table
    })
}

/// Quantized sine: one full cycle per unit of `t`, truncate-and-mask indexing.
///
/// Periodic shader and light waveforms use this table rather than calling
/// `sin` directly, so repeated evaluation stays cheap and bit-stable.
pub fn table_sin(t: f32) -> f32 {
    #[allow(clippy::cast_possible_truncation)]
    let index = (t * FUNC_TABLE_SIZE as f32) as i64;
    sin_table()[(index as usize) & FUNC_TABLE_MASK]
}

/// Math utility functions
pub mod utils {
    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}
