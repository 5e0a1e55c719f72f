//! Foundation utilities shared across the renderer

pub mod collections;
pub mod logging;
pub mod math;
pub mod time;
