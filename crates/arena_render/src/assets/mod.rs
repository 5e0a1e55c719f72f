//! Asset management: material and model registration
//!
//! Assets are registered by value and addressed by generation-checked handles
//! afterwards. Registration runs the content-effects creation hooks, which is
//! the only place those hooks are invoked from.

pub mod material_cache;
pub mod model_cache;

pub use material_cache::MaterialCache;
pub use model_cache::{Model, ModelCache, ModelHandle};

use thiserror::Error;

/// Asset lookup errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// No asset registered under the given name
    #[error("Asset not found: {0}")]
    NotFound(String),
}
