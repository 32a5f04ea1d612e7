//! Random line tessellations of a rectangle.
//!
//! Each cut is an infinite line; a point's tile id packs the side of every
//! line it falls on into one integer (first line = least significant bit).
//!
//! API Policy
//! - `api` is a curated re-export surface for the CLI and benches.
//! - `prelude` covers the common single-import case.

pub mod api;
pub mod error;
pub mod grid;
pub mod line;
pub mod rand;
pub mod tessellation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::TessellationError;
pub use grid::TileGrid;
pub use line::Line;
pub use tessellation::{Tessellation, TessellationParams, TileId, MAX_CUTS};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::grid::{linspace, TileGrid};
    pub use crate::line::Line;
    pub use crate::rand::{ReplayToken, ScriptedSource, UniformSource};
    pub use crate::tessellation::{Tessellation, TessellationParams, TileId, MAX_CUTS};
    pub use crate::TessellationError;
    pub use nalgebra::Vector2 as Vec2;
}
