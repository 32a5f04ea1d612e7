//! Curated API for the CLI and benches.
//!
//! Prefer these re-exports for consistency across callers; the module layout
//! behind them may move.

// Lines and the half-plane test
pub use crate::line::Line;
// Random sources
pub use crate::rand::{ReplayToken, ScriptedSource, UniformSource};
// Tessellation and sampling
pub use crate::grid::{linspace, TileGrid};
pub use crate::tessellation::{Tessellation, TessellationParams, TileId, MAX_CUTS};

use crate::error::TessellationError;

/// Pre: `params` valid, `x_samples`, `y_samples` >= 1.
/// Post: the seeded tessellation and its sampled grid.
pub fn sample_seeded(
    params: TessellationParams,
    seed: u64,
    x_samples: usize,
    y_samples: usize,
) -> Result<(Tessellation, TileGrid), TessellationError> {
    let tess = Tessellation::from_seed(params, ReplayToken::new(seed))?;
    let grid = tess.sample_2d_checked(x_samples, y_samples)?;
    Ok((tess, grid))
}
