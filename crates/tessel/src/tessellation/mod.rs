//! Random line tessellation of an axis-aligned rectangle.
//!
//! Purpose
//! - Cut the plane with `cuts` random infinite lines and label every point by
//!   the pattern of sides it falls on, packed into one integer (`TileId`).
//! - Sample those labels on a regular grid over the rectangle.
//!
//! Model
//! - The rectangle is centred at the origin: `[-x_extent/2, x_extent/2] ×
//!   [-y_extent/2, y_extent/2]`.
//! - Each cut draws three uniforms in order: a point in the rectangle (x, y)
//!   and an angle fraction `w`, giving `slope = tan((w - 0.5)·π)`. Orientation
//!   is uniform over angle, not over slope.
//! - Line `i` contributes bit `i` (first line least significant) when the
//!   point is strictly above it.
//!
//! Code cross-refs: `Line`, `UniformSource`, `TileGrid`.

use nalgebra::Vector2;

use crate::error::TessellationError;
use crate::grid::{linspace, TileGrid};
use crate::line::Line;
use crate::rand::{ReplayToken, UniformSource};

/// Tile identifier: bit `i` set iff the point is above line `i`.
pub type TileId = u64;

/// Ids are 64-bit, so at most this many lines can be encoded.
pub const MAX_CUTS: usize = TileId::BITS as usize;

/// Rectangle extents and number of cuts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TessellationParams {
    pub x_extent: f64,
    pub y_extent: f64,
    pub cuts: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TessellationParams {
    /// 4 × 4 rectangle, 8 cuts.
    pub const DEFAULT: Self = Self {
        x_extent: 4.0,
        y_extent: 4.0,
        cuts: 8,
    };

    pub fn new(x_extent: f64, y_extent: f64, cuts: usize) -> Self {
        Self {
            x_extent,
            y_extent,
            cuts,
        }
    }

    pub fn validate(&self) -> Result<(), TessellationError> {
        validate_extents(self.x_extent, self.y_extent)?;
        validate_cut_count(self.cuts)
    }
}

fn validate_extents(x_extent: f64, y_extent: f64) -> Result<(), TessellationError> {
    if !(x_extent.is_finite() && y_extent.is_finite()) {
        return Err(TessellationError::invalid("extents must be finite"));
    }
    if x_extent <= 0.0 || y_extent <= 0.0 {
        return Err(TessellationError::invalid("extents must be > 0"));
    }
    Ok(())
}

fn validate_cut_count(cuts: usize) -> Result<(), TessellationError> {
    if cuts > MAX_CUTS {
        return Err(TessellationError::invalid(format!(
            "at most {MAX_CUTS} cuts fit in a tile id, got {cuts}"
        )));
    }
    Ok(())
}

/// Rectangle plus an ordered set of cutting lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Tessellation {
    x_extent: f64,
    y_extent: f64,
    lines: Vec<Line>,
}

impl Tessellation {
    /// Draw `cuts` random lines over an `x_extent × y_extent` rectangle.
    ///
    /// Errors with `InvalidArgument` if an extent is not finite and positive,
    /// or if `cuts > MAX_CUTS` (64): each line owns one bit of a `TileId`.
    pub fn new<S: UniformSource + ?Sized>(
        x_extent: f64,
        y_extent: f64,
        cuts: usize,
        source: &mut S,
    ) -> Result<Self, TessellationError> {
        Self::generate(TessellationParams::new(x_extent, y_extent, cuts), source)
    }

    /// Draw `params.cuts` random lines, consuming exactly `3 * cuts` uniforms.
    ///
    /// Same limits as [`Tessellation::new`]: at most `MAX_CUTS` lines.
    pub fn generate<S: UniformSource + ?Sized>(
        params: TessellationParams,
        source: &mut S,
    ) -> Result<Self, TessellationError> {
        params.validate()?;
        let lines: Vec<Line> = (0..params.cuts)
            .map(|_| random_line(source, params.x_extent, params.y_extent))
            .collect();
        tracing::debug!(
            cuts = params.cuts,
            x_extent = params.x_extent,
            y_extent = params.y_extent,
            "tessellation generated"
        );
        Ok(Self {
            x_extent: params.x_extent,
            y_extent: params.y_extent,
            lines,
        })
    }

    /// Reproducible tessellation from a replay token.
    pub fn from_seed(
        params: TessellationParams,
        token: ReplayToken,
    ) -> Result<Self, TessellationError> {
        let mut rng = token.to_std_rng();
        Self::generate(params, &mut rng)
    }

    /// Tessellation over the given rectangle with caller-chosen lines
    /// (at most `MAX_CUTS`).
    pub fn with_lines(
        x_extent: f64,
        y_extent: f64,
        lines: Vec<Line>,
    ) -> Result<Self, TessellationError> {
        validate_extents(x_extent, y_extent)?;
        validate_cut_count(lines.len())?;
        Ok(Self {
            x_extent,
            y_extent,
            lines,
        })
    }

    /// Replace the whole line sequence. Changes the id mapping.
    pub fn set_lines(&mut self, lines: Vec<Line>) -> Result<(), TessellationError> {
        validate_cut_count(lines.len())?;
        self.lines = lines;
        Ok(())
    }

    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[inline]
    pub fn x_extent(&self) -> f64 {
        self.x_extent
    }

    #[inline]
    pub fn y_extent(&self) -> f64 {
        self.y_extent
    }

    #[inline]
    pub fn cut_count(&self) -> usize {
        self.lines.len()
    }

    /// Parameters that describe this tessellation's rectangle and cut count.
    pub fn params(&self) -> TessellationParams {
        TessellationParams::new(self.x_extent, self.y_extent, self.cut_count())
    }

    /// Inside the closed sampling rectangle?
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x.abs() <= self.x_extent / 2.0 && y.abs() <= self.y_extent / 2.0
    }

    /// Id of the tile containing `(x, y)`. Defined for every point, inside
    /// the rectangle or not.
    pub fn tile_id(&self, x: f64, y: f64) -> TileId {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.above(x, y))
            .fold(0, |id, (bit, _)| id | (1 << bit))
    }

    #[inline]
    pub fn tile_id_at(&self, p: Vector2<f64>) -> TileId {
        self.tile_id(p.x, p.y)
    }

    /// Sample tile ids on a regular `x_samples × y_samples` grid spanning the
    /// rectangle, end points included. Cell `(i, j)` is `tile_id(xs[i], ys[j])`.
    ///
    /// Pre: both counts >= 1. A zero count yields an empty axis.
    pub fn sample_2d(&self, x_samples: usize, y_samples: usize) -> TileGrid {
        let hx = self.x_extent / 2.0;
        let hy = self.y_extent / 2.0;
        let grid = TileGrid::from_fn(
            linspace(-hx, hx, x_samples),
            linspace(-hy, hy, y_samples),
            |x, y| self.tile_id(x, y),
        );
        tracing::debug!(x_samples, y_samples, cuts = self.cut_count(), "sampled grid");
        grid
    }

    /// `sample_2d` with the sample counts checked.
    pub fn sample_2d_checked(
        &self,
        x_samples: usize,
        y_samples: usize,
    ) -> Result<TileGrid, TessellationError> {
        if x_samples == 0 || y_samples == 0 {
            return Err(TessellationError::invalid("sample counts must be >= 1"));
        }
        Ok(self.sample_2d(x_samples, y_samples))
    }
}

/// One cut: uniform point in the rectangle, slope uniform over angle.
fn random_line<S: UniformSource + ?Sized>(source: &mut S, x_extent: f64, y_extent: f64) -> Line {
    let px = (source.next_uniform() - 0.5) * x_extent;
    let py = (source.next_uniform() - 0.5) * y_extent;
    let slope = ((source.next_uniform() - 0.5) * std::f64::consts::PI).tan();
    Line::through(Vector2::new(px, py), slope)
}
