//! Dense tile-id grids over the sampling rectangle.
//!
//! - `linspace`: equally spaced samples with an inclusive end point.
//! - `TileGrid`: owned grid of `x_samples × y_samples` tile ids plus the
//!   coordinates it was sampled at. `get(i, j)` is the id at `(xs[i], ys[j])`.
//!
//! Layout: the backing matrix is image-like, one row per y sample and one
//! column per x sample, so `to_rows()` of a grid over `y = 0` reads
//! `[[0, 0], [1, 1]]` (bottom row first).

use std::collections::BTreeSet;

use nalgebra::DMatrix;

use crate::tessellation::TileId;

/// `n` equally spaced values from `lo` to `hi` inclusive.
///
/// `n == 1` yields `[lo]`, `n == 0` yields nothing. The last sample is pinned
/// to `hi` so the end point is exact regardless of rounding in the step.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|k| lo + k as f64 * step).collect();
            out[n - 1] = hi;
            out
        }
    }
}

/// Sampled tile ids, addressed by `(x index, y index)`.
#[derive(Clone, Debug, PartialEq)]
pub struct TileGrid {
    ids: DMatrix<TileId>,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl TileGrid {
    /// Evaluate `f` once per grid point and store the result by index.
    pub(crate) fn from_fn<F>(xs: Vec<f64>, ys: Vec<f64>, mut f: F) -> Self
    where
        F: FnMut(f64, f64) -> TileId,
    {
        let ids = DMatrix::from_fn(ys.len(), xs.len(), |j, i| f(xs[i], ys[j]));
        Self { ids, xs, ys }
    }

    /// `(x_samples, y_samples)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.xs.len(), self.ys.len())
    }

    /// Id at x index `i`, y index `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<TileId> {
        self.ids.get((j, i)).copied()
    }

    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Backing matrix: `y_samples` rows by `x_samples` columns.
    #[inline]
    pub fn as_matrix(&self) -> &DMatrix<TileId> {
        &self.ids
    }

    /// All cells as `(i, j, x, y, id)`, x index outermost.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, f64, f64, TileId)> + '_ {
        let (nx, ny) = self.shape();
        (0..nx).flat_map(move |i| {
            (0..ny).map(move |j| (i, j, self.xs[i], self.ys[j], self.ids[(j, i)]))
        })
    }

    /// Ids present in the grid, ascending.
    pub fn distinct_ids(&self) -> BTreeSet<TileId> {
        self.ids.iter().copied().collect()
    }

    /// Nested rows, one per y sample: `rows[j][i]` is the id at `(xs[i], ys[j])`.
    pub fn to_rows(&self) -> Vec<Vec<TileId>> {
        self.ids
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}
