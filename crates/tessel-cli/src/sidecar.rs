//! Regeneration metadata written next to each sampled grid.
//!
//! A grid is fully determined by the rectangle, cut count, seed, and sample
//! counts, so the sidecar records exactly those (plus the library version,
//! since the seeding scheme belongs to it).

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::TessArgs;

/// One `sample` invocation.
#[derive(Clone, Debug, Serialize)]
pub struct SampleRun {
    pub tessellation: TessArgs,
    pub x_samples: usize,
    pub y_samples: usize,
    pub distinct_tiles: usize,
    pub tag: Option<String>,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    tessel_version: &'static str,
    code_rev: Option<String>,
    grid: &'a Path,
    run: &'a SampleRun,
}

/// `tiles.csv` -> `tiles.provenance.json`.
pub fn sidecar_path(grid: &Path) -> PathBuf {
    grid.with_extension("provenance.json")
}

/// `GIT_COMMIT` from the environment at run time, else at build time.
pub fn code_rev() -> Option<String> {
    std::env::var("GIT_COMMIT")
        .ok()
        .or_else(|| option_env!("GIT_COMMIT").map(str::to_string))
        .filter(|rev| !rev.is_empty())
}

/// Write the sidecar for `grid`; returns its path.
pub fn write_sidecar(grid: &Path, run: &SampleRun) -> Result<PathBuf> {
    let path = sidecar_path(grid);
    let doc = Sidecar {
        tessel_version: tessel::VERSION,
        code_rev: code_rev(),
        grid,
        run,
    };
    let bytes = serde_json::to_vec_pretty(&doc).context("encoding sidecar")?;
    fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "sidecar written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn run() -> SampleRun {
        SampleRun {
            tessellation: TessArgs {
                x_extent: 6.0,
                y_extent: 2.0,
                cuts: 3,
                seed: 7,
            },
            x_samples: 12,
            y_samples: 4,
            distinct_tiles: 5,
            tag: Some("demo".into()),
        }
    }

    #[test]
    fn sidecar_path_swaps_extension() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/out/tiles.parquet")),
            Path::new("/tmp/out/tiles.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("tiles")),
            Path::new("tiles.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_the_run() {
        let dir = tempdir().unwrap();
        let grid = dir.path().join("tiles.csv");
        let path = write_sidecar(&grid, &run()).unwrap();
        assert_eq!(path, dir.path().join("tiles.provenance.json"));
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["tessel_version"], tessel::VERSION);
        assert_eq!(doc["grid"], grid.to_string_lossy().as_ref());
        assert_eq!(doc["run"]["tessellation"]["seed"], 7);
        assert_eq!(doc["run"]["tessellation"]["cuts"], 3);
        assert_eq!(doc["run"]["x_samples"], 12);
        assert_eq!(doc["run"]["distinct_tiles"], 5);
        assert_eq!(doc["run"]["tag"], "demo");
    }
}
