//! Tabular export of sampled grids (long format, one row per grid point).

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tessel::api::TileGrid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Parquet,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(Self::Csv),
            Some("parquet") => Ok(Self::Parquet),
            other => bail!("unsupported output extension {other:?} (use .csv or .parquet)"),
        }
    }
}

/// Columns `ix, iy, x, y, tile_id`, x index outermost.
pub fn grid_frame(grid: &TileGrid) -> Result<DataFrame> {
    let (nx, ny) = grid.shape();
    let n = nx * ny;
    let mut ix = Vec::with_capacity(n);
    let mut iy = Vec::with_capacity(n);
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    let mut ids = Vec::with_capacity(n);
    for (i, j, x, y, id) in grid.iter_cells() {
        ix.push(i as u64);
        iy.push(j as u64);
        xs.push(x);
        ys.push(y);
        ids.push(id);
    }
    let df = df!(
        "ix" => ix,
        "iy" => iy,
        "x" => xs,
        "y" => ys,
        "tile_id" => ids
    )?;
    Ok(df)
}

/// Write the grid to `out`; format follows the extension.
pub fn write_grid(grid: &TileGrid, out: &Path) -> Result<()> {
    let format = Format::from_path(out)?;
    let mut df = grid_frame(grid)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match format {
        Format::Csv => {
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)?;
        }
        Format::Parquet => {
            ParquetWriter::new(&mut file).finish(&mut df)?;
        }
    }
    tracing::info!(rows = df.height(), cols = df.width(), out = %out.display(), "grid_written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tessel::api::{Line, Tessellation};

    fn reference_grid() -> TileGrid {
        Tessellation::with_lines(4.0, 4.0, vec![Line::new(0.0, 0.0)])
            .unwrap()
            .sample_2d(2, 2)
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(Format::from_path(Path::new("a/b.csv")).unwrap(), Format::Csv);
        assert_eq!(
            Format::from_path(Path::new("b.parquet")).unwrap(),
            Format::Parquet
        );
        assert!(Format::from_path(Path::new("b.png")).is_err());
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn frame_is_long_format() {
        let df = grid_frame(&reference_grid()).unwrap();
        assert_eq!(df.shape(), (4, 5));
        let ids: Vec<Option<u64>> = df
            .column("tile_id")
            .unwrap()
            .u64()
            .unwrap()
            .into_iter()
            .collect();
        // (x=-2,y=-2), (x=-2,y=2), (x=2,y=-2), (x=2,y=2)
        assert_eq!(ids, vec![Some(0), Some(1), Some(0), Some(1)]);
    }

    #[test]
    fn parquet_reads_back_tile_ids() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("tiles.parquet");
        write_grid(&reference_grid(), &out).unwrap();
        let df = ParquetReader::new(File::open(&out).unwrap())
            .finish()
            .unwrap();
        assert_eq!(df.shape(), (4, 5));
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, vec!["ix", "iy", "x", "y", "tile_id"]);
        let ids: Vec<Option<u64>> = df
            .column("tile_id")
            .unwrap()
            .u64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(ids, vec![Some(0), Some(1), Some(0), Some(1)]);
        let ys: Vec<Option<f64>> = df
            .column("y")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(ys, vec![Some(-2.0), Some(2.0), Some(-2.0), Some(2.0)]);
    }

    #[test]
    fn csv_round_trips_row_count() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("tiles.csv");
        write_grid(&reference_grid(), &out).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ix,iy,x,y,tile_id"));
        assert_eq!(lines.count(), 4);
    }
}
