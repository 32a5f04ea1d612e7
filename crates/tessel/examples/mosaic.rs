//! Print a seeded tessellation as an ASCII mosaic.
//!
//! Usage:
//!   cargo run -p tessel --example mosaic -- [cuts] [seed]
//!
//! Each character is the tile id of one grid point, folded onto a small
//! alphabet. Top row is the largest y.

use tessel::api::{ReplayToken, Tessellation, TessellationParams};

const GLYPHS: &[u8] = b".:-=+*#%@oxOX&$";

fn main() {
    let mut args = std::env::args().skip(1);
    let cuts = args.next().and_then(|s| s.parse().ok()).unwrap_or(6);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let params = TessellationParams::new(8.0, 4.0, cuts);
    let tess = Tessellation::from_seed(params, ReplayToken::new(seed))
        .expect("valid tessellation params");
    let grid = tess.sample_2d(72, 24);
    for row in grid.to_rows().iter().rev() {
        let line: String = row
            .iter()
            .map(|&id| GLYPHS[(id % GLYPHS.len() as u64) as usize] as char)
            .collect();
        println!("{line}");
    }
    println!(
        "cuts={cuts} seed={seed} distinct_tiles={}",
        grid.distinct_ids().len()
    );
}
