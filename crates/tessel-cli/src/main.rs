use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tessel::api::{sample_seeded, ReplayToken, Tessellation, TessellationParams, MAX_CUTS};
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod sidecar;

const DEFAULTS: TessellationParams = TessellationParams::DEFAULT;

#[derive(Parser)]
#[command(name = "tessel-cli")]
#[command(about = "Generate and sample random line tessellations")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

/// Rectangle, cut count, and seed shared by all generating commands.
#[derive(Args, Clone, Copy, Debug, Serialize)]
struct TessArgs {
    #[arg(long, default_value_t = DEFAULTS.x_extent)]
    x_extent: f64,
    #[arg(long, default_value_t = DEFAULTS.y_extent)]
    y_extent: f64,
    #[arg(long, default_value_t = DEFAULTS.cuts)]
    cuts: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl TessArgs {
    fn params(&self) -> TessellationParams {
        TessellationParams::new(self.x_extent, self.y_extent, self.cuts)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Sample tile ids on a grid and write them (.csv or .parquet) plus a sidecar
    Sample {
        #[command(flatten)]
        tess: TessArgs,
        #[arg(long, default_value_t = 256)]
        x_samples: usize,
        #[arg(long, default_value_t = 256)]
        y_samples: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the generated lines as JSON
    Lines {
        #[command(flatten)]
        tess: TessArgs,
    },
    /// Print the library version, id width, and CLI defaults
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sample {
            tess,
            x_samples,
            y_samples,
            out,
        } => sample(tess, x_samples, y_samples, out, cmd.tag),
        Action::Lines { tess } => lines(tess),
        Action::Report => report(cmd.tag),
    }
}

fn sample(
    tess: TessArgs,
    x_samples: usize,
    y_samples: usize,
    out: PathBuf,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(?tess, x_samples, y_samples, out = %out.display(), tag = ?tag, "sample");
    let (_, grid) = sample_seeded(tess.params(), tess.seed, x_samples, y_samples)
        .context("sampling tessellation")?;
    let distinct_tiles = grid.distinct_ids().len();
    tracing::info!(distinct_tiles, "grid_sampled");
    output::write_grid(&grid, &out)?;

    let run = sidecar::SampleRun {
        tessellation: tess,
        x_samples,
        y_samples,
        distinct_tiles,
        tag,
    };
    sidecar::write_sidecar(&out, &run)?;
    Ok(())
}

#[derive(Serialize)]
struct LineRecord {
    bit: usize,
    y_intercept: f64,
    slope: f64,
}

#[derive(Serialize)]
struct LinesDoc {
    tessellation: TessArgs,
    lines: Vec<LineRecord>,
}

fn lines_doc(tess: TessArgs) -> Result<LinesDoc> {
    let t = Tessellation::from_seed(tess.params(), ReplayToken::new(tess.seed))
        .context("generating tessellation")?;
    let lines = t
        .lines()
        .iter()
        .enumerate()
        .map(|(bit, line)| LineRecord {
            bit,
            y_intercept: line.y_intercept(),
            slope: line.slope(),
        })
        .collect();
    Ok(LinesDoc {
        tessellation: tess,
        lines,
    })
}

fn lines(tess: TessArgs) -> Result<()> {
    tracing::info!(?tess, "lines");
    let doc = lines_doc(tess)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[derive(Serialize)]
struct ReportDoc {
    tessel_version: &'static str,
    code_rev: Option<String>,
    tag: Option<String>,
    max_cuts: usize,
    defaults: TessArgs,
}

fn report_doc(tag: Option<String>) -> ReportDoc {
    ReportDoc {
        tessel_version: tessel::VERSION,
        code_rev: sidecar::code_rev(),
        tag,
        max_cuts: MAX_CUTS,
        defaults: TessArgs {
            x_extent: DEFAULTS.x_extent,
            y_extent: DEFAULTS.y_extent,
            cuts: DEFAULTS.cuts,
            seed: 0,
        },
    }
}

fn report(tag: Option<String>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report_doc(tag))?);
    Ok(())
}
