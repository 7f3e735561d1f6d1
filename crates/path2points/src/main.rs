//! path2points
//!
//! Samples SVG path data into points and prints them as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use path_points::{convert_with, ConvertOptions, SubPath};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

#[derive(Parser, Debug)]
#[command(name = "path2points")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert SVG path data into sampled points", long_about = None)]
pub(crate) struct Cli {
    /// Path data, e.g. "M0,0 H20 Z". Read from stdin when omitted
    #[arg(conflicts_with = "file")]
    path: Option<String>,

    /// Read path data from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// TOML file with conversion options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Decimal digits kept for every coordinate
    #[arg(long)]
    pub(crate) precision: Option<u32>,

    /// Curve sampler
    #[arg(long, value_enum)]
    pub(crate) sampler: Option<SamplerKind>,

    /// Flattening tolerance for the flatten sampler
    #[arg(long)]
    pub(crate) tolerance: Option<f64>,

    /// Number of segments for the uniform sampler
    #[arg(long)]
    pub(crate) segments: Option<usize>,

    /// Close the open sub-path whenever a move command starts a new one
    #[arg(long)]
    pub(crate) close_on_move: bool,

    /// Most points a single H, V or C command may produce
    #[arg(long)]
    pub(crate) point_limit: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SamplerKind {
    Flatten,
    Uniform,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let options = match &cli.config {
        Some(path) => config::load(path)?,
        None => ConvertOptions::default(),
    };
    let options = config::apply_flags(options, &cli)?;
    debug!(?options, "resolved options");

    let data = read_path_data(&cli)?;
    let sub_paths = convert_with(&data, &options)?;
    info!(sub_paths = sub_paths.len(), "converted path");

    println!("{}", render(&sub_paths, cli.pretty)?);
    Ok(())
}

fn read_path_data(cli: &Cli) -> Result<String> {
    if let Some(path) = &cli.path {
        return Ok(path.clone());
    }
    if let Some(file) = &cli.file {
        return fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()));
    }
    let mut data = String::new();
    io::stdin()
        .read_to_string(&mut data)
        .context("Failed to read path data from stdin")?;
    Ok(data)
}

fn render(sub_paths: &[SubPath], pretty: bool) -> Result<String> {
    let arrays = sub_paths
        .iter()
        .map(|points| points.iter().map(|p| p.to_array()).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let json = if pretty {
        serde_json::to_string_pretty(&arrays)?
    } else {
        serde_json::to_string(&arrays)?
    };
    Ok(json)
}

#[cfg(test)]
mod test {
    use path_points::convert;

    use super::render;

    #[test]
    fn renders_pairs() {
        let sub_paths = convert("M0,0 H20 Z M1.5,2 L3,4 Z").unwrap();
        assert_eq!(
            render(&sub_paths, false).unwrap(),
            "[[[0.0,0.0],[10.0,0.0],[20.0,0.0]],[[1.5,2.0],[3.0,4.0]]]"
        );
    }

    #[test]
    fn renders_nothing_for_open_paths() {
        let sub_paths = convert("M0,0 L1,1").unwrap();
        assert_eq!(render(&sub_paths, false).unwrap(), "[]");
    }
}
