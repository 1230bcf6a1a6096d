//! Shared CLI entry point for the `canonry` binary.
//!
//! Parses arguments, loads config and snapshots, runs the analysis and
//! prints the report. All failures surface as `anyhow` errors with context.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;

use crate::analyzer::{AnalyzeOptions, analyze};
use crate::colors::Painter;
use crate::config::CanonryConfig;
use crate::output::render_report;
use crate::snapshot::{load_dependencies, load_inventory};
use crate::types::{ColorMode, OutputMode};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canonry")]
#[command(about = "Find duplicated exports and pick the canonical definition")]
#[command(version)]
pub struct Args {
    /// Inventory JSON (`{"files": [...]}`) produced by the parser
    pub inventory: PathBuf,

    /// Dependency sample JSON, or `{"edges": [...]}` import edges
    #[arg(long)]
    pub deps: Option<PathBuf>,

    /// Project root holding `.canonry/config.toml`
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Explicit config file (overrides `<root>/.canonry/config.toml`)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Colorize human output
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,

    /// Resolve groups on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Keep at most this many most-imported files from the dependency input
    #[arg(long)]
    pub sample_limit: Option<usize>,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` wins when set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    fn load_config(&self) -> Result<CanonryConfig> {
        match &self.config {
            Some(path) => CanonryConfig::try_load_from_path(path)
                .with_context(|| format!("loading config {}", path.display())),
            None => Ok(CanonryConfig::load(&self.root)),
        }
    }

    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

/// Run one analysis and return the rendered report.
pub fn run(args: &Args) -> Result<String> {
    let config = args.load_config()?;
    let sample_limit = args.sample_limit.unwrap_or(config.dependency_sample_limit);

    let inventory = load_inventory(&args.inventory, &config.generic_file_names)
        .with_context(|| format!("loading inventory {}", args.inventory.display()))?;

    let dependencies = match &args.deps {
        Some(path) => load_dependencies(path, sample_limit)
            .with_context(|| format!("loading dependencies {}", path.display()))?,
        None => Vec::new(),
    };

    let options = AnalyzeOptions {
        parallel: config.parallel && !args.sequential,
    };
    debug!(?options, sample_limit, "starting analysis");

    let report = analyze(&inventory, &dependencies, options);
    let painter = Painter::new(args.color.into());
    render_report(&report, args.output_mode(), &painter).context("rendering report")
}
