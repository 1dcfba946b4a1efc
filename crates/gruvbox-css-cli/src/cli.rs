//! Argument parsing and the build/check commands.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use gruvbox_css::{
    stale_artifacts, write_all, BuildConfig, ThemeBuild, DEFAULT_DARK_CLASS, DEFAULT_FILE_STEM,
    DEFAULT_NAMESPACE,
};
use gruvbox_palette::Inversion;
use tracing::{info, warn};

/// Generate gruvbox CSS custom-property stylesheets and JS/TS constant modules.
#[derive(Debug, Parser)]
#[command(name = "gruvbox-build", version, about)]
pub struct Args {
    /// Directory the artifacts are written to (created if missing).
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Base name of every artifact.
    #[arg(long, default_value = DEFAULT_FILE_STEM)]
    pub file_stem: String,

    /// Custom-property namespace (`--<namespace>-abs-*`).
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Selector that switches to dark mode in the class-based stylesheet.
    #[arg(long, default_value = DEFAULT_DARK_CLASS)]
    pub dark_class: String,

    /// Switch faded accents to bright in dark mode instead of keeping them.
    #[arg(long)]
    pub symmetric_inversion: bool,

    /// Verify the artifacts in the output directory instead of writing them.
    #[arg(long)]
    pub check: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn config(&self) -> BuildConfig {
        let inversion = if self.symmetric_inversion {
            Inversion::Symmetric
        } else {
            Inversion::Classic
        };
        BuildConfig::new()
            .with_namespace(&self.namespace)
            .with_dark_class(&self.dark_class)
            .with_file_stem(&self.file_stem)
            .with_inversion(inversion)
    }
}

pub fn run(args: &Args) -> Result<()> {
    let build = ThemeBuild::new(args.config()).context("invalid palette or mode table")?;
    let artifacts = build.artifacts().context("failed to render artifacts")?;

    if args.check {
        let stale = stale_artifacts(&args.out_dir, &artifacts)
            .with_context(|| format!("failed to check {}", args.out_dir.display()))?;
        if !stale.is_empty() {
            for artifact in &stale {
                warn!(file = artifact.file_name(), "out of date");
            }
            bail!(
                "{} of {} artifacts in {} are out of date",
                stale.len(),
                artifacts.len(),
                args.out_dir.display()
            );
        }
        info!(count = artifacts.len(), "all artifacts up to date");
        return Ok(());
    }

    write_all(&args.out_dir, &artifacts)
        .with_context(|| format!("failed to write artifacts to {}", args.out_dir.display()))?;
    info!(count = artifacts.len(), dir = %args.out_dir.display(), "built successfully");
    Ok(())
}
