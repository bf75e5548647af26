//! Renders the static pages, audits their links and publishes them with a
//! build manifest.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use site_logging::site_info;

use site_builder::site_pages;

#[derive(Debug, Parser)]
#[command(name = "site_builder", about = "Renders and publishes the static pages")]
struct Args {
    /// Directory the generated site is written into.
    #[arg(default_value = "public")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let pages = site_pages(Utc::now().year());
    let summary = site_engine::build_site(&pages, &args.output_dir)
        .with_context(|| format!("building site into {}", args.output_dir.display()))?;

    site_info!(
        "published {} pages ({} bytes), manifest at {}",
        summary.page_count,
        summary.total_bytes,
        summary.manifest_path.display()
    );
    Ok(())
}

fn init_logging() {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();
    // Ignore the error if a global logger is already installed.
    let _ = TermLogger::init(
        LevelFilter::Info,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
