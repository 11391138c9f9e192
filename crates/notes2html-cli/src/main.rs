//! notes2html - convert a tree of outline notes into static HTML pages

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use notes2html_config::Config;
use notes2html_engine::{BatchOptions, RenderOptions, batch, io};

#[derive(Parser, Debug)]
#[command(name = "notes2html")]
#[command(version, about = "Convert outline notes to static HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    notes2html notes/ site/                      Convert every .txt note under notes/
    notes2html --assets-url /static notes/ site/ Serve css, js and images from /static")]
struct Cli {
    /// Directory containing the notes
    #[arg(value_name = "SOURCE_DIR")]
    source: PathBuf,

    /// Directory the HTML pages are written to
    #[arg(value_name = "DEST_DIR")]
    dest: PathBuf,

    /// Config file (defaults to ~/.config/notes2html/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL for stylesheets, scripts and images
    #[arg(long, value_name = "URL")]
    assets_url: Option<String>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    // RUST_LOG still wins over the default level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Returns whether every note converted.
fn run(cli: &Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;
    let options = batch_options(config, cli.assets_url.clone());

    io::validate_notes_dir(&cli.source)
        .with_context(|| format!("Notes path '{}' is invalid", cli.source.display()))?;

    let report = batch::convert_tree(&cli.source, &cli.dest, &options)
        .with_context(|| format!("Failed to convert notes in '{}'", cli.source.display()))?;

    if !report.is_success() {
        log::error!(
            "{} note(s) failed to convert, {} written to {}",
            report.failures.len(),
            report.converted.len(),
            cli.dest.display()
        );
    }
    Ok(report.is_success())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config_path = match explicit {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.to_path_buf()),
        None => Config::config_path(),
    };

    let config = Config::load_from_path(&config_path)?;
    match config {
        Some(config) => {
            log::debug!("loaded config from {}", config_path.display());
            Ok(config)
        }
        None if explicit.is_some() => {
            anyhow::bail!("Config file '{}' not found", config_path.display())
        }
        None => Ok(Config::default()),
    }
}

fn batch_options(config: Config, assets_url: Option<String>) -> BatchOptions {
    BatchOptions {
        extension: config.sources.extension,
        render: RenderOptions {
            assets_url: assets_url.unwrap_or(config.render.assets_url),
            analytics_id: config.render.analytics_id,
        },
    }
}
