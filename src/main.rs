//! Matrix96 - a terminal canvas for a 6x9 grid filled by hand or by AI
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use matrix96::headless::HeadlessOptions;
use matrix96_app::config::{init_config_dir, load_settings, load_settings_file};

/// Matrix96 - a 6x9 grid editor backed by a generative AI service
#[derive(Parser, Debug)]
#[command(name = "matrix96")]
#[command(about = "A terminal canvas for a 6x9 AI-generated grid", long_about = None)]
struct Args {
    /// Settings file (default: .matrix96/config.toml, then the user config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Theme to generate a grid for (headless mode)
    #[arg(long)]
    theme: Option<String>,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Analyze the grid after generating (headless mode)
    #[arg(long)]
    analyze: bool,

    /// Directory exports are written to
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Write a commented default .matrix96/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init_config {
        let path = init_config_dir(&work_dir)?;
        eprintln!("Config written to {}", path.display());
        return Ok(());
    }

    let mut settings = match &args.config {
        Some(path) => load_settings_file(path)?,
        None => load_settings(&work_dir),
    };
    if let Some(dir) = &args.export {
        settings.export.directory = dir.clone();
    }

    if args.headless {
        let options = HeadlessOptions {
            theme: args.theme,
            analyze: args.analyze,
            export_dir: args.export,
        };
        let failures = matrix96::run_headless(settings, options).await?;
        if failures > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    if args.theme.is_some() || args.analyze {
        eprintln!("--theme and --analyze only apply with --headless");
    }
    matrix96::run(settings).await?;
    Ok(())
}
