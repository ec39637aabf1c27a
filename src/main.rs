//! Course GPA - Main Entry Point
//!
//! This is the main entry point for the course-gpa application.
//! The actual implementation is in the `course_gpa` library.

use anyhow::{Context, Result};
use clap::Parser;
use course_gpa::{Config, GradeBookHandler, Session};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Course GPA - record course grades and calculate a grade-point average
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML preferences file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let mut config = match args.config {
        Some(ref path) => Config::load(path)
            .with_context(|| format!("Failed to load preferences from {}", path.display()))?,
        None => Config::default(),
    };
    if args.no_color {
        config.color = false;
    }
    colored::control::set_override(config.color);
    info!(?config, "configuration loaded");

    let handler = GradeBookHandler::new(config);
    let stdin = std::io::stdin();
    let mut session = Session::new(handler, stdin.lock(), std::io::stdout().lock());
    session.run()
}
