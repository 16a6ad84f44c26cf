//! CLI argument definitions and logging setup for the `memtree` binary

use std::path::PathBuf;

use clap::{
    ArgAction,
    Parser,
    ValueHint,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt::{
        self,
        format::FmtSpan,
    },
    prelude::*,
};

use crate::file_system::DEFAULT_ROOT;

/// Build and browse an in-memory tree of directories and sized files
#[derive(Parser, Debug)]
#[command(name = "memtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the root directory
    #[arg(short, long, env = "MEMTREE_ROOT", default_value = DEFAULT_ROOT)]
    pub root: String,

    /// Read commands from a file instead of the terminal
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub script: Option<PathBuf>,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

#[must_use]
pub const fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn setup_logging(verbosity: u8) {
    let filter = level_filter(verbosity);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
