//! Lookahead - interactive autocomplete demo.
//!
//! Type to filter a word list, navigate with the arrow keys, pick with Enter
//! or a click. The selected value is printed on exit.

mod app;
mod catalog;
mod config;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::catalog::Catalog;
use crate::config::CliConfig;

/// Keyboard-navigable autocomplete in the terminal
#[derive(Parser, Debug)]
#[command(name = "lookahead")]
#[command(version)]
struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "LOOKAHEAD_CONFIG")]
    config: Option<PathBuf>,

    /// Word list, one candidate per line
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Placeholder shown while the input is empty
    #[arg(long)]
    placeholder: Option<String>,

    /// Maximum number of candidates shown
    #[arg(long)]
    max_list_length: Option<usize>,

    /// Minimum term length before candidates are shown
    #[arg(long)]
    min_filter_length: Option<usize>,

    /// Show a search button next to the input
    #[arg(long)]
    search_button: bool,

    /// Explicit element identifier
    #[arg(long)]
    input_id: Option<String>,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long, env = "LOOKAHEAD_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log level
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    /// Flags override values from the configuration file.
    fn merge_into(self, mut config: CliConfig) -> CliConfig {
        if self.words.is_some() {
            config.words = self.words;
        }
        if self.log_level.is_some() {
            config.log_level = self.log_level;
        }
        let widget = &mut config.widget;
        if let Some(placeholder) = self.placeholder {
            widget.placeholder = placeholder;
        }
        if let Some(max) = self.max_list_length {
            widget.max_list_length = max;
        }
        if let Some(min) = self.min_filter_length {
            widget.min_filter_length = min;
        }
        if self.search_button {
            widget.show_search_button = true;
        }
        if self.input_id.is_some() {
            widget.custom_input_id = self.input_id;
        }
        config
    }
}

fn setup_logging(path: &Path, level: &str) -> anyhow::Result<WorkerGuard> {
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .context("Log file path has no file name")?;
    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
    Ok(guard)
}

fn run(args: Args) -> anyhow::Result<Option<String>> {
    let log_file = args.log_file.clone();
    let file_config = match &args.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let config = args.merge_into(file_config);
    config.widget.validate()?;

    let _guard = match &log_file {
        Some(path) => Some(setup_logging(
            path,
            config.log_level.as_deref().unwrap_or("info"),
        )?),
        None => None,
    };

    let catalog = match &config.words {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    info!(words = catalog.len(), "catalog loaded");

    let selected = App::new(config.widget, catalog).run();
    if let Err(e) = &selected {
        error!("UI error: {e:#}");
    }
    selected
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(Some(value)) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
