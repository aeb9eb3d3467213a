//! lognav - Entry Point

use clap::Parser;
use lognav::layout::{FlowchartLayout, LayoutDirection};
use lognav::model::{AppError, NavGraph, Session};
use lognav::service::LocalLogStore;
use lognav::state::AnalysisState;
use lognav::stats::Statistics;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Session reconstruction and navigation-graph analysis over device log files
#[derive(Parser, Debug)]
#[command(name = "lognav")]
#[command(version)]
#[command(about = "Analyze device log files into sessions and navigation graphs")]
pub struct Args {
    /// Path to the log file to analyze
    pub file: PathBuf,

    /// Session to analyze (defaults to session 1)
    #[arg(short = 'n', long)]
    pub session: Option<u32>,

    /// Device id to attribute the log lines to
    #[arg(short, long, default_value = "local")]
    pub device: String,

    /// Layout direction for the navigation graph
    #[arg(long, default_value = "top-bottom", value_parser = ["top-bottom", "left-right"])]
    pub direction: String,

    /// Filter logs by search text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Rows per page in the log listing
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Print the raw formatted log text instead of the JSON report
    #[arg(long)]
    pub raw: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Everything the surrounding application renders, in one payload.
#[derive(Debug, Serialize)]
struct Report<'a> {
    sessions: &'a [Session],
    statistics: Statistics,
    graph: &'a NavGraph,
    layout: Option<&'a FlowchartLayout>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Precedence chain: Defaults -> Config File -> Env Vars -> CLI Args
    let config = {
        let config_file = lognav::config::load_config_with_precedence(args.config.clone())?;
        let merged = lognav::config::merge_config(config_file);
        let with_env = lognav::config::apply_env_overrides(merged);
        lognav::config::apply_cli_overrides(with_env, args.per_page)
    };

    lognav::logging::init(&config.log_file_path)?;

    info!(config = ?config, "configuration loaded and resolved");

    let logs = lognav::source::read_log_file(&args.file, &args.device)?;
    info!(lines = logs.len(), file = %args.file.display(), "log file read");

    let store = LocalLogStore::new(logs);

    if args.raw {
        use lognav::service::RawFileService;
        print!("{}", store.fetch_raw(args.session)?);
        return Ok(());
    }

    let mut state = AnalysisState::default();
    state
        .cursor_mut()
        .set_fetch_page_size(config.fetch_page_size);
    state.initialize(&store, store.logs());

    if args.session.is_some() {
        state.select_session(&store, args.session);
    }
    // Pull the whole session into the buffer; the CLI has no incremental UI.
    while state.load_more(&store) {}

    state.cursor_mut().set_per_page(config.rows_per_page);
    if let Some(search) = args.search {
        state.cursor_mut().set_search(search);
    }
    if args.direction == "left-right" {
        state.set_layout_direction(LayoutDirection::LeftRight);
    }

    let report = Report {
        sessions: state.sessions(),
        statistics: state.statistics(),
        graph: state.graph(),
        layout: state.layout(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
