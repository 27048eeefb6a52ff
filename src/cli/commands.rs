use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::EngineConfig;
use crate::engine::SearchEngine;
use crate::index_storage::AbsentReason;
use crate::logging::init_logging;
use crate::models::MatchMode;
use crate::utils::{format_count, sanitize_for_terminal};

#[derive(Parser)]
#[command(name = "file-search-engine")]
#[command(version = "0.1.0")]
#[command(about = "Index a directory tree and search it by file name", long_about = None)]
pub struct Cli {
    /// Directory holding the index snapshot and results report
    /// [default: $FILE_SEARCH_DATA_DIR, else the working directory]
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-index a directory tree, replacing the saved index
    Index {
        /// Root directory to index
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Search the saved index by file name
    Search {
        /// Term to look for (case-insensitive; empty matches everything)
        #[arg(default_value = "")]
        term: String,

        /// How the term must relate to the file name
        #[arg(short, long, value_enum, default_value_t = MatchMode::Contains)]
        mode: MatchMode,
    },
    /// Show statistics about the saved index
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let config = EngineConfig::resolve(cli.data_dir)?;
    let mut engine = SearchEngine::new(config);

    match command {
        Commands::Index { path } => reindex(&mut engine, &path),
        Commands::Search { term, mode } => run_search(&mut engine, &term, mode),
        Commands::Stats => show_stats(&mut engine),
    }
}

fn reindex(engine: &mut SearchEngine, root: &Path) -> Result<()> {
    engine.build_index(root)?;
    let stats = engine.stats();

    println!();
    println!(">> New index created");
    println!(
        ">> Indexed {} files in {} directories",
        format_count(stats.files),
        format_count(stats.directories)
    );
    println!();

    Ok(())
}

fn run_search(engine: &mut SearchEngine, term: &str, mode: MatchMode) -> Result<()> {
    report_absent_index(engine.load_index());

    let outcome = engine.search(term, mode).map(|_| ());

    // Show whatever was found even if the report could not be saved
    if let Some(result) = engine.last_result() {
        println!();
        for row in &result.matches {
            println!("{}", sanitize_for_terminal(row));
        }
        println!();
        println!(
            ">> Searched {} records and found {} matches",
            format_count(result.records_scanned),
            format_count(result.matches_found())
        );
    }

    outcome?;
    let results_path = &engine.config().results_path;
    println!(
        ">> Results saved in {} as {}.",
        engine.config().results_dir().display(),
        results_path.file_name().unwrap_or(results_path.as_os_str()).to_string_lossy()
    );

    Ok(())
}

fn show_stats(engine: &mut SearchEngine) -> Result<()> {
    report_absent_index(engine.load_index());
    let stats = engine.stats();

    println!("File Index Statistics");
    println!("=====================");
    println!("Directories: {}", format_count(stats.directories));
    println!("Files: {}", format_count(stats.files));
    println!();
    println!("Index snapshot: {}", engine.config().index_path.display());

    Ok(())
}

fn report_absent_index(reason: Option<AbsentReason>) {
    match reason {
        None => {}
        Some(AbsentReason::Missing) => {
            tracing::warn!("No index snapshot found; run `index` first");
        }
        Some(reason) => {
            tracing::warn!("Ignoring saved index: {}", reason);
        }
    }
}
