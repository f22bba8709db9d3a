use clap::{Parser, Subcommand};
use jassdoc_index::Scope;
use jassdoc_index::tracing::LogFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jassdoc")]
#[command(about = "Look up JASS natives, functions, types and globals", long_about = None)]
pub(crate) struct Cli {
    /// JSON corpus produced by the JassDoc parser
    #[arg(short, long, env = "JASSDOC_CORPUS")]
    pub(crate) corpus: PathBuf,

    /// Log output on stderr: text or json
    #[arg(long, default_value = "text", env = "JASSDOC_LOG_FORMAT")]
    pub(crate) log_format: LogFormat,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show one entity by exact (or case-insensitive) name
    Lookup {
        name: String,
        #[arg(short, long, default_value = "entity")]
        scope: Scope,
    },
    /// List autocomplete suggestions for a partial name
    Search {
        input: String,
        #[arg(short, long, default_value = "entity")]
        scope: Scope,
        #[arg(short = 'n', long, default_value = "25")]
        limit: usize,
    },
    /// Answer queries from stdin, reloading the corpus when it changes
    Watch {
        #[arg(long, default_value = "30")]
        interval_secs: u64,
    },
}
