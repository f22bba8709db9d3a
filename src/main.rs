mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use jassdoc_index::autocomplete::{self, Scope, suggest};
use jassdoc_index::format::render;
use jassdoc_index::worker::spawn_reload_worker;
use jassdoc_index::{DocHandle, JassDoc};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    jassdoc_index::tracing::init_with(cli.log_format);

    let corpus = cli.corpus;

    let doc = tokio::task::spawn_blocking({
        let corpus = corpus.clone();
        move || JassDoc::load(&corpus)
    })
    .await
    .context("Index build task panicked")?
    .with_context(|| format!("Failed to load corpus {}", corpus.display()))?;

    match cli.command {
        Commands::Lookup { name, scope } => println!("{}", lookup(&doc, scope, &name)),
        Commands::Search {
            input,
            scope,
            limit,
        } => {
            for suggestion in suggest(&doc, scope, &input).into_iter().take(limit) {
                println!("{}", suggestion.label);
            }
        }
        Commands::Watch { interval_secs } => {
            let handle = Arc::new(DocHandle::new(doc));
            let worker = spawn_reload_worker(
                Arc::clone(&handle),
                corpus,
                Duration::from_secs(interval_secs.max(1)),
            );
            tracing::info!("Watching corpus; reading queries from stdin");

            let result = answer_stdin(&handle).await;
            worker.abort();
            result?;
        }
    }

    Ok(())
}

fn lookup(doc: &JassDoc, scope: Scope, name: &str) -> String {
    match autocomplete::lookup(doc, scope, name) {
        Some(entity) => render(entity),
        None => format!("No {} found with the name '{}'", scope, name),
    }
}

/// Each line is `<scope> <name>` for a lookup or `<scope> ?<input>` for suggestions.
async fn answer_stdin(handle: &DocHandle) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (scope, query) = match line.split_once(' ') {
            Some((scope, query)) => match scope.parse::<Scope>() {
                Ok(scope) => (scope, query.trim()),
                Err(_) => (Scope::Entity, line),
            },
            None => (Scope::Entity, line),
        };

        // Each query sees one consistent snapshot, even if a reload lands meanwhile.
        let doc = handle.snapshot();
        if let Some(input) = query.strip_prefix('?') {
            for suggestion in suggest(&doc, scope, input) {
                println!("{}", suggestion.label);
            }
        } else {
            println!("{}", lookup(&doc, scope, query));
        }
    }

    Ok(())
}
