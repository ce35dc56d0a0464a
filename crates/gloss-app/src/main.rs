use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use gloss_config::Settings;
use gloss_core::types::AppEvent;
use kanal::AsyncReceiver;
use tokio::io::BufReader;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod events;
pub mod io;
pub mod render;
pub mod state;

#[cfg(test)]
mod tests;

use self::state::AppState;

/// Annotate Korean text read from stdin with dictionary-form glosses
#[derive(Parser, Debug)]
#[command(name = "gloss", version)]
struct Args {
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Additional vocabulary files (repeatable)
    #[arg(long = "vocab")]
    vocab: Vec<String>,

    /// Level filter: I, II or ALL
    #[arg(long)]
    level: Option<String>,

    /// Target language for glosses
    #[arg(long)]
    lang: Option<String>,

    /// Skip the embedded starter word list
    #[arg(long)]
    no_embedded: bool,

    /// Emit one JSON object per line instead of inline glosses
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = load_settings(&args)?;
    let json = args.json;

    let state = Arc::new(AppState::new(settings));
    state.rebuild_index().await?;

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
        }
    };

    run(state, json, shutdown).await
}

fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::new(),
    };

    if let Some(level) = &args.level {
        settings.apply_update("level", level)?;
    }
    if let Some(lang) = &args.lang {
        settings.apply_update("target_language", lang)?;
    }
    if args.no_embedded {
        settings.vocabulary.use_embedded = false;
    }
    settings.vocabulary.paths.extend(args.vocab.iter().cloned());

    Ok(settings)
}

pub async fn run(
    state: Arc<AppState>,
    json: bool,
    shutdown: impl std::future::Future<Output = ()>,
) -> anyhow::Result<()> {
    let (input_tx, input_rx) = kanal::unbounded_async::<AppEvent>();
    let (output_tx, output_rx) = kanal::unbounded_async::<AppEvent>();

    let watcher = tokio::spawn(async move {
        let stdin = BufReader::new(tokio::io::stdin());
        if let Err(e) = io::watcher_io(stdin, input_tx).await {
            tracing::error!("input watcher exited: {e}");
        }
    });

    let loop_state = Arc::clone(&state);
    let server = tokio::spawn(async move {
        if let Err(e) = events::event_loop(loop_state, input_rx, output_tx).await {
            tracing::error!("event_loop exited: {e}");
        }
    });

    let output = tokio::spawn(output_loop(state, output_rx, json));

    // The pipeline drains on its own at EOF: watcher drops the input sender,
    // the event loop drops the output sender, the output task finishes.
    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            watcher.abort();
            server.abort();
        }
        result = output => {
            match result {
                Ok(Ok(())) => tracing::debug!("output task finished"),
                Ok(Err(e)) => tracing::error!("output task failed: {e}"),
                Err(e) => tracing::error!("output task panicked: {e}"),
            }
        }
    }

    Ok(())
}

/// Print annotated blocks to stdout and status messages to the log
async fn output_loop(
    state: Arc<AppState>,
    output_rx: AsyncReceiver<AppEvent>,
    json: bool,
) -> anyhow::Result<()> {
    while let Ok(event) = output_rx.recv().await {
        match event {
            AppEvent::ShowAnnotations(annotated) => {
                let line = if json {
                    render::render_json(&annotated)?
                } else {
                    let settings = state.settings.read().await;
                    render::render_inline(&annotated, &settings)
                };
                println!("{line}");
            }
            AppEvent::StatusUpdate(status) => {
                tracing::info!("{status}");
            }
            _ => {}
        }
    }

    Ok(())
}
