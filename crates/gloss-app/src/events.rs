use std::sync::Arc;

use gloss_core::language::LanguageProcessor;
use gloss_core::types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};

use crate::state::AppState;

pub mod config_update;
pub mod text_input;

use config_update::{handle_config_changed, handle_config_update};
use text_input::handle_text_input;

/// App's main loop. Returns once every input sender is gone.
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    output_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let Ok(event) = input_rx.recv().await else {
            tracing::debug!("[EVENT_LOOP] Input closed");
            return Ok(());
        };

        tracing::trace!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        handle_events(state.clone(), &output_tx, event).await?;
    }
}

async fn handle_events(
    state: Arc<AppState>,
    output_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::RawTextInput { text, source } => {
            tracing::debug!("Raw text from {:?}: {} chars", source, text.len());
            let normalized = state.processor.normalize(&text);
            handle_text_input(state, normalized, output_tx).await?;
        }
        AppEvent::TextInput(text) => {
            handle_text_input(state, text, output_tx).await?;
        }
        AppEvent::ConfigUpdate { field, value } => {
            handle_config_update(state, &field, &value, output_tx).await?;
        }
        AppEvent::ConfigChanged => {
            handle_config_changed(state, output_tx).await?;
        }
        AppEvent::ShowAnnotations(_) | AppEvent::StatusUpdate(_) => {
            // Output-only events, ignore in backend
        }
    }

    Ok(())
}
