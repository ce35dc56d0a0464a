use std::sync::Arc;

use gloss_core::types::AppEvent;
use kanal::AsyncSender;

use crate::state::AppState;

pub async fn handle_config_update(
    state: Arc<AppState>,
    field: &str,
    value: &str,
    output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let result = {
        let mut settings = state.settings.write().await;
        settings.apply_update(field, value)
    };

    match result {
        Ok(true) => handle_config_changed(state, output_tx).await,
        Ok(false) => {
            output_tx
                .send(AppEvent::StatusUpdate(format!("{field} = {value}")))
                .await?;
            Ok(())
        }
        Err(e) => {
            tracing::warn!("Rejected setting update: {}", e);
            output_tx.send(AppEvent::StatusUpdate(e.to_string())).await?;
            Ok(())
        }
    }
}

/// Rebuild the index for the new settings. A failed rebuild keeps the old index.
pub async fn handle_config_changed(
    state: Arc<AppState>,
    output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let status = match state.rebuild_index().await {
        Ok(count) => format!("Vocabulary reloaded: {count} entries"),
        Err(e) => {
            tracing::error!("Index rebuild failed, keeping previous index: {}", e);
            format!("Vocabulary reload failed: {e}")
        }
    };

    output_tx.send(AppEvent::StatusUpdate(status)).await?;
    Ok(())
}
