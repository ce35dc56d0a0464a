use std::sync::Arc;

use gloss_core::types::{AnnotatedText, AppEvent};
use kanal::AsyncSender;

use crate::state::AppState;

pub async fn handle_text_input(
    state: Arc<AppState>,
    text: String,
    output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let snapshot = state.snapshot().await;

    if !snapshot.enabled {
        output_tx
            .send(AppEvent::ShowAnnotations(AnnotatedText {
                text,
                annotations: vec![],
            }))
            .await?;
        return Ok(());
    }

    let config = match snapshot.config {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Refusing to annotate: {}", e);
            output_tx.send(AppEvent::StatusUpdate(e.to_string())).await?;
            return Ok(());
        }
    };

    let annotations = match state.processor.annotate(&text, &snapshot.index, &config) {
        Ok(spans) => spans.iter().map(|span| span.to_display()).collect::<Vec<_>>(),
        Err(e) => {
            tracing::warn!("Refusing to annotate: {}", e);
            output_tx.send(AppEvent::StatusUpdate(e.to_string())).await?;
            return Ok(());
        }
    };

    tracing::debug!("Annotated {} spans", annotations.len());
    output_tx
        .send(AppEvent::ShowAnnotations(AnnotatedText { text, annotations }))
        .await?;

    Ok(())
}
