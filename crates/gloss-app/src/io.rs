use gloss_core::types::{AppEvent, TextSource};
use kanal::AsyncSender;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Feed input lines to the event loop until EOF.
/// Text lines become `RawTextInput`; `:set <field> <value>` and `:reload` are commands.
/// A line that is not valid UTF-8 is skipped, the session goes on.
pub async fn watcher_io<R>(mut reader: R, event_tx: AsyncSender<AppEvent>) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\n', '\r']),
            Err(e) => {
                tracing::warn!("Skipping input line that is not valid UTF-8: {}", e);
                continue;
            }
        };

        let Some(event) = parse_line(line) else {
            continue;
        };
        event_tx.send(event).await?;
    }

    tracing::debug!("Input reached EOF");
    Ok(())
}

pub fn parse_line(line: &str) -> Option<AppEvent> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(command) = trimmed.strip_prefix(':') {
        let mut parts = command.splitn(3, char::is_whitespace);
        return match (parts.next(), parts.next(), parts.next()) {
            (Some("set"), Some(field), Some(value)) => Some(AppEvent::ConfigUpdate {
                field: field.to_string(),
                value: value.trim().to_string(),
            }),
            (Some("reload"), None, None) => Some(AppEvent::ConfigChanged),
            _ => {
                tracing::warn!("Unknown command: {}", trimmed);
                None
            }
        };
    }

    Some(AppEvent::RawTextInput {
        text: line.to_string(),
        source: TextSource::Stdin,
    })
}
