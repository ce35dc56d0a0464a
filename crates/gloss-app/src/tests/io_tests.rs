use std::time::Duration;

use gloss_core::types::AppEvent;
use tokio::io::BufReader;
use tokio::time::timeout;

use crate::io::{parse_line, watcher_io};

#[test]
fn test_parse_commands() {
    match parse_line(":set level II") {
        Some(AppEvent::ConfigUpdate { field, value }) => {
            assert_eq!(field, "level");
            assert_eq!(value, "II");
        }
        other => panic!("Wrong event type: {:?}", other),
    }

    match parse_line(":set vocabulary.paths a.json, b.json") {
        Some(AppEvent::ConfigUpdate { value, .. }) => assert_eq!(value, "a.json, b.json"),
        other => panic!("Wrong event type: {:?}", other),
    }

    assert!(matches!(parse_line(":reload"), Some(AppEvent::ConfigChanged)));
    assert!(parse_line(":dance").is_none());
    assert!(parse_line("   ").is_none());
}

#[test]
fn test_parse_text_keeps_line_verbatim() {
    match parse_line("  밥을 먹었어요 ") {
        Some(AppEvent::RawTextInput { text, .. }) => assert_eq!(text, "  밥을 먹었어요 "),
        other => panic!("Wrong event type: {:?}", other),
    }
}

#[tokio::test]
async fn test_watcher_forwards_lines_until_eof() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let input: &[u8] = "학교\n\n:set lang ru\n먹어요\n".as_bytes();

    watcher_io(BufReader::new(input), tx)
        .await
        .expect("watcher failed");

    let mut events = Vec::new();
    let result = timeout(Duration::from_secs(2), async {
        while let Ok(event) = rx.recv().await {
            events.push(event);
        }
    })
    .await;

    assert!(result.is_ok(), "Timeout - channel never closed!");
    assert_eq!(events.len(), 3);
    assert!(matches!(events[1], AppEvent::ConfigUpdate { .. }));
}

#[tokio::test]
async fn test_watcher_skips_invalid_utf8_line() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let mut input = "학교\n".as_bytes().to_vec();
    input.extend_from_slice(&[0xff, 0xfe, b'\n']);
    input.extend_from_slice("먹어요\r\n".as_bytes());

    watcher_io(BufReader::new(input.as_slice()), tx)
        .await
        .expect("watcher stopped on a bad line");

    let mut texts = Vec::new();
    while let Ok(event) = rx.recv().await {
        if let AppEvent::RawTextInput { text, .. } = event {
            texts.push(text);
        }
    }

    assert_eq!(texts, vec!["학교".to_string(), "먹어요".to_string()]);
}
