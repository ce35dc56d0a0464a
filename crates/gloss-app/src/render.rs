use gloss_config::Settings;
use gloss_core::types::AnnotatedText;

/// Inline rendering: each annotated stretch is followed by its gloss,
/// `먹었어요(eat)`, or `[먹었어요](eat)` when highlighting is on
pub fn render_inline(annotated: &AnnotatedText, settings: &Settings) -> String {
    let chars: Vec<char> = annotated.text.chars().collect();
    let mut out = String::with_capacity(annotated.text.len() * 2);
    let mut pos = 0;

    for annotation in &annotated.annotations {
        // spans are sorted and disjoint, anything else is a matcher bug
        if annotation.start < pos || annotation.end > chars.len() {
            tracing::warn!("Skipping out-of-order annotation {:?}", annotation);
            continue;
        }

        out.extend(&chars[pos..annotation.start]);
        let surface: String = chars[annotation.start..annotation.end].iter().collect();
        if settings.show_highlight {
            out.push_str(&format!("[{surface}]({})", annotation.translation));
        } else {
            out.push_str(&format!("{surface}({})", annotation.translation));
        }
        pos = annotation.end;
    }

    out.extend(&chars[pos..]);
    out
}

/// One JSON object per scanned block
pub fn render_json(annotated: &AnnotatedText) -> anyhow::Result<String> {
    Ok(serde_json::to_string(annotated)?)
}
