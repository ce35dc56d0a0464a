use serde::Serialize;

#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigChanged,
    ConfigUpdate {
        field: String,
        value: String,
    },
    TextInput(String),
    RawTextInput {
        text: String,
        source: TextSource,
    },
    ShowAnnotations(AnnotatedText),
    StatusUpdate(String),
}

#[derive(Debug, Clone)]
pub enum TextSource {
    Stdin,
    Manual,
}

/// One scanned block, ready for a renderer
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedText {
    pub text: String,
    pub annotations: Vec<DisplayAnnotation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DisplayAnnotation {
    pub start: usize,
    pub end: usize,
    pub surface: String,
    pub dictionary_form: String,
    pub translation: String,
    pub level: String,
}
