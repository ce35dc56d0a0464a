/// Rejected annotation settings. Annotating with these would render wrong glosses,
/// so the call is refused instead of degraded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Unknown level: {0} (expected I, II or ALL)")]
    UnknownLevel(String),

    #[error("Unsupported target language: {0}")]
    UnsupportedLanguage(String),
}

/// Malformed vocabulary records supplied to an index build
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("Entry #{index} has no dictionary form")]
    MissingDictionaryForm { index: usize },

    #[error("Entry '{form}' has unknown level '{level}'")]
    UnknownLevel { form: String, level: String },
}

/// Refusal of an annotation call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

/// Failure while reading vocabulary files
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid data: {0}")]
    InvalidData(#[from] DataError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
