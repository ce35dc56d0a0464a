/// Text processing interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ko", "ja", ...)
    fn language_code(&self) -> &str;

    /// Normalize text before scanning (Unicode composition, stray control characters)
    fn normalize(&self, text: &str) -> String;
}

/// Recovers lookup stems from an inflected surface token
pub trait StemExtractor: Send + Sync {
    /// Ordered, deduplicated candidates. Identity first; order carries no ranking.
    fn extract(&self, token: &str) -> Vec<StemCandidate>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemCandidate {
    pub stem: String,
    /// Only valid against verb, adjective or expression entries
    pub verb_only: bool,
    /// Never relaxed by a lenient lookup: only a predicate entry confirms it
    pub strict_only: bool,
}

impl StemCandidate {
    pub fn new(stem: impl Into<String>, verb_only: bool) -> Self {
        Self {
            stem: stem.into(),
            verb_only,
            strict_only: false,
        }
    }

    /// A predicate-only reading too speculative to fall back on
    pub fn strict(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            verb_only: true,
            strict_only: true,
        }
    }

    /// Merge the constraints of the same stem derived twice; the looser one wins
    pub fn relax_with(&mut self, other: &StemCandidate) {
        self.verb_only &= other.verb_only;
        self.strict_only &= other.strict_only;
    }
}
