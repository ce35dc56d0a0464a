use std::path::Path;

use gloss_core::error::LoadError;
use serde::Deserialize;

use crate::vocabulary::RawVocabularyEntry;

/// Word-list file layouts: a bare array of entries, or an object whose
/// `level` applies to every entry that does not carry its own
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VocabularyFile {
    Leveled {
        #[serde(default)]
        level: Option<String>,
        words: Vec<RawVocabularyEntry>,
    },
    Bare(Vec<RawVocabularyEntry>),
}

pub struct VocabularyLoader;

impl VocabularyLoader {
    /// Load the starter list compiled into the crate
    pub fn load_embedded() -> Result<Vec<RawVocabularyEntry>, LoadError> {
        let json = include_str!("../data/topik_starter.json");
        tracing::info!("Loading embedded vocabulary...");
        let entries = Self::parse_str(json)?;
        tracing::info!("Loaded {} embedded vocabulary entries", entries.len());
        Ok(entries)
    }

    /// Load a word list from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Vec<RawVocabularyEntry>, LoadError> {
        tracing::info!("Loading vocabulary from file: {}", path.display());
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        let json = std::fs::read_to_string(path)?;
        let entries = Self::parse_str(&json)?;
        tracing::info!("Loaded {} vocabulary entries from file", entries.len());
        Ok(entries)
    }

    pub fn parse_str(json: &str) -> Result<Vec<RawVocabularyEntry>, LoadError> {
        let file: VocabularyFile =
            serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

        Ok(match file {
            VocabularyFile::Bare(words) => words,
            VocabularyFile::Leveled { level, words } => words
                .into_iter()
                .map(|mut entry| {
                    if entry.level.is_none() {
                        entry.level = level.clone();
                    }
                    entry
                })
                .collect(),
        })
    }

    /// Concatenate word lists in order. Index building keeps the last entry per
    /// dictionary form, so later lists override earlier ones.
    pub fn merge(
        base: Vec<RawVocabularyEntry>,
        additional: Vec<RawVocabularyEntry>,
    ) -> Vec<RawVocabularyEntry> {
        let mut merged = base;
        merged.extend(additional);
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::VocabularyIndex;

    #[test]
    fn embedded_list_builds() {
        let entries = VocabularyLoader::load_embedded().unwrap();
        let index = VocabularyIndex::build(entries).unwrap();
        assert!(index.lookup("먹다").is_some());
        assert!(index.lookup("공부하다").is_some());
    }

    #[test]
    fn parses_bare_array() {
        let entries = VocabularyLoader::parse_str(
            r#"[{ "korean": "물", "pos": "noun", "level": "I",
                 "translations": { "en": "water" } }]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word.as_deref(), Some("물"));
    }

    #[test]
    fn file_level_applies_to_unleveled_entries() {
        let entries = VocabularyLoader::parse_str(
            r#"{ "level": "II", "words": [
                { "word": "경제", "pos": "noun" },
                { "word": "물", "pos": "noun", "level": "I" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(entries[0].level.as_deref(), Some("II"));
        assert_eq!(entries[1].level.as_deref(), Some("I"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            VocabularyLoader::parse_str("{ not json"),
            Err(LoadError::ParseError(_))
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        assert!(matches!(
            VocabularyLoader::load_from_file(Path::new("/nonexistent/words.json")),
            Err(LoadError::FileNotFound(_))
        ));
    }

    #[test]
    fn later_lists_override() {
        let base = VocabularyLoader::parse_str(
            r#"[{ "word": "눈", "pos": "noun", "level": "I", "translations": { "en": "eye" } }]"#,
        )
        .unwrap();
        let extra = VocabularyLoader::parse_str(
            r#"[{ "word": "눈", "pos": "noun", "level": "I", "translations": { "en": "snow" } }]"#,
        )
        .unwrap();

        let index = VocabularyIndex::build(VocabularyLoader::merge(base, extra)).unwrap();
        assert_eq!(index.lookup("눈").unwrap().translation_for("en"), Some("snow"));
    }
}
