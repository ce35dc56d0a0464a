use std::collections::HashMap;
use std::sync::Arc;

use gloss_core::error::DataError;
use serde::Deserialize;

use crate::topik::TopikLevel;

/// Language every word list is expected to carry; used when the target language is missing
pub const FALLBACK_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Expression,
    Particle,
    Other,
}

impl PartOfSpeech {
    /// Parse a POS tag, accepting English and Korean grammar terms. Unknown tags map to `Other`.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "noun" | "n" | "pronoun" | "명사" | "대명사" | "의존명사" => PartOfSpeech::Noun,
            "verb" | "v" | "동사" | "보조동사" => PartOfSpeech::Verb,
            "adjective" | "adj" | "형용사" | "보조형용사" => PartOfSpeech::Adjective,
            "expression" | "expr" | "phrase" | "표현" | "관용구" => PartOfSpeech::Expression,
            "particle" | "조사" => PartOfSpeech::Particle,
            _ => PartOfSpeech::Other,
        }
    }

    /// Verbs, adjectives and expressions are the only entries an inflected form can reach
    pub fn is_predicate(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Verb | PartOfSpeech::Adjective | PartOfSpeech::Expression
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Expression => "expression",
            PartOfSpeech::Particle => "particle",
            PartOfSpeech::Other => "other",
        }
    }
}

/// A vocabulary word in dictionary (citation) form
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyEntry {
    pub dictionary_form: String,
    pub part_of_speech: PartOfSpeech,
    pub level: TopikLevel,
    pub translations: HashMap<String, String>,
}

impl VocabularyEntry {
    pub fn new(
        dictionary_form: impl Into<String>,
        part_of_speech: PartOfSpeech,
        level: TopikLevel,
    ) -> Self {
        Self {
            dictionary_form: dictionary_form.into(),
            part_of_speech,
            level,
            translations: HashMap::new(),
        }
    }

    pub fn with_translation(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(lang.into(), text.into());
        self
    }

    /// Translation for `lang`, falling back to English
    pub fn translation_for(&self, lang: &str) -> Option<&str> {
        self.translations
            .get(lang)
            .or_else(|| self.translations.get(FALLBACK_LANGUAGE))
            .map(String::as_str)
    }
}

/// A word-list record as found in vocabulary files, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVocabularyEntry {
    #[serde(alias = "korean", alias = "dictionary_form")]
    pub word: Option<String>,
    #[serde(alias = "part_of_speech")]
    pub pos: Option<String>,
    pub level: Option<String>,
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

impl RawVocabularyEntry {
    fn validate(self, index: usize) -> Result<VocabularyEntry, DataError> {
        let form = self
            .word
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .ok_or(DataError::MissingDictionaryForm { index })?
            .to_string();

        let level_str = self.level.unwrap_or_default();
        let level = TopikLevel::parse(&level_str).ok_or_else(|| DataError::UnknownLevel {
            form: form.clone(),
            level: level_str.clone(),
        })?;

        let part_of_speech = self
            .pos
            .as_deref()
            .map(PartOfSpeech::parse)
            .unwrap_or(PartOfSpeech::Other);

        Ok(VocabularyEntry {
            dictionary_form: form,
            part_of_speech,
            level,
            translations: self.translations,
        })
    }
}

/// Dictionary form -> entry. Immutable once built; share it behind an `Arc`
/// and build a fresh one when the word lists change.
#[derive(Debug, Default)]
pub struct VocabularyIndex {
    entries: HashMap<String, Arc<VocabularyEntry>>,
    max_key_len: usize,
}

impl VocabularyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw word-list records and index them. Any malformed record fails the whole build.
    pub fn build(raw: impl IntoIterator<Item = RawVocabularyEntry>) -> Result<Self, DataError> {
        let entries = raw
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.validate(index))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_entries(entries)
    }

    /// Index already-typed entries. Duplicate dictionary forms: last write wins.
    pub fn from_entries(
        entries: impl IntoIterator<Item = VocabularyEntry>,
    ) -> Result<Self, DataError> {
        let mut map: HashMap<String, Arc<VocabularyEntry>> = HashMap::new();
        let mut max_key_len = 0;
        let mut duplicates = 0usize;

        for (index, entry) in entries.into_iter().enumerate() {
            if entry.dictionary_form.trim().is_empty() {
                return Err(DataError::MissingDictionaryForm { index });
            }

            max_key_len = max_key_len.max(entry.dictionary_form.chars().count());

            let key = entry.dictionary_form.clone();
            if let Some(previous) = map.insert(key, Arc::new(entry)) {
                duplicates += 1;
                tracing::debug!(
                    "Duplicate vocabulary entry '{}', keeping the later one",
                    previous.dictionary_form
                );
            }
        }

        tracing::info!(
            "Indexed {} vocabulary entries ({} duplicates replaced)",
            map.len(),
            duplicates
        );

        Ok(Self {
            entries: map,
            max_key_len,
        })
    }

    pub fn lookup(&self, dictionary_form: &str) -> Option<&Arc<VocabularyEntry>> {
        self.entries.get(dictionary_form)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest dictionary form, in syllables
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }
}

/// Build an index from raw word-list records
pub fn build_index(
    raw: impl IntoIterator<Item = RawVocabularyEntry>,
) -> Result<VocabularyIndex, DataError> {
    VocabularyIndex::build(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(word: &str, pos: &str, level: &str, en: &str) -> RawVocabularyEntry {
        RawVocabularyEntry {
            word: Some(word.to_string()),
            pos: Some(pos.to_string()),
            level: Some(level.to_string()),
            translations: HashMap::from([("en".to_string(), en.to_string())]),
        }
    }

    #[test]
    fn builds_and_looks_up() {
        let index = VocabularyIndex::build(vec![
            raw("먹다", "verb", "I", "to eat"),
            raw("학교", "명사", "I", "school"),
        ])
        .unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.max_key_len(), 2);
        let entry = index.lookup("먹다").unwrap();
        assert_eq!(entry.part_of_speech, PartOfSpeech::Verb);
        assert_eq!(index.lookup("학교").unwrap().part_of_speech, PartOfSpeech::Noun);
        assert!(index.lookup("먹").is_none());
    }

    #[test]
    fn duplicates_last_write_wins() {
        let index = VocabularyIndex::build(vec![
            raw("눈", "noun", "I", "eye"),
            raw("눈", "noun", "I", "snow"),
        ])
        .unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup("눈").unwrap().translation_for("en"), Some("snow"));
    }

    #[test]
    fn missing_form_is_data_error() {
        let mut blank = raw("  ", "noun", "I", "nothing");
        let result = VocabularyIndex::build(vec![raw("가다", "verb", "I", "to go"), blank.clone()]);
        assert_eq!(result.unwrap_err(), DataError::MissingDictionaryForm { index: 1 });

        blank.word = None;
        assert!(VocabularyIndex::build(vec![blank]).is_err());
    }

    #[test]
    fn unknown_level_is_data_error() {
        let result = VocabularyIndex::build(vec![raw("가다", "verb", "expert", "to go")]);
        assert!(matches!(result, Err(DataError::UnknownLevel { .. })));
    }

    #[test]
    fn unknown_pos_becomes_other() {
        let index = VocabularyIndex::build(vec![raw("아주", "부사", "I", "very")]).unwrap();
        assert_eq!(index.lookup("아주").unwrap().part_of_speech, PartOfSpeech::Other);
    }

    #[test]
    fn translation_falls_back_to_english() {
        let entry = VocabularyEntry::new("가다", PartOfSpeech::Verb, TopikLevel::I)
            .with_translation("en", "to go")
            .with_translation("ru", "идти");
        assert_eq!(entry.translation_for("ru"), Some("идти"));
        assert_eq!(entry.translation_for("ja"), Some("to go"));
    }

    #[test]
    fn rebuilding_leaves_previous_index_untouched() {
        let first = VocabularyIndex::build(vec![raw("가다", "verb", "I", "to go")]).unwrap();
        let second = VocabularyIndex::build(vec![raw("오다", "verb", "I", "to come")]).unwrap();
        assert!(first.lookup("가다").is_some());
        assert!(first.lookup("오다").is_none());
        assert!(second.lookup("가다").is_none());
    }
}
