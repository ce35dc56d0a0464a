//! Span matcher: scans text for vocabulary-bearing runs and emits sorted,
//! non-overlapping annotation spans.

use std::sync::Arc;

use gloss_core::error::{ConfigurationError, CoreError};
use gloss_core::language::{StemCandidate, StemExtractor};
use gloss_core::types::DisplayAnnotation;

use crate::hangul::hangul_runs;
use crate::normalizer::{FUSED_ENDINGS, HADA_CONTRACTIONS, KoreanNormalizer, REGULAR_ENDINGS};
use crate::particles::is_particle;
use crate::topik::LevelFilter;
use crate::vocabulary::{PartOfSpeech, VocabularyEntry, VocabularyIndex};

/// Target languages word lists are translated into
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "ru", "ja", "zh", "vi", "es", "fr", "de", "id", "th", "mn", "uz",
];

/// The part of the user settings the matcher depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateConfig {
    pub target_language: String,
    pub level: LevelFilter,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            target_language: "en".to_string(),
            level: LevelFilter::All,
        }
    }
}

impl AnnotateConfig {
    pub fn new(target_language: impl Into<String>, level: LevelFilter) -> Self {
        Self {
            target_language: target_language.into(),
            level,
        }
    }

    /// Build from raw settings strings, rejecting unknown values
    pub fn parse(target_language: &str, level: &str) -> Result<Self, ConfigurationError> {
        let config = Self::new(target_language.trim().to_lowercase(), level.parse()?);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if SUPPORTED_LANGUAGES.contains(&self.target_language.as_str()) {
            Ok(())
        } else {
            Err(ConfigurationError::UnsupportedLanguage(self.target_language.clone()))
        }
    }
}

/// One annotated stretch of the scanned text. Offsets are char (codepoint)
/// offsets into that text, half-open.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationSpan {
    pub start: usize,
    pub end: usize,
    /// Exact matched substring
    pub surface: String,
    /// The lookup stem that hit the index
    pub stem: String,
    pub entry: Arc<VocabularyEntry>,
    pub translation: String,
}

impl AnnotationSpan {
    pub fn to_display(&self) -> DisplayAnnotation {
        DisplayAnnotation {
            start: self.start,
            end: self.end,
            surface: self.surface.clone(),
            dictionary_form: self.entry.dictionary_form.clone(),
            translation: self.translation.clone(),
            level: self.entry.level.as_str().to_string(),
        }
    }
}

/// Annotate `text` against `index`
pub fn annotate(
    text: &str,
    index: &VocabularyIndex,
    config: &AnnotateConfig,
) -> Result<Vec<AnnotationSpan>, CoreError> {
    annotate_with(text, index, config, &KoreanNormalizer)
}

/// [`annotate`] with a caller-supplied stem extractor
pub fn annotate_with<E: StemExtractor + ?Sized>(
    text: &str,
    index: &VocabularyIndex,
    config: &AnnotateConfig,
    extractor: &E,
) -> Result<Vec<AnnotationSpan>, CoreError> {
    config.validate()?;

    let mut spans = Vec::new();
    if index.is_empty() || text.is_empty() {
        return Ok(spans);
    }

    // A stem is never longer than its window minus the stripped suffix,
    // so no window past this length can hit the index
    let max_window = index.max_key_len() + longest_suffix_len();

    for (offset, chars, hangul) in hangul_runs(text) {
        if hangul {
            scan_run(offset, &chars, index, config, extractor, max_window, &mut spans);
        }
    }

    tracing::trace!("Annotated {} spans in {} chars", spans.len(), text.chars().count());
    Ok(spans)
}

fn longest_suffix_len() -> usize {
    let regular = REGULAR_ENDINGS.iter().map(|e| e.text.chars().count());
    let hada = HADA_CONTRACTIONS.iter().map(|(s, _)| s.chars().count());
    // the fused syllable belongs to the window too
    let fused = FUSED_ENDINGS.iter().map(|(_, tail)| tail.chars().count() + 1);
    regular.chain(hada).chain(fused).max().unwrap_or(0)
}

fn scan_run<E: StemExtractor + ?Sized>(
    offset: usize,
    chars: &[char],
    index: &VocabularyIndex,
    config: &AnnotateConfig,
    extractor: &E,
    max_window: usize,
    spans: &mut Vec<AnnotationSpan>,
) {
    let mut pos = 0;

    while pos < chars.len() {
        let longest = max_window.min(chars.len() - pos);

        // Longest window first; the first hit at this position wins
        let found = (1..=longest).rev().find_map(|len| {
            let surface: String = chars[pos..pos + len].iter().collect();
            match_window(&surface, index, config, extractor).map(|hit| (len, surface, hit))
        });

        match found {
            Some((len, surface, (stem, entry))) => {
                let translation = resolve_translation(&entry, &config.target_language, &surface);
                spans.push(AnnotationSpan {
                    start: offset + pos,
                    end: offset + pos + len,
                    surface,
                    stem,
                    entry,
                    translation,
                });
                pos += len;
            }
            None => pos += 1,
        }
    }
}

/// A candidate that hit the index
#[derive(Clone, Copy)]
struct Hit<'a> {
    stem: &'a str,
    entry: &'a Arc<VocabularyEntry>,
}

fn match_window<E: StemExtractor + ?Sized>(
    surface: &str,
    index: &VocabularyIndex,
    config: &AnnotateConfig,
    extractor: &E,
) -> Option<(String, Arc<VocabularyEntry>)> {
    if is_particle(surface) {
        return None;
    }

    let candidates = extractor.extract(surface);
    let hit = strict_pass(&candidates, index, config)
        .or_else(|| lenient_pass(&candidates, index, config))?;

    Some((hit.stem.to_string(), Arc::clone(hit.entry)))
}

/// Honours `verb_only`: a constrained stem only matches verbs, adjectives and expressions
fn strict_pass<'a>(
    candidates: &'a [StemCandidate],
    index: &'a VocabularyIndex,
    config: &AnnotateConfig,
) -> Option<Hit<'a>> {
    longest_hit(candidates.iter().filter_map(|candidate| {
        admissible(candidate, index, config)
            .filter(|hit| !candidate.verb_only || hit.entry.part_of_speech.is_predicate())
    }))
}

/// Ignores `verb_only`, for word lists with missing or wrong POS tags.
/// Only consulted when the strict pass found nothing. `strict_only`
/// candidates never take part.
fn lenient_pass<'a>(
    candidates: &'a [StemCandidate],
    index: &'a VocabularyIndex,
    config: &AnnotateConfig,
) -> Option<Hit<'a>> {
    longest_hit(
        candidates
            .iter()
            .filter(|candidate| !candidate.strict_only)
            .filter_map(|candidate| admissible(candidate, index, config)),
    )
}

/// Index hit for `candidate`, excluding particles and levels outside the filter
fn admissible<'a>(
    candidate: &'a StemCandidate,
    index: &'a VocabularyIndex,
    config: &AnnotateConfig,
) -> Option<Hit<'a>> {
    if is_particle(&candidate.stem) {
        return None;
    }

    let entry = index.lookup(&candidate.stem)?;
    if entry.part_of_speech == PartOfSpeech::Particle || !config.level.admits(entry.level) {
        return None;
    }

    Some(Hit {
        stem: &candidate.stem,
        entry,
    })
}

/// Longest stem wins; equal lengths keep candidate order
fn longest_hit<'a>(hits: impl Iterator<Item = Hit<'a>>) -> Option<Hit<'a>> {
    hits.fold(None, |best: Option<Hit<'a>>, hit| match best {
        Some(b) if b.stem.chars().count() >= hit.stem.chars().count() => Some(b),
        _ => Some(hit),
    })
}

/// Target language, then English, then the surface text itself
fn resolve_translation(entry: &VocabularyEntry, lang: &str, surface: &str) -> String {
    entry.translation_for(lang).unwrap_or(surface).to_string()
}
