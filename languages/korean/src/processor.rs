use std::path::Path;

use gloss_core::error::{CoreError, LoadError};
use gloss_core::language::LanguageProcessor;
use gloss_core::preprocess::{DefaultPreprocessor, Preprocessor};

use crate::loader::VocabularyLoader;
use crate::matcher::{self, AnnotateConfig, AnnotationSpan};
use crate::normalizer::KoreanNormalizer;
use crate::vocabulary::{RawVocabularyEntry, VocabularyIndex};

/// Korean language processor
pub struct KoreanProcessor {
    preprocessor: DefaultPreprocessor,
    normalizer: KoreanNormalizer,
}

impl Default for KoreanProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl KoreanProcessor {
    pub fn new() -> Self {
        Self {
            preprocessor: DefaultPreprocessor,
            normalizer: KoreanNormalizer::new(),
        }
    }

    /// Build a fresh index from the embedded list (optional) and additional files.
    /// Unreadable files are skipped with a warning; malformed entries fail the build.
    pub fn build_index(
        &self,
        use_embedded: bool,
        additional_paths: &[String],
    ) -> Result<VocabularyIndex, LoadError> {
        let mut raw: Vec<RawVocabularyEntry> = if use_embedded {
            VocabularyLoader::load_embedded()?
        } else {
            Vec::new()
        };

        for path in additional_paths {
            match VocabularyLoader::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional vocabulary from: {}", path);
                    raw = VocabularyLoader::merge(raw, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load vocabulary from {}: {}", path, e);
                }
            }
        }

        if raw.is_empty() {
            tracing::warn!("No vocabulary loaded, nothing will be annotated");
        }

        Ok(VocabularyIndex::build(raw)?)
    }

    /// Annotate already-normalized text
    pub fn annotate(
        &self,
        text: &str,
        index: &VocabularyIndex,
        config: &AnnotateConfig,
    ) -> Result<Vec<AnnotationSpan>, CoreError> {
        matcher::annotate_with(text, index, config, &self.normalizer)
    }
}

impl LanguageProcessor for KoreanProcessor {
    fn language_code(&self) -> &str {
        "ko"
    }

    fn normalize(&self, text: &str) -> String {
        self.preprocessor.process(text)
    }
}
