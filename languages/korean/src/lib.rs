pub mod hangul;
pub mod loader;
pub mod matcher;
pub mod normalizer;
pub mod particles;
pub mod processor;
pub mod topik;
pub mod vocabulary;

pub use loader::VocabularyLoader;
pub use matcher::{AnnotateConfig, AnnotationSpan, annotate};
pub use normalizer::{KoreanNormalizer, extract_stems_for_lookup};
pub use particles::is_particle;
pub use processor::KoreanProcessor;
pub use topik::{LevelFilter, TopikLevel};
pub use vocabulary::{
    PartOfSpeech, RawVocabularyEntry, VocabularyEntry, VocabularyIndex, build_index,
};
