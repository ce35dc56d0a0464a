use std::sync::Arc;

use gloss_config::Settings;
use gloss_core::error::ConfigurationError;
use gloss_lang_korean::{AnnotateConfig, KoreanProcessor, VocabularyIndex};
use tokio::sync::RwLock;

pub struct AppState {
    pub settings: RwLock<Settings>,
    /// Active index. Scans clone the `Arc`; rebuilds swap in a new one.
    pub index: RwLock<Arc<VocabularyIndex>>,
    pub processor: KoreanProcessor,
}

/// What one scan needs, captured under the locks and used after releasing them
pub struct ScanSnapshot {
    pub index: Arc<VocabularyIndex>,
    pub config: Result<AnnotateConfig, ConfigurationError>,
    pub enabled: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
            index: RwLock::new(Arc::new(VocabularyIndex::new())),
            processor: KoreanProcessor::new(),
        }
    }

    pub async fn snapshot(&self) -> ScanSnapshot {
        let (config, enabled) = {
            let settings = self.settings.read().await;
            (annotate_config(&settings), settings.enabled)
        };
        let index = Arc::clone(&*self.index.read().await);

        ScanSnapshot {
            index,
            config,
            enabled,
        }
    }

    /// Build a new index from the current settings and swap it in.
    /// Scans already holding the old one finish against it.
    pub async fn rebuild_index(&self) -> anyhow::Result<usize> {
        let (use_embedded, paths) = {
            let settings = self.settings.read().await;
            (settings.vocabulary.use_embedded, settings.vocabulary.paths.clone())
        };

        let index = tokio::task::spawn_blocking(move || {
            KoreanProcessor::new().build_index(use_embedded, &paths)
        })
        .await??;

        let count = index.len();
        *self.index.write().await = Arc::new(index);
        tracing::info!("Vocabulary index swapped ({} entries)", count);

        Ok(count)
    }
}

pub fn annotate_config(settings: &Settings) -> Result<AnnotateConfig, ConfigurationError> {
    AnnotateConfig::parse(&settings.target_language, &settings.level)
}
