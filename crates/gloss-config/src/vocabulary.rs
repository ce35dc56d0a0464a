use serde::{Deserialize, Serialize};

fn default_use_embedded() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Load the starter word list compiled into the binary
    #[serde(default = "default_use_embedded")]
    pub use_embedded: bool,
    /// Extra JSON word lists, merged in order (later files win)
    #[serde(default)]
    pub paths: Vec<String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            use_embedded: default_use_embedded(),
            paths: vec![],
        }
    }
}
