use crate::EditorError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "sitebuilder.config.json";

pub const DEFAULT_IMAGE_PLACEHOLDER: &str =
    "https://placehold.co/600x400/e2e8f0/cbd5e0?text=Your+Image";

/// Builder configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Open sessions with the starter heading/paragraph/button
    #[serde(default = "default_seed_document")]
    pub seed_document: bool,

    /// Name hashed into the id seed
    #[serde(default = "default_session_name")]
    pub session_name: String,

    /// Image shown for Image instances without a source
    #[serde(default = "default_image_placeholder")]
    pub image_placeholder: String,
}

fn default_seed_document() -> bool {
    true
}

fn default_session_name() -> String {
    "sitebuilder".to_string()
}

fn default_image_placeholder() -> String {
    DEFAULT_IMAGE_PLACEHOLDER.to_string()
}

impl EditorConfig {
    /// Load config from a directory, falling back to defaults when the
    /// file does not exist
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, EditorError> {
        let config_path = Self::path_in(dir);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_json(&content)
        } else {
            Ok(EditorConfig::default())
        }
    }

    pub fn from_json(content: &str) -> Result<Self, EditorError> {
        let config: EditorConfig = serde_json::from_str(content)?;
        if config.session_name.trim().is_empty() {
            return Err(EditorError::Config("sessionName must not be empty".to_string()));
        }
        Ok(config)
    }

    pub fn path_in(dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(DEFAULT_CONFIG_NAME)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            seed_document: default_seed_document(),
            session_name: default_session_name(),
            image_placeholder: default_image_placeholder(),
        }
    }
}
