use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::core::launch_options::ConfigOverrides;
use crate::engine::interaction::profile::InteractionProfile;

pub const DEFAULT_CONFIG_PATH: &str = "default.viewer.json";
pub const DEFAULT_MODEL_PATH: &str = "models/Duck.glb";

const MODEL_EXTENSIONS: &[&str] = &["glb", "gltf"];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("model path is empty")]
    EmptyModelPath,
    #[error("unsupported model format for '{0}', expected a lowercase .glb or .gltf extension")]
    UnsupportedModelFormat(String),
    #[error("unknown interaction profile '{0}', expected 'direct' or 'entity'")]
    UnknownProfile(String),
}

/// Optional scene elements around the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneFeatures {
    pub backdrop: bool,
    pub blob_shadow: bool,
    pub title_overlay: bool,
    pub animations: bool,
}

impl Default for SceneFeatures {
    fn default() -> Self {
        Self {
            backdrop: true,
            blob_shadow: true,
            title_overlay: true,
            animations: true,
        }
    }
}

/// Viewer configuration, loaded from a `*.viewer.json` asset and then
/// adjusted by launch overrides.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Asset, TypePath)]
#[serde(default)]
pub struct ViewerConfig {
    /// glTF / GLB path relative to the asset root.
    pub model_path: String,
    pub title: String,
    pub profile: InteractionProfile,
    pub scene: SceneFeatures,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            title: String::new(),
            profile: InteractionProfile::default(),
            scene: SceneFeatures::default(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_model_path(&self.model_path)
    }

    /// Apply launch overrides. Invalid values are logged and skipped so a
    /// bad query parameter never replaces a working configuration.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(model_path) = &overrides.model_path {
            match validate_model_path(model_path) {
                Ok(()) => self.model_path = model_path.clone(),
                Err(err) => warn!("Ignoring model override: {}", err),
            }
        }

        if let Some(title) = &overrides.title {
            self.title = title.clone();
        }

        if let Some(profile) = &overrides.profile {
            match profile.parse() {
                Ok(profile) => self.profile = profile,
                Err(err) => warn!("Ignoring profile override: {}", err),
            }
        }
    }
}

/// The extension is matched case-sensitively, the same way the asset
/// server picks a loader, so `Duck.GLB` is rejected up front.
fn validate_model_path(path: &str) -> Result<(), ConfigError> {
    let path = path.trim();
    if path.is_empty() {
        return Err(ConfigError::EmptyModelPath);
    }

    match path.rsplit_once('.') {
        Some((_, extension)) if MODEL_EXTENSIONS.contains(&extension) => Ok(()),
        _ => Err(ConfigError::UnsupportedModelFormat(path.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: ViewerConfig =
            serde_json::from_str(r#"{ "model_path": "models/Fox.glb" }"#).unwrap();
        assert_eq!(config.model_path, "models/Fox.glb");
        assert_eq!(config.profile, InteractionProfile::Entity);
        assert_eq!(config.scene, SceneFeatures::default());
        assert!(config.title.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config: ViewerConfig = serde_json::from_str(
            r#"{
                "model_path": "models/Helmet.gltf",
                "title": "Helmet",
                "profile": "direct",
                "scene": { "backdrop": false, "animations": false }
            }"#,
        )
        .unwrap();
        assert_eq!(config.profile, InteractionProfile::Direct);
        assert!(!config.scene.backdrop);
        assert!(config.scene.blob_shadow);
        assert!(!config.scene.animations);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_unknown_profile_rejected_by_serde() {
        let result = serde_json::from_str::<ViewerConfig>(r#"{ "profile": "orbit" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_model_path() {
        assert_eq!(validate_model_path("models/Duck.glb"), Ok(()));
        assert_eq!(
            validate_model_path("Duck.GLB"),
            Err(ConfigError::UnsupportedModelFormat("Duck.GLB".to_string()))
        );
        assert_eq!(validate_model_path("  "), Err(ConfigError::EmptyModelPath));
        assert_eq!(
            validate_model_path("models/duck.obj"),
            Err(ConfigError::UnsupportedModelFormat("models/duck.obj".to_string()))
        );
        assert!(validate_model_path("models/duck").is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = ViewerConfig::default();
        config.apply_overrides(&ConfigOverrides {
            config_path: None,
            model_path: Some("models/Fox.glb".to_string()),
            title: Some("Fox".to_string()),
            profile: Some("direct".to_string()),
        });
        assert_eq!(config.model_path, "models/Fox.glb");
        assert_eq!(config.title, "Fox");
        assert_eq!(config.profile, InteractionProfile::Direct);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut config = ViewerConfig::default();
        config.apply_overrides(&ConfigOverrides {
            config_path: None,
            model_path: Some("notes.txt".to_string()),
            title: None,
            profile: Some("turntable".to_string()),
        });
        assert_eq!(config, ViewerConfig::default());
    }
}
