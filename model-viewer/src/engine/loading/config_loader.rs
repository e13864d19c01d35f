use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::viewer_config::{DEFAULT_CONFIG_PATH, ViewerConfig};
use crate::engine::core::launch_options::ConfigOverrides;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<ViewerConfig>>,
}

// Start the loading process
pub fn start_loading(
    mut config_loader: ResMut<ConfigLoader>,
    asset_server: Res<AssetServer>,
    overrides: Res<ConfigOverrides>,
) {
    let config_path = overrides
        .config_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    info!("Loading viewer config from: {}", config_path);
    config_loader.handle = Some(asset_server.load(config_path));
}

/// Resolve the active configuration once the config asset settles, falling
/// back to defaults when it is missing or invalid.
pub fn load_config_system(
    mut loading_progress: ResMut<LoadingProgress>,
    config_loader: Res<ConfigLoader>,
    mut active_config: ResMut<ViewerConfig>,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<ViewerConfig>>,
    overrides: Res<ConfigOverrides>,
) {
    if loading_progress.config_loaded {
        return;
    }

    let Some(ref handle) = config_loader.handle else {
        return;
    };

    let loaded = match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => match configs.get(handle) {
            Some(config) => config.clone(),
            None => return,
        },
        Some(LoadState::Failed(err)) => {
            warn!("Viewer config unavailable, using defaults: {}", err);
            ViewerConfig::default()
        }
        _ => return,
    };

    *active_config = resolve_config(loaded, &overrides);
    loading_progress.config_loaded = true;
    info!(
        "✓ Viewer config ready: model={} profile={}",
        active_config.model_path,
        active_config.profile.as_str()
    );
}

pub fn resolve_config(loaded: ViewerConfig, overrides: &ConfigOverrides) -> ViewerConfig {
    let mut config = match loaded.validate() {
        Ok(()) => loaded,
        Err(err) => {
            warn!("Invalid viewer config, using defaults: {}", err);
            ViewerConfig::default()
        }
    };
    config.apply_overrides(overrides);
    config
}
