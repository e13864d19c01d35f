use bevy::prelude::*;

use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::backdrop::spawn_backdrop;
use crate::engine::scene::title::spawn_title_overlay;

/// Spawn the optional scene elements once the configuration is known.
pub fn create_scene_when_configured(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ViewerConfig>,
) {
    if loading_progress.scene_created || !loading_progress.config_loaded {
        return;
    }

    if config.scene.backdrop {
        spawn_backdrop(&mut commands, &mut meshes, &mut materials);
        info!("Backdrop created");
    }

    if config.scene.title_overlay && !config.title.is_empty() {
        spawn_title_overlay(&mut commands, &config.title);
    }

    loading_progress.scene_created = true;
}
