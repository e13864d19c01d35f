use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::LoadingProgress;

/// Start every animation clip of the loaded model on repeat, on each
/// animation player found in the spawned scene.
pub fn start_model_animations(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    mut players: Query<&mut AnimationPlayer>,
    model_loader: Res<ModelLoader>,
    gltfs: Res<Assets<Gltf>>,
    config: Res<ViewerConfig>,
    children: Query<&Children>,
) {
    if loading_progress.animations_started || !loading_progress.scene_spawned {
        return;
    }
    loading_progress.animations_started = true;

    if !config.scene.animations {
        info!("Animations disabled by config");
        return;
    }

    let Some(root) = model_loader.root else {
        return;
    };
    let Some(gltf) = model_loader.gltf.as_ref().and_then(|handle| gltfs.get(handle)) else {
        return;
    };
    if gltf.animations.is_empty() {
        return;
    }

    let (graph, clip_nodes) = AnimationGraph::from_clips(gltf.animations.iter().cloned());
    let graph_handle = graphs.add(graph);

    let player_entities = animation_players(root, &children, &players);
    for entity in &player_entities {
        let Ok(mut player) = players.get_mut(*entity) else {
            continue;
        };
        for node in &clip_nodes {
            player.play(*node).repeat();
        }
        commands
            .entity(*entity)
            .insert(AnimationGraphHandle(graph_handle.clone()));
    }

    info!(
        "✓ Playing {} animation clip(s) on {} player(s)",
        clip_nodes.len(),
        player_entities.len()
    );
}

/// Entities below `root` carrying an [`AnimationPlayer`].
fn animation_players(
    root: Entity,
    children: &Query<&Children>,
    players: &Query<&mut AnimationPlayer>,
) -> Vec<Entity> {
    children
        .iter_descendants(root)
        .filter(|entity| players.contains(*entity))
        .collect()
}
