use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::error::ViewerError;
use crate::engine::interaction::pivot::ModelPivot;
use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Resource, Default)]
pub struct ModelLoader {
    pub gltf: Option<Handle<Gltf>>,
    pub root: Option<Entity>,
}

/// Scene root of the loaded model, parented to the pivot.
#[derive(Component)]
pub struct ModelRoot;

pub fn request_model(
    mut loading_progress: ResMut<LoadingProgress>,
    mut model_loader: ResMut<ModelLoader>,
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
) {
    if loading_progress.model_requested || !loading_progress.config_loaded {
        return;
    }

    info!("Loading model: {}", config.model_path);
    model_loader.gltf = Some(asset_server.load(config.model_path.clone()));
    loading_progress.model_requested = true;
}

/// Wait for the glTF asset, then spawn its default scene below the pivot.
/// A failed load is logged and reported; nothing is retried.
pub fn spawn_model_when_loaded(
    mut loading_progress: ResMut<LoadingProgress>,
    mut model_loader: ResMut<ModelLoader>,
    mut commands: Commands,
    mut rpc_interface: ResMut<WebRpcInterface>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    config: Res<ViewerConfig>,
    pivots: Query<Entity, With<ModelPivot>>,
) {
    if loading_progress.gltf_loaded
        || !loading_progress.model_requested
        || loading_progress.failure.is_some()
    {
        return;
    }

    let Some(handle) = model_loader.gltf.clone() else {
        return;
    };

    let scene = match asset_server.get_load_state(&handle) {
        Some(LoadState::Loaded) => match gltfs.get(&handle) {
            Some(gltf) => default_scene(gltf),
            None => return,
        },
        Some(LoadState::Failed(err)) => {
            let error = ViewerError::ModelLoad {
                path: config.model_path.clone(),
                reason: err.to_string(),
            };
            report_failure(&mut loading_progress, &mut rpc_interface, &config, error);
            return;
        }
        _ => return,
    };

    let Some(scene) = scene else {
        let error = ViewerError::EmptyModel(config.model_path.clone());
        report_failure(&mut loading_progress, &mut rpc_interface, &config, error);
        return;
    };

    let Ok(pivot) = pivots.single() else {
        return;
    };

    let root = commands
        .spawn((
            Name::new("Model"),
            ModelRoot,
            SceneRoot(scene),
            Transform::default(),
            ChildOf(pivot),
        ))
        .observe(mark_scene_spawned)
        .id();

    model_loader.root = Some(root);
    loading_progress.gltf_loaded = true;
    info!("✓ Model asset loaded, spawning scene");
}

fn default_scene(gltf: &Gltf) -> Option<Handle<Scene>> {
    gltf.default_scene
        .clone()
        .or_else(|| gltf.scenes.first().cloned())
}

fn mark_scene_spawned(
    _trigger: Trigger<SceneInstanceReady>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    loading_progress.scene_spawned = true;
    info!("✓ Model scene spawned");
}

fn report_failure(
    loading_progress: &mut LoadingProgress,
    rpc_interface: &mut WebRpcInterface,
    config: &ViewerConfig,
    error: ViewerError,
) {
    error!("Error loading model: {}", error);
    rpc_interface.send_notification(
        "model_load_failed",
        serde_json::json!({
            "path": config.model_path,
            "error": error.to_string(),
        }),
    );
    loading_progress.failure = Some(error.to_string());
}
