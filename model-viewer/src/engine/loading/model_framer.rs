use bevy::pbr::NotShadowReceiver;
use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use constants::framing::INITIAL_MODEL_YAW_DEGREES;

use crate::engine::assets::bounds::ModelBounds;
use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::error::ViewerError;
use crate::engine::interaction::pivot::ModelPivot;
use crate::engine::loading::model_loader::{ModelLoader, ModelRoot};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::framing::{FramingError, ModelFrame};
use crate::engine::scene::shadow::spawn_blob_shadow;
use crate::engine::scene::title::{ModelTitle, reveal_title};
use crate::rpc::web_rpc::WebRpcInterface;

/// Frames to wait after the scene spawns for mesh bounds to appear before
/// treating the model as having none.
const BOUNDS_WAIT_FRAMES: u32 = 10;

/// Union of every mesh AABB below `root`, expressed in `root`'s local space.
pub fn collect_model_bounds(
    root: Entity,
    root_transform: &GlobalTransform,
    children: &Query<&Children>,
    mesh_bounds: &Query<(&Aabb, &GlobalTransform)>,
) -> Option<ModelBounds> {
    let to_local = root_transform.affine().inverse();

    children
        .iter_descendants(root)
        .filter_map(|entity| mesh_bounds.get(entity).ok())
        .map(|(aabb, transform)| {
            ModelBounds::from_aabb(aabb).transformed(&(to_local * transform.affine()))
        })
        .reduce(ModelBounds::union)
}

/// Let the model cast the key light's shadow without receiving it, so it
/// never darkens itself.
pub fn disable_shadow_receiving(
    commands: &mut Commands,
    root: Entity,
    children: &Query<&Children>,
    scene_meshes: &Query<(), With<Mesh3d>>,
) {
    for entity in children.iter_descendants(root) {
        if scene_meshes.contains(entity) {
            commands.entity(entity).insert(NotShadowReceiver);
        }
    }
}

/// Fit the spawned model into the view envelope, center it on the pivot,
/// and bring up the elements that depend on its size.
pub fn frame_model_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut waited_frames: Local<u32>,
    mut roots: Query<(&GlobalTransform, &mut Transform), With<ModelRoot>>,
    mut titles: Query<&mut Visibility, With<ModelTitle>>,
    model_loader: Res<ModelLoader>,
    config: Res<ViewerConfig>,
    pivots: Query<Entity, With<ModelPivot>>,
    children: Query<&Children>,
    mesh_bounds: Query<(&Aabb, &GlobalTransform)>,
    scene_meshes: Query<(), With<Mesh3d>>,
) {
    if loading_progress.model_framed || !loading_progress.scene_spawned {
        return;
    }

    let Some(root) = model_loader.root else {
        return;
    };
    let Ok((root_global, mut root_transform)) = roots.get_mut(root) else {
        return;
    };

    let bounds = collect_model_bounds(root, root_global, &children, &mesh_bounds);
    if bounds.is_none() && *waited_frames < BOUNDS_WAIT_FRAMES {
        *waited_frames += 1;
        return;
    }

    disable_shadow_receiving(&mut commands, root, &children, &scene_meshes);

    let yaw = INITIAL_MODEL_YAW_DEGREES.to_radians();
    let framed = match bounds {
        Some(bounds) => ModelFrame::fit(&bounds, yaw).map_err(ViewerError::from),
        None => Err(ViewerError::Framing(FramingError::DegenerateBounds(
            Vec3::ZERO,
        ))),
    };

    match framed {
        Ok(frame) => {
            *root_transform = frame.to_transform();
            commands.entity(root).insert(frame);

            if config.scene.blob_shadow {
                if let Ok(pivot) = pivots.single() {
                    spawn_blob_shadow(
                        &mut commands,
                        &mut meshes,
                        &mut materials,
                        &mut images,
                        pivot,
                        &frame,
                    );
                }
            }

            info!(
                "✓ Model framed: scale {:.4}, fitted size {}",
                frame.scale, frame.fitted_size
            );
            rpc_interface.send_notification(
                "model_loaded",
                serde_json::json!({
                    "title": config.title,
                    "path": config.model_path,
                    "fit_scale": frame.scale,
                    "size": frame.fitted_size.to_array(),
                }),
            );
        }
        Err(err) => {
            // The model still shows, just unscaled and uncentered.
            warn!("{}", err);
            rpc_interface.send_notification(
                "model_loaded",
                serde_json::json!({
                    "title": config.title,
                    "path": config.model_path,
                    "fit_scale": 1.0,
                    "size": serde_json::Value::Null,
                }),
            );
        }
    }

    reveal_title(&mut titles);
    loading_progress.model_framed = true;
}
