use bevy::asset::AssetMetaCheck;
use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, AMBIENT_COLOR, CLEAR_COLOR, SHADOW_MAP_SIZE,
};

// Crate engine modules
use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::camera::camera_rig::spawn_camera_rig;
use crate::engine::core::app_state::{AppState, transition_to_failed, transition_to_running};
use crate::engine::core::launch_options::ConfigOverrides;
use crate::engine::core::window_config::create_window_config;
use crate::engine::interaction::pivot::ModelPivot;
use crate::engine::interaction::{InteractionPlugin, InteractionSet};
use crate::engine::scene::lighting::{aim_key_light_at_pivot, spawn_lighting};
use crate::engine::systems::animation::start_model_animations;
// Loading pipeline
use crate::engine::loading::config_loader::{ConfigLoader, load_config_system, start_loading};
use crate::engine::loading::model_framer::frame_model_when_ready;
use crate::engine::loading::model_loader::{ModelLoader, request_model, spawn_model_when_loaded};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::scene_creator::create_scene_when_configured;
// Web RPC
use crate::rpc::web_rpc::WebRpcPlugin;

pub fn create_app(overrides: ConfigOverrides) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers ViewerConfig as a loadable asset type from *.viewer.json files.
        .add_plugins(JsonAssetPlugin::<ViewerConfig>::new(&["viewer.json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(InteractionPlugin);

    app.insert_resource(ClearColor(CLEAR_COLOR))
        .insert_resource(AmbientLight {
            color: AMBIENT_COLOR,
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        })
        .insert_resource(DirectionalLightShadowMap {
            size: SHADOW_MAP_SIZE,
        })
        .insert_resource(overrides);

    // Initialise resources early
    app.init_resource::<ViewerConfig>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ConfigLoader>()
        .init_resource::<ModelLoader>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                load_config_system,
                create_scene_when_configured,
                request_model,
                spawn_model_when_loaded,
                frame_model_when_ready,
                start_model_animations,
                transition_to_running,
                transition_to_failed,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Interaction only starts once the model is framed.
    app.configure_sets(Update, InteractionSet.run_if(in_state(AppState::Running)))
        .add_systems(Update, aim_key_light_at_pivot.after(InteractionSet));

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_camera_rig(&mut commands);
    spawn_lighting(&mut commands);
    spawn_pivot(&mut commands);
}

fn spawn_pivot(commands: &mut Commands) {
    let pivot = ModelPivot::default();
    commands.spawn((
        Name::new("Model pivot"),
        pivot,
        pivot.to_transform(),
        Visibility::default(),
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
