use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
    LoadFailed,
}

pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if loading_progress.is_complete() {
        info!("→ Model ready, transitioning to Running state");
        rpc_interface.send_notification("viewer_ready", serde_json::json!({}));
        next_state.set(AppState::Running);
    }
}

pub fn transition_to_failed(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if let Some(failure) = &loading_progress.failure {
        warn!("→ Loading stopped, transitioning to LoadFailed state: {}", failure);
        next_state.set(AppState::LoadFailed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn state_app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<AppState>()
            .init_resource::<LoadingProgress>()
            .init_resource::<WebRpcInterface>()
            .add_systems(
                Update,
                (transition_to_running, transition_to_failed)
                    .run_if(in_state(AppState::Loading)),
            );
        app
    }

    fn state(app: &App) -> AppState {
        *app.world().resource::<State<AppState>>().get()
    }

    #[test]
    fn test_stays_loading_until_framed_and_animated() {
        let mut app = state_app();
        app.world_mut().resource_mut::<LoadingProgress>().model_framed = true;
        app.update();
        app.update();
        assert_eq!(state(&app), AppState::Loading);

        app.world_mut()
            .resource_mut::<LoadingProgress>()
            .animations_started = true;
        app.update();
        app.update();
        assert_eq!(state(&app), AppState::Running);
    }

    #[test]
    fn test_failure_moves_to_load_failed() {
        let mut app = state_app();
        app.world_mut().resource_mut::<LoadingProgress>().failure =
            Some("missing file".to_string());
        app.update();
        app.update();
        assert_eq!(state(&app), AppState::LoadFailed);
    }
}
