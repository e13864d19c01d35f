use bevy::input::ButtonState;
use bevy::input::mouse::{MouseButtonInput, MouseWheel};
use bevy::prelude::*;
use bevy::window::WindowEvent;

use super::pivot::ModelPivot;
use super::pointer::{ButtonMask, DragMode, PointerState, wheel_delta_pixels};
use super::profile::{ReleasePolicy, Sensitivity};
use crate::engine::assets::viewer_config::ViewerConfig;

/// Request to put the pivot back to its initial view.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetViewEvent;

/// Drive the pivot from mouse input. Window events are read as one ordered
/// stream so presses, releases, motion and wheel steps apply in the order
/// they happened within the frame.
pub fn handle_pointer_events(
    mut window_events: EventReader<WindowEvent>,
    mut pointer: ResMut<PointerState>,
    mut pivots: Query<&mut ModelPivot>,
    windows: Query<&Window>,
    config: Res<ViewerConfig>,
) {
    let sensitivity = config.profile.sensitivity();
    let policy = config.profile.release_policy();

    for event in window_events.read() {
        match event {
            WindowEvent::MouseButtonInput(input) => {
                apply_button(&mut pointer, input, policy, &windows);
            }
            WindowEvent::CursorMoved(moved) => {
                let Some(drag) = pointer.motion(moved.position) else {
                    continue;
                };
                if drag.delta == Vec2::ZERO {
                    continue;
                }
                for mut pivot in &mut pivots {
                    match drag.mode {
                        DragMode::Rotate => pivot.rotate(drag.delta, &sensitivity),
                        DragMode::Pan => pivot.pan(drag.delta, &sensitivity),
                    }
                }
            }
            WindowEvent::MouseWheel(wheel) => {
                apply_wheel(&mut pivots, wheel, &sensitivity);
            }
            _ => {}
        }
    }
}

/// Press or release one button. A press anchors at the last tracked cursor,
/// or at the window's cursor when no motion has been seen yet.
fn apply_button(
    pointer: &mut PointerState,
    input: &MouseButtonInput,
    policy: ReleasePolicy,
    windows: &Query<&Window>,
) {
    let button = ButtonMask::from_button(input.button);
    if button.is_empty() {
        return;
    }

    match input.state {
        ButtonState::Pressed => {
            let at = pointer.cursor.or_else(|| {
                windows
                    .get(input.window)
                    .ok()
                    .and_then(Window::cursor_position)
            });
            let held = pointer.held.with(button);
            pointer.press(held, at);
        }
        ButtonState::Released => {
            let held = pointer.held.without(button);
            pointer.release(held, policy);
        }
    }
}

/// Zoom clamps after every wheel step, not once per frame.
fn apply_wheel(
    pivots: &mut Query<&mut ModelPivot>,
    wheel: &MouseWheel,
    sensitivity: &Sensitivity,
) {
    let delta_y = wheel_delta_pixels(wheel);
    if delta_y == 0.0 {
        return;
    }

    for mut pivot in pivots.iter_mut() {
        pivot.zoom_by(delta_y, sensitivity);
    }
}

pub fn handle_reset_view(
    mut reset_events: EventReader<ResetViewEvent>,
    mut pointer: ResMut<PointerState>,
    mut pivots: Query<&mut ModelPivot>,
) {
    if reset_events.read().count() == 0 {
        return;
    }

    pointer.reset();
    for mut pivot in &mut pivots {
        pivot.reset();
    }
    info!("View reset to initial pivot");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::interaction::pivot::sync_pivot_transform;
    use crate::engine::interaction::profile::InteractionProfile;
    use bevy::input::mouse::MouseScrollUnit;
    use constants::interaction::{ZOOM_MAX, ZOOM_MIN};

    fn input_app(profile: InteractionProfile) -> (App, Entity) {
        let mut app = App::new();
        app.add_event::<WindowEvent>()
            .add_event::<ResetViewEvent>()
            .init_resource::<PointerState>()
            .insert_resource(ViewerConfig {
                profile,
                ..default()
            })
            .add_systems(
                Update,
                (
                    handle_reset_view,
                    handle_pointer_events,
                    sync_pivot_transform,
                )
                    .chain(),
            );
        let pivot = app
            .world_mut()
            .spawn((ModelPivot::default(), Transform::default()))
            .id();
        (app, pivot)
    }

    fn button_on(app: &mut App, window: Entity, button: MouseButton, state: ButtonState) {
        app.world_mut()
            .send_event(WindowEvent::MouseButtonInput(MouseButtonInput {
                button,
                state,
                window,
            }));
    }

    fn button(app: &mut App, button: MouseButton, state: ButtonState) {
        button_on(app, Entity::PLACEHOLDER, button, state);
    }

    fn move_to(app: &mut App, x: f32, y: f32) {
        app.world_mut().send_event(WindowEvent::CursorMoved(CursorMoved {
            window: Entity::PLACEHOLDER,
            position: Vec2::new(x, y),
            delta: None,
        }));
    }

    fn wheel(app: &mut App, lines: f32) {
        app.world_mut().send_event(WindowEvent::MouseWheel(MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y: lines,
            window: Entity::PLACEHOLDER,
        }));
    }

    fn pivot(app: &App, entity: Entity) -> ModelPivot {
        *app.world().get::<ModelPivot>(entity).unwrap()
    }

    #[test]
    fn test_drag_rotates_pivot_and_syncs_transform() {
        let (mut app, entity) = input_app(InteractionProfile::Direct);
        move_to(&mut app, 100.0, 100.0);
        app.update();

        button(&mut app, MouseButton::Left, ButtonState::Pressed);
        move_to(&mut app, 150.0, 120.0);
        app.update();

        let state = pivot(&app, entity);
        assert!((state.yaw - 0.5).abs() < 1e-5);
        assert!((state.pitch - 0.1).abs() < 1e-5);

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_eq!(transform.rotation, state.rotation());
    }

    #[test]
    fn test_hover_without_press_does_nothing() {
        let (mut app, entity) = input_app(InteractionProfile::Entity);
        move_to(&mut app, 10.0, 10.0);
        move_to(&mut app, 300.0, 200.0);
        app.update();
        assert_eq!(pivot(&app, entity), ModelPivot::default());
    }

    #[test]
    fn test_release_stops_rotation_until_next_press() {
        let (mut app, entity) = input_app(InteractionProfile::Entity);
        move_to(&mut app, 0.0, 0.0);
        app.update();

        button(&mut app, MouseButton::Left, ButtonState::Pressed);
        move_to(&mut app, 100.0, 0.0);
        app.update();
        let after_drag = pivot(&app, entity);
        assert!((after_drag.yaw - 1.0).abs() < 1e-5);

        button(&mut app, MouseButton::Left, ButtonState::Released);
        app.update();
        move_to(&mut app, 400.0, 300.0);
        app.update();
        assert_eq!(pivot(&app, entity), after_drag);

        button(&mut app, MouseButton::Left, ButtonState::Pressed);
        move_to(&mut app, 500.0, 300.0);
        app.update();
        assert!((pivot(&app, entity).yaw - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_left_and_right_held_pans() {
        let (mut app, entity) = input_app(InteractionProfile::Entity);
        move_to(&mut app, 50.0, 50.0);
        app.update();

        button(&mut app, MouseButton::Left, ButtonState::Pressed);
        button(&mut app, MouseButton::Right, ButtonState::Pressed);
        move_to(&mut app, 70.0, 90.0);
        app.update();

        let state = pivot(&app, entity);
        assert_eq!(state.yaw, 0.0);
        assert!((state.offset.x - 0.1).abs() < 1e-5);
        assert!((state.offset.y + 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_wheel_zoom_is_clamped() {
        let (mut app, entity) = input_app(InteractionProfile::Direct);

        wheel(&mut app, 1.0);
        app.update();
        assert!((pivot(&app, entity).zoom - 1.1).abs() < 1e-5);

        for _ in 0..50 {
            wheel(&mut app, 3.0);
        }
        app.update();
        assert_eq!(pivot(&app, entity).zoom, ZOOM_MAX);

        for _ in 0..50 {
            wheel(&mut app, -3.0);
        }
        app.update();
        assert_eq!(pivot(&app, entity).zoom, ZOOM_MIN);
        assert_eq!(
            app.world().get::<Transform>(entity).unwrap().scale,
            Vec3::splat(ZOOM_MIN)
        );
    }

    #[test]
    fn test_reset_view_event() {
        let (mut app, entity) = input_app(InteractionProfile::Direct);
        wheel(&mut app, 2.0);
        button(&mut app, MouseButton::Left, ButtonState::Pressed);
        move_to(&mut app, 40.0, 40.0);
        app.update();
        assert_ne!(pivot(&app, entity), ModelPivot::default());

        app.world_mut().send_event(ResetViewEvent);
        app.update();
        assert_eq!(pivot(&app, entity), ModelPivot::default());
        assert!(!app.world().resource::<PointerState>().is_dragging());
    }

    #[test]
    fn test_first_press_anchors_at_window_cursor() {
        let (mut app, entity) = input_app(InteractionProfile::Entity);
        let mut window = Window::default();
        window.set_physical_cursor_position(Some(bevy::math::DVec2::new(400.0, 300.0)));
        let window = app.world_mut().spawn(window).id();

        // No cursor motion has been seen before the press.
        button_on(&mut app, window, MouseButton::Left, ButtonState::Pressed);
        app.update();
        move_to(&mut app, 401.0, 300.0);
        app.update();

        let state = pivot(&app, entity);
        assert!((state.yaw - 0.01).abs() < 1e-6);
        assert_eq!(state.pitch, 0.0);
    }

    #[test]
    fn test_press_between_motions_in_one_frame() {
        let (mut app, entity) = input_app(InteractionProfile::Direct);
        move_to(&mut app, 100.0, 100.0);
        app.update();

        // Travel before the press is hover, only the travel after it drags.
        move_to(&mut app, 150.0, 100.0);
        button(&mut app, MouseButton::Left, ButtonState::Pressed);
        move_to(&mut app, 160.0, 100.0);
        app.update();

        assert!((pivot(&app, entity).yaw - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_wheel_clamps_after_each_step() {
        let (mut app, entity) = input_app(InteractionProfile::Direct);
        for _ in 0..50 {
            wheel(&mut app, 3.0);
        }
        app.update();
        assert_eq!(pivot(&app, entity).zoom, ZOOM_MAX);

        // Zooming further in at the limit is lost; the step back out is not.
        wheel(&mut app, 5.0);
        wheel(&mut app, -1.0);
        app.update();
        assert!((pivot(&app, entity).zoom - (ZOOM_MAX - 0.1)).abs() < 1e-5);
    }
}
