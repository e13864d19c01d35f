use bevy::prelude::*;
use bevy::render::camera::PerspectiveProjection;
use constants::render_settings::{CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

#[derive(Component)]
pub struct ViewerCamera;

pub fn viewer_projection() -> PerspectiveProjection {
    PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    }
}

pub fn spawn_camera_rig(commands: &mut Commands) {
    commands.spawn((
        Name::new("Viewer camera"),
        ViewerCamera,
        Camera3d::default(),
        Projection::Perspective(viewer_projection()),
        Msaa::Sample4,
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_projection() {
        let projection = viewer_projection();
        assert!((projection.fov - std::f32::consts::FRAC_PI_3).abs() < 1e-6);
        assert_eq!(projection.near, 0.1);
        assert_eq!(projection.far, 1000.0);
    }

    #[test]
    fn test_camera_looks_down_negative_z() {
        let mut app = App::new();
        app.add_systems(Startup, |mut commands: Commands| spawn_camera_rig(&mut commands));
        app.update();

        let mut cameras = app
            .world_mut()
            .query_filtered::<&Transform, With<ViewerCamera>>();
        let transform = cameras.single(app.world()).unwrap();
        assert_eq!(transform.translation, Vec3::new(0.0, 0.0, 3.0));
        assert!((transform.forward().as_vec3() - Vec3::NEG_Z).length() < 1e-6);
    }
}
