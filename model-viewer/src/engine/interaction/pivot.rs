use bevy::prelude::*;
use constants::interaction::{PITCH_MAX, PITCH_MIN, ZOOM_INITIAL, ZOOM_MAX, ZOOM_MIN};

use super::profile::Sensitivity;

/// Transform node carrying the user's view of the model: every loaded
/// mesh hangs below this entity, so rotating, panning or zooming it moves
/// the model as a whole.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ModelPivot {
    /// Rotation around the vertical axis, unbounded.
    pub yaw: f32,
    /// Rotation around the horizontal axis, kept within [-π/2, π/2].
    pub pitch: f32,
    /// Screen-plane offset (x right, y up).
    pub offset: Vec2,
    /// Uniform scale, kept within [0.8, 2.0].
    pub zoom: f32,
}

impl Default for ModelPivot {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            offset: Vec2::ZERO,
            zoom: ZOOM_INITIAL,
        }
    }
}

impl ModelPivot {
    /// Rotate by a cursor delta in pixels (y down, as reported by the window).
    pub fn rotate(&mut self, delta: Vec2, sensitivity: &Sensitivity) {
        self.yaw += delta.x * sensitivity.yaw;
        self.pitch = (self.pitch + delta.y * sensitivity.pitch).clamp(PITCH_MIN, PITCH_MAX);
    }

    /// Pan by a cursor delta in pixels. Screen y grows downwards, world y upwards.
    pub fn pan(&mut self, delta: Vec2, sensitivity: &Sensitivity) {
        self.offset.x += delta.x * sensitivity.pan;
        self.offset.y -= delta.y * sensitivity.pan;
    }

    /// Zoom by a DOM-style wheel delta (positive scrolls towards the user).
    pub fn zoom_by(&mut self, wheel_delta_y: f32, sensitivity: &Sensitivity) {
        self.zoom = (self.zoom - wheel_delta_y * sensitivity.zoom).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }

    pub fn to_transform(&self) -> Transform {
        Transform {
            translation: self.offset.extend(0.0),
            rotation: self.rotation(),
            scale: Vec3::splat(self.zoom),
        }
    }
}

/// Push pivot state into the entity's transform whenever it changes.
pub fn sync_pivot_transform(
    mut pivots: Query<(&ModelPivot, &mut Transform), Changed<ModelPivot>>,
) {
    for (pivot, mut transform) in &mut pivots {
        *transform = pivot.to_transform();
    }
}
