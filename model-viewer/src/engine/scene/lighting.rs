use bevy::pbr::CascadeShadowConfigBuilder;
use bevy::prelude::*;
use constants::render_settings::{KEY_LIGHT_ILLUMINANCE, KEY_LIGHT_POSITION, SHADOW_MAX_DISTANCE};

use crate::engine::interaction::pivot::ModelPivot;

/// Shadow-casting directional light kept aimed at the model pivot.
#[derive(Component)]
pub struct KeyLight;

pub fn key_light_transform(target: Vec3) -> Transform {
    Transform::from_translation(KEY_LIGHT_POSITION).looking_at(target, Vec3::Y)
}

pub fn spawn_lighting(commands: &mut Commands) {
    let cascades = CascadeShadowConfigBuilder {
        num_cascades: 1,
        minimum_distance: 0.1,
        maximum_distance: SHADOW_MAX_DISTANCE,
        ..default()
    }
    .build();

    commands.spawn((
        Name::new("Key light"),
        KeyLight,
        DirectionalLight {
            illuminance: KEY_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        cascades,
        key_light_transform(Vec3::ZERO),
    ));
}

/// Re-aim the key light whenever the pivot moves.
pub fn aim_key_light_at_pivot(
    pivots: Query<&Transform, (With<ModelPivot>, Changed<Transform>)>,
    mut lights: Query<&mut Transform, (With<KeyLight>, Without<ModelPivot>)>,
) {
    let Some(pivot) = pivots.iter().next() else {
        return;
    };

    for mut light in &mut lights {
        *light = key_light_transform(pivot.translation);
    }
}
