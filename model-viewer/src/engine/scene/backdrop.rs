use bevy::color::{ColorToComponents, Mix};
use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;
use bevy::render::render_resource::Face;
use constants::render_settings::{
    BACKDROP_COLOR_BOTTOM, BACKDROP_COLOR_TOP, BACKDROP_RADIUS, BACKDROP_SECTORS,
    BACKDROP_STACKS,
};

#[derive(Component)]
pub struct Backdrop;

/// Gradient color at a normalised height: 0 at the bottom pole, 1 at the top.
pub fn backdrop_color_at(height: f32) -> Color {
    BACKDROP_COLOR_BOTTOM.mix(&BACKDROP_COLOR_TOP, height.clamp(0.0, 1.0))
}

/// UV sphere with a vertical gradient baked into its vertex colors.
pub fn create_gradient_sphere(radius: f32) -> Mesh {
    let mut mesh = Sphere::new(radius)
        .mesh()
        .uv(BACKDROP_SECTORS, BACKDROP_STACKS);

    let colors: Vec<[f32; 4]> = match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
        Some(VertexAttributeValues::Float32x3(positions)) => positions
            .iter()
            .map(|position| {
                let height = (position[1] / radius + 1.0) * 0.5;
                backdrop_color_at(height).to_linear().to_f32_array()
            })
            .collect(),
        _ => Vec::new(),
    };

    if !colors.is_empty() {
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    }
    mesh
}

/// Spawn the inside-out gradient sphere surrounding the scene.
pub fn spawn_backdrop(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        // Only the inner faces are visible from the camera.
        cull_mode: Some(Face::Front),
        ..default()
    });

    commands.spawn((
        Name::new("Backdrop"),
        Backdrop,
        Mesh3d(meshes.add(create_gradient_sphere(BACKDROP_RADIUS))),
        MeshMaterial3d(material),
        Transform::default(),
        NotShadowCaster,
        NotShadowReceiver,
    ));
}
