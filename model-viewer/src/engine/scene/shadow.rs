use bevy::asset::RenderAssetUsages;
use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use constants::framing::SHADOW_PLANE_LIFT;
use constants::render_settings::{SHADOW_BLOB_OPACITY, SHADOW_BLOB_TEXTURE_SIZE};

use super::framing::ModelFrame;

#[derive(Component)]
pub struct BlobShadow;

/// Shadow alpha at texture coordinates in [0, 1]²: opaque in the middle,
/// fading smoothly to nothing at the inscribed circle.
pub fn blob_alpha(u: f32, v: f32) -> f32 {
    let distance = (Vec2::new(u, v) - Vec2::splat(0.5)).length() * 2.0;
    let falloff = (1.0 - distance).clamp(0.0, 1.0);
    falloff * falloff * (3.0 - 2.0 * falloff)
}

/// Procedural radial blob texture, black with alpha falloff.
pub fn create_blob_image(size: u32) -> Image {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let u = (x as f32 + 0.5) / size as f32;
            let v = (y as f32 + 0.5) / size as f32;
            let alpha = (blob_alpha(u, v) * 255.0).round() as u8;
            data.extend_from_slice(&[0, 0, 0, alpha]);
        }
    }

    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

/// Plane transform under a framed model, relative to the pivot. The plane
/// shares the model's yaw so the blob follows its footprint.
pub fn blob_shadow_transform(frame: &ModelFrame) -> Transform {
    Transform::from_xyz(0.0, -frame.fitted_size.y * 0.5 - SHADOW_PLANE_LIFT, 0.0)
        .with_rotation(frame.rotation)
}

/// Spawn the blob shadow plane as a child of the pivot.
pub fn spawn_blob_shadow(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
    pivot: Entity,
    frame: &ModelFrame,
) {
    let texture = images.add(create_blob_image(SHADOW_BLOB_TEXTURE_SIZE));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, SHADOW_BLOB_OPACITY),
        base_color_texture: Some(texture),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let footprint = Vec2::new(frame.fitted_size.x, frame.fitted_size.z);
    commands.spawn((
        Name::new("Blob shadow"),
        BlobShadow,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(footprint.x, footprint.y))),
        MeshMaterial3d(material),
        blob_shadow_transform(frame),
        NotShadowCaster,
        NotShadowReceiver,
        ChildOf(pivot),
    ));
}
