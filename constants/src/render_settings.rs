use bevy::color::Color;
use bevy::math::Vec3;

pub const CLEAR_COLOR: Color = Color::srgb(55.0 / 255.0, 56.0 / 255.0, 60.0 / 255.0);

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 3.0;

// Lighting. Ambient stands in for a white-sky / #444444-ground hemisphere light.
pub const AMBIENT_COLOR: Color = Color::srgb(0.85, 0.85, 0.85);
pub const AMBIENT_BRIGHTNESS: f32 = 600.0;
pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(-2.0, 4.0, 2.0);
pub const KEY_LIGHT_ILLUMINANCE: f32 = 4_000.0;
pub const SHADOW_MAP_SIZE: usize = 1024;
pub const SHADOW_MAX_DISTANCE: f32 = 12.0;

// Backdrop sphere
pub const BACKDROP_RADIUS: f32 = 65.0;
pub const BACKDROP_SECTORS: u32 = 32;
pub const BACKDROP_STACKS: u32 = 18;
pub const BACKDROP_COLOR_TOP: Color = Color::srgb(55.0 / 255.0, 56.0 / 255.0, 60.0 / 255.0);
pub const BACKDROP_COLOR_BOTTOM: Color = Color::srgb(117.0 / 255.0, 117.0 / 255.0, 117.0 / 255.0);

// Blob shadow
pub const SHADOW_BLOB_OPACITY: f32 = 0.40;
pub const SHADOW_BLOB_TEXTURE_SIZE: u32 = 64;

// Title overlay
pub const TITLE_FONT_SIZE: f32 = 22.0;
