use std::f32::consts::FRAC_PI_2;

/// DOM `MouseEvent.buttons` bits.
pub const BUTTON_LEFT: u8 = 1;
pub const BUTTON_RIGHT: u8 = 2;
pub const BUTTON_MIDDLE: u8 = 4;

/// Pitch (rotation around the horizontal axis) limits in radians.
pub const PITCH_MIN: f32 = -FRAC_PI_2;
pub const PITCH_MAX: f32 = FRAC_PI_2;

/// Uniform zoom limits applied to the pivot.
pub const ZOOM_MIN: f32 = 0.8;
pub const ZOOM_MAX: f32 = 2.0;
pub const ZOOM_INITIAL: f32 = 1.0;

/// Wheel events reported in lines are converted to DOM pixel deltas.
pub const WHEEL_PIXELS_PER_LINE: f32 = 100.0;

/// Renderer-loop ("direct") sensitivities, per pixel of cursor travel.
pub const DIRECT_YAW_PER_PIXEL: f32 = 0.01;
pub const DIRECT_PITCH_PER_PIXEL: f32 = 0.005;
pub const DIRECT_PAN_PER_PIXEL: f32 = 0.005;
pub const DIRECT_ZOOM_PER_PIXEL: f32 = 0.001;

/// Entity-component ("entity") sensitivities, per pixel of cursor travel.
pub const ENTITY_YAW_PER_PIXEL: f32 = 1.0 / 100.0;
pub const ENTITY_PITCH_PER_PIXEL: f32 = 1.0 / 200.0;
pub const ENTITY_PAN_PER_PIXEL: f32 = 1.0 / 200.0;
pub const ENTITY_ZOOM_PER_PIXEL: f32 = 1.0 / 100.0;
