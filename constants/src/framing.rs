/// Target envelope the fitted model must fit into (world units).
pub const FIT_ENVELOPE_WIDTH: f32 = 2.0;
pub const FIT_ENVELOPE_HEIGHT: f32 = 1.6;
pub const FIT_ENVELOPE_DEPTH: f32 = 2.0;

/// Yaw applied to the model once framed, in degrees (-30 turns it slightly towards the viewer).
pub const INITIAL_MODEL_YAW_DEGREES: f32 = -30.0;

/// Blob shadow sits this far below the fitted model's base to avoid z-fighting.
pub const SHADOW_PLANE_LIFT: f32 = 0.001;
