//! Fixed perspective camera looking at the model pivot.
//!
//! The camera never moves: orbiting, panning and zooming act on the pivot.
//! Bevy's camera system keeps the aspect ratio in step with window resizes.

/// Camera spawn and projection settings.
pub mod camera_rig;
