//! Scene elements around the model.
//!
//! Provides the fit-to-view framing maths, the lighting rig, the gradient
//! backdrop sphere, the soft blob shadow below the model and the title overlay.

/// Gradient-coloured sphere enclosing the scene.
pub mod backdrop;

/// Uniform fit scale, initial yaw and centering of the model.
///
/// Pure maths over [`crate::engine::assets::bounds::ModelBounds`], independent of the ECS.
pub mod framing;

/// Ambient and shadow-casting key light.
pub mod lighting;

/// Radial alpha texture laid on a plane just under the model.
pub mod shadow;

/// Model title text overlay.
pub mod title;
