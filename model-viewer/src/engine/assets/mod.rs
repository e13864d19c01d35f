//! Asset-side data for the viewer.
//!
//! Holds the JSON viewer configuration and the axis-aligned bounds type used
//! when framing a loaded model.

/// Axis-aligned model bounds with union and affine transformation.
pub mod bounds;

/// Viewer configuration asset, its validation and launch overrides.
pub mod viewer_config;
