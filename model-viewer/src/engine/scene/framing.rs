use bevy::prelude::*;
use constants::framing::{FIT_ENVELOPE_DEPTH, FIT_ENVELOPE_HEIGHT, FIT_ENVELOPE_WIDTH};
use thiserror::Error;

use crate::engine::assets::bounds::ModelBounds;

#[derive(Debug, Error, PartialEq)]
pub enum FramingError {
    #[error("model bounds have no positive extent on any axis (size {0})")]
    DegenerateBounds(Vec3),
}

/// Uniform scale fitting a box of `size` into the target envelope:
/// `min(1.6 / sy, 2.0 / sx, 2.0 / sz)`. Flat axes are ignored.
pub fn fit_scale(size: Vec3) -> Result<f32, FramingError> {
    [
        (size.x, FIT_ENVELOPE_WIDTH),
        (size.y, FIT_ENVELOPE_HEIGHT),
        (size.z, FIT_ENVELOPE_DEPTH),
    ]
    .into_iter()
    .filter(|(extent, _)| extent.is_finite() && *extent > 0.0)
    .map(|(extent, envelope)| envelope / extent)
    .reduce(f32::min)
    .ok_or(FramingError::DegenerateBounds(size))
}

/// Placement of a model below the pivot once its bounds are known.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ModelFrame {
    pub scale: f32,
    pub rotation: Quat,
    pub translation: Vec3,
    /// Bounds size after scaling, before rotation.
    pub fitted_size: Vec3,
}

impl ModelFrame {
    /// Scale the model into the envelope, turn it by `yaw`, and move it so
    /// its bounds center lands on the pivot origin.
    pub fn fit(bounds: &ModelBounds, yaw: f32) -> Result<Self, FramingError> {
        let scale = fit_scale(bounds.size())?;
        let rotation = Quat::from_rotation_y(yaw);
        Ok(Self {
            scale,
            rotation,
            translation: -(rotation * (bounds.center() * scale)),
            fitted_size: bounds.size() * scale,
        })
    }

    pub fn to_transform(&self) -> Transform {
        Transform {
            translation: self.translation,
            rotation: self.rotation,
            scale: Vec3::splat(self.scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::framing::INITIAL_MODEL_YAW_DEGREES;

    fn expected_scale(size: Vec3) -> f32 {
        (1.6 / size.y).min(2.0 / size.x).min(2.0 / size.z)
    }

    #[test]
    fn test_fit_scale_matches_envelope_policy() {
        let sizes = [
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(4.0, 1.0, 1.0),
            Vec3::new(1.0, 8.0, 1.0),
            Vec3::new(0.5, 0.25, 12.0),
            Vec3::new(0.001, 0.002, 0.003),
            Vec3::new(350.0, 120.0, 90.0),
        ];
        for size in sizes {
            let scale = fit_scale(size).unwrap();
            assert!(
                (scale - expected_scale(size)).abs() <= 1e-6 * expected_scale(size),
                "size {size}: got {scale}"
            );
        }
    }

    #[test]
    fn test_fit_scale_tall_model_limited_by_height() {
        assert_eq!(fit_scale(Vec3::new(1.0, 4.0, 1.0)), Ok(0.4));
    }

    #[test]
    fn test_fit_scale_ignores_flat_axis() {
        // A ground plane with no height is sized by its footprint only.
        assert_eq!(fit_scale(Vec3::new(4.0, 0.0, 2.0)), Ok(0.5));
    }

    #[test]
    fn test_fit_scale_degenerate() {
        assert_eq!(
            fit_scale(Vec3::ZERO),
            Err(FramingError::DegenerateBounds(Vec3::ZERO))
        );
        assert!(fit_scale(Vec3::new(f32::NAN, 0.0, -1.0)).is_err());
    }

    #[test]
    fn test_center_maps_to_origin() {
        let yaw = INITIAL_MODEL_YAW_DEGREES.to_radians();
        let cases = [
            ModelBounds::new(Vec3::new(-0.7, 0.0, -0.6), Vec3::new(1.1, 1.6, 0.9)),
            ModelBounds::new(Vec3::new(10.0, 20.0, 30.0), Vec3::new(14.0, 21.0, 32.0)),
            ModelBounds::new(Vec3::new(-300.0, -5.0, 40.0), Vec3::new(-100.0, 95.0, 60.0)),
        ];

        for bounds in cases {
            let frame = ModelFrame::fit(&bounds, yaw).unwrap();
            let mapped = frame.to_transform().transform_point(bounds.center());
            assert!(mapped.length() < 1e-4, "center mapped to {mapped}");
        }
    }

    #[test]
    fn test_fitted_model_fits_envelope() {
        let bounds = ModelBounds::new(Vec3::ZERO, Vec3::new(3.0, 6.0, 1.5));
        let frame = ModelFrame::fit(&bounds, 0.0).unwrap();

        assert!(frame.fitted_size.x <= 2.0 + 1e-5);
        assert!(frame.fitted_size.y <= 1.6 + 1e-5);
        assert!(frame.fitted_size.z <= 2.0 + 1e-5);
        assert!((frame.fitted_size.y - 1.6).abs() < 1e-5);
    }

    #[test]
    fn test_fit_propagates_degenerate_bounds() {
        let point = ModelBounds::new(Vec3::ONE, Vec3::ONE);
        assert!(ModelFrame::fit(&point, 0.0).is_err());
    }
}
