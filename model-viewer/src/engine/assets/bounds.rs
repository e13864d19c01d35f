use bevy::math::Affine3A;
use bevy::prelude::*;
use bevy::render::primitives::Aabb;

/// Axis-aligned bounds of a loaded model, in a single coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl ModelBounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self::new(Vec3::from(aabb.min()), Vec3::from(aabb.max()))
    }

    /// Calculate center point used to re-center the model on the pivot.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Calculate size dimensions driving the fit-to-view scale.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Bounds of these bounds after an affine transform (all eight corners).
    pub fn transformed(&self, transform: &Affine3A) -> Self {
        let corners = [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ];

        let first = transform.transform_point3(corners[0]);
        corners[1..]
            .iter()
            .map(|corner| transform.transform_point3(*corner))
            .fold(Self::new(first, first), |bounds, point| Self {
                min: bounds.min.min(point),
                max: bounds.max.max(point),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_size() {
        let bounds = ModelBounds::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 2.0, 4.0));
        assert_eq!(bounds.center(), Vec3::new(1.0, 1.0, 3.0));
        assert_eq!(bounds.size(), Vec3::new(4.0, 2.0, 2.0));
    }

    #[test]
    fn test_new_orders_corners() {
        let bounds = ModelBounds::new(Vec3::ONE, -Vec3::ONE);
        assert_eq!(bounds.min, -Vec3::ONE);
        assert_eq!(bounds.max, Vec3::ONE);
    }

    #[test]
    fn test_union() {
        let a = ModelBounds::new(Vec3::ZERO, Vec3::ONE);
        let b = ModelBounds::new(Vec3::new(-2.0, 0.5, 0.5), Vec3::new(0.5, 0.5, 3.0));
        let merged = a.union(b);
        assert_eq!(merged.min, Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(merged.max, Vec3::new(1.0, 1.0, 3.0));
    }

    #[test]
    fn test_transformed_by_rotation_and_translation() {
        let bounds = ModelBounds::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        let transform = Affine3A::from_rotation_translation(
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            Vec3::new(0.0, 5.0, 0.0),
        );
        let moved = bounds.transformed(&transform);

        // A quarter turn around Y maps +X onto -Z.
        assert!((moved.min - Vec3::new(0.0, 5.0, -2.0)).abs().max_element() < 1e-5);
        assert!((moved.max - Vec3::new(1.0, 6.0, 0.0)).abs().max_element() < 1e-5);
    }

    #[test]
    fn test_from_aabb() {
        let aabb = Aabb::from_min_max(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
        let bounds = ModelBounds::from_aabb(&aabb);
        assert_eq!(bounds.size(), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(bounds.center(), Vec3::ZERO);
    }
}
