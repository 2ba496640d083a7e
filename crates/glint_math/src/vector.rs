// Vector utilities for Vec3
//
// Extends glam::Vec3 with the operations the intersection code needs that
// glam does not provide with the right edge-case behavior.

use glam::{Vec2, Vec3};

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Extension trait for Vec3 to provide additional ray casting utilities
pub trait Vec3Ext {
    /// Normalize the vector, leaving a zero-length vector unchanged.
    ///
    /// `glam::Vec3::normalize` yields NaNs for a zero vector.
    fn normalize_or_self(self) -> Vec3;

    /// The axis with the largest absolute component.
    ///
    /// Ties prefer X over Y over Z.
    fn dominant_axis(self) -> Axis;

    /// Drop one axis and return the remaining two components in order.
    fn project_dropping(self, axis: Axis) -> Vec2;
}

impl Vec3Ext for Vec3 {
    fn normalize_or_self(self) -> Vec3 {
        let length_squared = self.length_squared();
        if length_squared > 0.0 {
            self * length_squared.sqrt().recip()
        } else {
            self
        }
    }

    fn dominant_axis(self) -> Axis {
        let a = self.abs();
        if a.x >= a.y && a.x >= a.z {
            Axis::X
        } else if a.y >= a.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    fn project_dropping(self, axis: Axis) -> Vec2 {
        match axis {
            Axis::X => Vec2::new(self.y, self.z),
            Axis::Y => Vec2::new(self.x, self.z),
            Axis::Z => Vec2::new(self.x, self.y),
        }
    }
}
