//! Minimal 2D vector math for the simulation.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit direction at `radians`, scaled by `magnitude`.
    pub fn from_angle(radians: f32, magnitude: f32) -> Self {
        Self::new(radians.cos() * magnitude, radians.sin() * magnitude)
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Unit-length copy, or `fallback` when this vector is too short to
    /// carry a direction.
    pub fn normalized_or(self, fallback: Vec2) -> Vec2 {
        let len_sq = self.length_squared();
        if len_sq < 1e-4 {
            fallback
        } else {
            self * (1.0 / len_sq.sqrt())
        }
    }

    /// Copy with its magnitude clamped to `[min, max]`. The zero vector has
    /// no direction to scale along and is returned unchanged.
    pub fn clamp_length(self, min: f32, max: f32) -> Vec2 {
        let len_sq = self.length_squared();
        if len_sq == 0.0 {
            return self;
        }
        let len = len_sq.sqrt();
        let clamped = len.clamp(min, max);
        self * (clamped / len)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Vec2::new(3.0, 0.0);
        let b = Vec2::new(0.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn normalized_or_falls_back_for_tiny_vectors() {
        let fallback = Vec2::new(1.0, 0.0);
        assert_eq!(Vec2::ZERO.normalized_or(fallback), fallback);

        let n = Vec2::new(0.0, 3.0).normalized_or(fallback);
        assert!((n.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clamp_length_bounds_magnitude() {
        let slow = Vec2::new(1.0, 0.0).clamp_length(10.0, 100.0);
        assert!((slow.length() - 10.0).abs() < 1e-4);

        let fast = Vec2::new(0.0, 500.0).clamp_length(10.0, 100.0);
        assert!((fast.length() - 100.0).abs() < 1e-3);

        assert_eq!(Vec2::ZERO.clamp_length(10.0, 100.0), Vec2::ZERO);
    }
}
