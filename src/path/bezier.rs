use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// Quadratic bezier curve through `start` and `end`, pulled toward `control`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
}

impl QuadraticBezier {
    pub fn new(start: Vec3, control: Vec3, end: Vec3) -> Self {
        QuadraticBezier { start, control, end }
    }

    /// Evaluates `(1-t)²·P0 + 2(1-t)t·P1 + t²·P2`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate along the same polynomial.
    pub fn position_at(&self, t: f32) -> Vec3 {
        let one_minus_t = 1.0 - t;
        let weight_start = one_minus_t * one_minus_t;
        let weight_control = 2.0 * one_minus_t * t;
        let weight_end = t * t;

        self.start * weight_start + self.control * weight_control + self.end * weight_end
    }

    // `segments + 1` evenly spaced points, both endpoints included
    pub fn samples(&self, segments: usize) -> Vec<Vec3> {
        if segments == 0 {
            return vec![self.start];
        }
        (0..=segments)
            .map(|i| self.position_at(i as f32 / segments as f32))
            .collect()
    }
}
