//! Hour and minute hand shapes.
//!
//! A hand is a fixed template of offset points drawn around a pivot. The
//! template never changes; rotating a hand only updates its angle, and the
//! rotated, translated outline is produced on demand for drawing.

use embedded_graphics::prelude::Point;

use crate::geometry::offset;
use crate::trig::{scale, Angle};

/// Number of points in a hand outline.
pub const HAND_POINTS: usize = 4;

/// Tapered arrow template, in pixels relative to the pivot, pointing up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HandShape {
    pub points: [Point; HAND_POINTS],
}

impl HandShape {
    pub const fn new(points: [Point; HAND_POINTS]) -> Self {
        Self { points }
    }
}

pub const MINUTE_HAND: HandShape = HandShape::new([
    Point::new(5, 14),
    Point::new(-5, 14),
    Point::new(-2, -66),
    Point::new(2, -66),
]);

pub const HOUR_HAND: HandShape = HandShape::new([
    Point::new(5, 12),
    Point::new(-5, 12),
    Point::new(-3, -50),
    Point::new(3, -50),
]);

/// A hand template placed on the face: pivot plus rotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandPath {
    shape: HandShape,
    pivot: Point,
    rotation: Angle,
}

impl HandPath {
    pub fn new(shape: HandShape) -> Self {
        Self {
            shape,
            pivot: Point::zero(),
            rotation: Angle::ZERO,
        }
    }

    /// Moves the pivot to `pivot`.
    pub fn move_to(&mut self, pivot: Point) {
        self.pivot = pivot;
    }

    /// Sets the absolute rotation about the pivot.
    pub fn rotate_to(&mut self, angle: Angle) {
        self.rotation = angle;
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    pub fn shape(&self) -> &HandShape {
        &self.shape
    }

    /// Template points rotated by the current angle and moved onto the pivot.
    ///
    /// Each term is scaled separately with truncation, so a hand rotated by a
    /// quarter turn lands on whole pixels exactly.
    pub fn points(&self) -> [Point; HAND_POINTS] {
        let sin = self.rotation.sin();
        let cos = self.rotation.cos();
        self.shape.points.map(|p| {
            let rotated = Point::new(
                scale(cos, p.x).saturating_sub(scale(sin, p.y)),
                scale(cos, p.y).saturating_add(scale(sin, p.x)),
            );
            offset(self.pivot, rotated)
        })
    }
}
