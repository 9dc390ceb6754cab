//! Face geometry: center point, tick marks and the second-hand endpoint.
//!
//! Everything here is a pure function of the bounding rectangle and the time
//! sample, so it can be checked without a display attached.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::trig::{scale, Angle, TRIG_MAX_ANGLE};

/// Default number of tick marks around the dial.
pub const TICK_COUNT: u32 = 12;
/// Default radial length of a tick mark in pixels.
pub const TICK_LENGTH: i32 = 8;
/// Default gap between the second-hand tip and the dial edge.
pub const SECOND_HAND_INSET: i32 = 3;

/// Midpoint of `bounds`: `origin + (width / 2, height / 2)`.
pub fn center_point(bounds: &Rectangle) -> Point {
    offset(bounds.top_left, half_size(bounds.size))
}

fn half_size(size: Size) -> Point {
    Point::new((size.width / 2) as i32, (size.height / 2) as i32)
}

// Saturates instead of overflowing for bounds near the edge of i32 space.
pub(crate) fn offset(base: Point, delta: Point) -> Point {
    Point::new(base.x.saturating_add(delta.x), base.y.saturating_add(delta.y))
}

/// Radius of the dial edge, half the bounds width.
pub fn dial_radius(bounds: &Rectangle) -> i32 {
    (bounds.size.width / 2) as i32
}

/// Point at `angle` on the circle of `radius` around `center`.
///
/// Angle zero is straight up; positive angles run clockwise in screen
/// coordinates (y grows downward).
pub fn point_on_circle(angle: Angle, radius: i32, center: Point) -> Point {
    offset(
        center,
        Point::new(scale(angle.sin(), radius), scale(-angle.cos(), radius)),
    )
}

/// One radial tick, drawn from `start` (inner) to `end` (outer).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickMark {
    pub angle: Angle,
    pub start: Point,
    pub end: Point,
}

/// Evenly spaced tick marks around the dial.
///
/// The iterator is lazy, yields exactly `count` marks, and can be cloned to
/// walk the same sequence again.
#[derive(Clone, Debug)]
pub struct TickMarks {
    center: Point,
    inner_radius: i32,
    outer_radius: i32,
    count: u32,
    index: u32,
}

impl TickMarks {
    pub fn new(center: Point, inner_radius: i32, outer_radius: i32, count: u32) -> Self {
        Self {
            center,
            inner_radius: inner_radius.max(0),
            outer_radius: outer_radius.max(0),
            count,
            index: 0,
        }
    }

    pub fn inner_radius(&self) -> i32 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> i32 {
        self.outer_radius
    }
}

impl Iterator for TickMarks {
    type Item = TickMark;

    fn next(&mut self) -> Option<TickMark> {
        if self.index >= self.count {
            return None;
        }
        let raw = TRIG_MAX_ANGLE as i64 * self.index as i64 / self.count as i64;
        let angle = Angle::from_raw(raw as i32);
        self.index += 1;
        Some(TickMark {
            angle,
            start: point_on_circle(angle, self.inner_radius, self.center),
            end: point_on_circle(angle, self.outer_radius, self.center),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.count - self.index) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for TickMarks {}

/// The default dial: 12 marks, 8 px long, reaching the bounds edge.
pub fn tick_marks(bounds: &Rectangle) -> TickMarks {
    tick_marks_with(bounds, TICK_COUNT, TICK_LENGTH)
}

/// Tick marks with a custom count and length.
pub fn tick_marks_with(bounds: &Rectangle, count: u32, length: i32) -> TickMarks {
    let outer = dial_radius(bounds);
    TickMarks::new(center_point(bounds), outer.saturating_sub(length), outer, count)
}

/// Angle of the second hand, `second / 60` of a rotation.
pub fn second_angle(second: u8) -> Angle {
    Angle::from_fraction(second as i32, 60)
}

/// Tip of the second hand, 3 px inside the dial edge.
pub fn second_hand_point(bounds: &Rectangle, second: u8) -> Point {
    second_hand_point_with(bounds, second, SECOND_HAND_INSET)
}

pub fn second_hand_point_with(bounds: &Rectangle, second: u8, inset: i32) -> Point {
    let radius = dial_radius(bounds).saturating_sub(inset).max(0);
    point_on_circle(second_angle(second), radius, center_point(bounds))
}
