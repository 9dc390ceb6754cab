//! Fixed-point angle and trigonometry helpers.
//!
//! Angles are integers where one full rotation is [`TRIG_MAX_ANGLE`], and
//! sine/cosine results are integers scaled by [`TRIG_MAX_RATIO`]. Callers
//! multiply by a length and divide by the ratio to land on pixel offsets, the
//! same way a lookup-table implementation would be used on a watch without an
//! FPU. Here the ratio is computed with `libm` and rounded, which stays within
//! one pixel of exact trig for any radius the face uses.

use core::f64::consts::TAU;

/// One full rotation.
pub const TRIG_MAX_ANGLE: i32 = 0x10000;

/// Scale of the values returned by [`sin_lookup`] and [`cos_lookup`].
pub const TRIG_MAX_RATIO: i32 = 0xffff;

/// Position around a full rotation, 0 = 12 o'clock, increasing clockwise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle(i32);

impl Angle {
    pub const ZERO: Angle = Angle(0);
    pub const QUARTER: Angle = Angle(TRIG_MAX_ANGLE / 4);
    pub const HALF: Angle = Angle(TRIG_MAX_ANGLE / 2);
    pub const THREE_QUARTERS: Angle = Angle(TRIG_MAX_ANGLE * 3 / 4);

    /// Raw angle in `TRIG_MAX_ANGLE` units.
    pub const fn from_raw(raw: i32) -> Self {
        Angle(raw)
    }

    /// `numerator / denominator` of a rotation, truncated to angle units.
    ///
    /// A zero denominator yields [`Angle::ZERO`]. The product is taken in
    /// 64 bits, so any proper fraction of `i32` operands is exact.
    pub const fn from_fraction(numerator: i32, denominator: i32) -> Self {
        if denominator == 0 {
            return Angle::ZERO;
        }
        Angle((TRIG_MAX_ANGLE as i64 * numerator as i64 / denominator as i64) as i32)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Fraction of a full rotation, for display and tests.
    pub fn as_fraction(self) -> f32 {
        self.0 as f32 / TRIG_MAX_ANGLE as f32
    }

    #[inline]
    pub fn sin(self) -> i32 {
        sin_lookup(self.0)
    }

    #[inline]
    pub fn cos(self) -> i32 {
        cos_lookup(self.0)
    }
}

fn to_radians(angle: i32) -> f64 {
    angle.rem_euclid(TRIG_MAX_ANGLE) as f64 * TAU / TRIG_MAX_ANGLE as f64
}

/// Sine of `angle`, scaled to `[-TRIG_MAX_RATIO, TRIG_MAX_RATIO]`.
pub fn sin_lookup(angle: i32) -> i32 {
    libm::round(libm::sin(to_radians(angle)) * TRIG_MAX_RATIO as f64) as i32
}

/// Cosine of `angle`, scaled to `[-TRIG_MAX_RATIO, TRIG_MAX_RATIO]`.
pub fn cos_lookup(angle: i32) -> i32 {
    libm::round(libm::cos(to_radians(angle)) * TRIG_MAX_RATIO as f64) as i32
}

/// `ratio * length / TRIG_MAX_RATIO`, truncating toward zero.
///
/// `|ratio| <= TRIG_MAX_RATIO`, so the quotient always fits back in `i32`.
#[inline]
pub fn scale(ratio: i32, length: i32) -> i32 {
    (ratio as i64 * length as i64 / TRIG_MAX_RATIO as i64) as i32
}
