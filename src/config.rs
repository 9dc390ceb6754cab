//! Face configuration.
//!
//! Defaults reproduce the classic 144x168 analog face: 12 ticks, 8 px long,
//! tapered hands, 3x3 center dot. Builder methods follow the
//! `Config::default().with_*()` style used for peripheral configs.

use thiserror::Error;

use crate::geometry::{SECOND_HAND_INSET, TICK_COUNT, TICK_LENGTH};
use crate::hand::{HandShape, HOUR_HAND, MINUTE_HAND};
use crate::surface::FaceColor;
use crate::trig::TRIG_MAX_ANGLE;

/// Above this, neighbouring ticks would share an angle.
pub const MAX_TICK_COUNT: u32 = TRIG_MAX_ANGLE as u32;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick count must be at least 1")]
    NoTicks,

    #[error("tick count {0} exceeds the angle resolution")]
    TooManyTicks(u32),

    #[error("{0} stroke width must be at least 1")]
    ZeroStrokeWidth(&'static str),

    #[error("center dot size must be at least 1")]
    EmptyCenterDot,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceConfig {
    pub tick_count: u32,
    pub tick_length: i32,
    pub tick_stroke_width: u8,
    pub second_hand_inset: i32,
    pub hand_stroke_width: u8,
    pub minute_hand: HandShape,
    pub hour_hand: HandShape,
    pub center_dot_size: u32,
    pub foreground: FaceColor,
    pub background: FaceColor,
    pub antialiased: bool,
    /// Format the hour text as 00-23 instead of 01-12.
    pub clock_24h: bool,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            tick_count: TICK_COUNT,
            tick_length: TICK_LENGTH,
            tick_stroke_width: 2,
            second_hand_inset: SECOND_HAND_INSET,
            hand_stroke_width: 1,
            minute_hand: MINUTE_HAND,
            hour_hand: HOUR_HAND,
            center_dot_size: 3,
            foreground: FaceColor::White,
            background: FaceColor::Black,
            antialiased: true,
            clock_24h: true,
        }
    }
}

impl FaceConfig {
    pub fn with_tick_count(mut self, count: u32) -> Self {
        self.tick_count = count;
        self
    }

    pub fn with_tick_length(mut self, length: i32) -> Self {
        self.tick_length = length;
        self
    }

    pub fn with_hands(mut self, minute: HandShape, hour: HandShape) -> Self {
        self.minute_hand = minute;
        self.hour_hand = hour;
        self
    }

    pub fn with_clock_24h(mut self, clock_24h: bool) -> Self {
        self.clock_24h = clock_24h;
        self
    }

    pub fn with_antialiasing(mut self, antialiased: bool) -> Self {
        self.antialiased = antialiased;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_count == 0 {
            return Err(ConfigError::NoTicks);
        }
        if self.tick_count > MAX_TICK_COUNT {
            return Err(ConfigError::TooManyTicks(self.tick_count));
        }
        if self.tick_stroke_width == 0 {
            return Err(ConfigError::ZeroStrokeWidth("tick"));
        }
        if self.hand_stroke_width == 0 {
            return Err(ConfigError::ZeroStrokeWidth("hand"));
        }
        if self.center_dot_size == 0 {
            return Err(ConfigError::EmptyCenterDot);
        }
        Ok(())
    }
}
