#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod face;
pub mod geometry;
pub mod hand;
pub mod rtc_pcf85063;
pub mod surface;
pub mod ticker;
pub mod time;
pub mod trig;

#[cfg(feature = "devkit-esp32s3-disp128")]
pub mod display;
#[cfg(feature = "devkit-esp32s3-disp128")]
pub mod wiring;

pub use config::{ConfigError, FaceConfig};
pub use face::WatchFace;
pub use surface::{DrawingSurface, FaceColor, GraphicsContext};
pub use ticker::TickService;
pub use time::{TimeSample, TimeUnits, WallClock};
