//! Turns a stream of clock samples into face ticks.
//!
//! The host polls its clock as often as it likes and hands each sample to
//! [`TickService::tick`]. A frame is rendered only when the second changed and
//! the text is refreshed only when the minute changed, so polling faster than
//! once per second costs nothing.

use embedded_graphics::primitives::Rectangle;

use crate::face::WatchFace;
use crate::surface::DrawingSurface;
use crate::time::{TimeSample, TimeUnits};

#[derive(Debug, Default)]
pub struct TickService {
    last: Option<TimeSample>,
}

impl TickService {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Last sample that was dispatched.
    pub fn last(&self) -> Option<TimeSample> {
        self.last
    }

    /// Dispatches `now` to the face and returns the units that changed.
    ///
    /// The first sample fires both ticks so the face shows the time straight
    /// away. The minute tick runs before the frame is drawn.
    pub fn tick<S: DrawingSurface>(
        &mut self,
        now: TimeSample,
        face: &mut WatchFace,
        bounds: Rectangle,
        surface: &mut S,
    ) -> TimeUnits {
        let changed = TimeUnits::changed(self.last, now);
        if changed.is_empty() {
            return changed;
        }
        self.last = Some(now);

        if changed.intersects(TimeUnits::MINUTE.union(TimeUnits::HOUR)) {
            face.on_minute_tick(now);
        }
        face.on_second_tick(now, bounds, surface);
        changed
    }

    /// Forces the next sample to fire both ticks, e.g. after the display was
    /// powered back on.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
