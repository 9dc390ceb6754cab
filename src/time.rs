//! Time-of-day samples and the per-minute text state.

use core::fmt::Write;

use heapless::String;

/// Hour, minute and second read once from the clock for one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSample {
    pub hour: u8,   // 0-23
    pub minute: u8, // 0-59
    pub second: u8, // 0-59
}

impl TimeSample {
    /// Returns `None` when any field is out of range.
    pub const fn from_hms(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self {
                hour,
                minute,
                second,
            })
        } else {
            None
        }
    }

    /// Time of day of a Unix timestamp (UTC).
    pub const fn from_unix_seconds(ts: u32) -> Self {
        let secs = ts % 86_400; // 86400 seconds in a day
        Self {
            hour: (secs / 3600) as u8,
            minute: (secs % 3600 / 60) as u8,
            second: (secs % 60) as u8,
        }
    }

    /// Seconds elapsed since midnight.
    pub const fn seconds_of_day(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    /// Hour on a 12-hour dial, 0-11.
    #[inline]
    pub const fn dial_hour(&self) -> u8 {
        self.hour % 12
    }

    /// Hour as shown on a 12-hour clock, 1-12.
    pub const fn hour_12(&self) -> u8 {
        match self.dial_hour() {
            0 => 12,
            h => h,
        }
    }
}

/// Set of time units that changed between two samples.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeUnits(u8);

impl TimeUnits {
    pub const NONE: TimeUnits = TimeUnits(0);
    pub const SECOND: TimeUnits = TimeUnits(1 << 0);
    pub const MINUTE: TimeUnits = TimeUnits(1 << 1);
    pub const HOUR: TimeUnits = TimeUnits(1 << 2);
    pub const ALL: TimeUnits = TimeUnits(0b111);

    /// Units that differ from `prev` to `next`; everything when there is no
    /// previous sample.
    pub fn changed(prev: Option<TimeSample>, next: TimeSample) -> Self {
        let Some(prev) = prev else {
            return TimeUnits::ALL;
        };
        let mut units = TimeUnits::NONE;
        if prev.second != next.second {
            units = units.union(TimeUnits::SECOND);
        }
        if prev.minute != next.minute {
            units = units.union(TimeUnits::MINUTE);
        }
        if prev.hour != next.hour {
            units = units.union(TimeUnits::HOUR);
        }
        units
    }

    pub const fn union(self, other: TimeUnits) -> Self {
        TimeUnits(self.0 | other.0)
    }

    /// True when any unit in `other` is set.
    pub const fn intersects(self, other: TimeUnits) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn contains(self, other: TimeUnits) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Hour and minute strings refreshed on every minute tick.
///
/// Nothing on the analog face reads these; they are kept so a host can show
/// or inspect the current time as text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeText {
    hour: String<8>,
    minute: String<8>,
}

impl TimeText {
    /// Formats `now` as `%H`/`%I` and `%M`.
    pub fn update(&mut self, now: &TimeSample, clock_24h: bool) {
        let hour = if clock_24h { now.hour } else { now.hour_12() };
        self.hour.clear();
        self.minute.clear();
        // Two digits always fit in eight bytes.
        let _ = write!(self.hour, "{:02}", hour);
        let _ = write!(self.minute, "{:02}", now.minute);
    }

    pub fn hour(&self) -> &str {
        &self.hour
    }

    pub fn minute(&self) -> &str {
        &self.minute
    }
}

/// Source of wall-clock time.
pub trait WallClock {
    type Error;

    /// Reads the current time in one transaction.
    fn now(&mut self) -> Result<TimeSample, Self::Error>;
}
