//! Taskbar clock snapshots and their display formatting.
//!
//! The clock ticks independently of the desktop session; callers sample [`ClockSnapshot::now`]
//! on their own interval and render it with [`ClockSnapshot::format_time`] and
//! [`ClockSnapshot::format_date`].

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Hour-cycle preference for the taskbar clock.
pub enum ClockFormat {
    /// `09:05 PM`
    #[default]
    TwelveHour,
    /// `21:05`
    TwentyFourHour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Calendar/time fields sampled once per clock tick.
pub struct ClockSnapshot {
    /// Four-digit year.
    pub year: u32,
    /// Month, 1-based.
    pub month: u32,
    /// Day of month, 1-based.
    pub day: u32,
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
    /// Second, 0-59.
    pub second: u32,
}

impl ClockSnapshot {
    /// Samples the host clock.
    ///
    /// In the browser this is local time; native builds fall back to UTC.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_unix_ms(crate::time::unix_time_ms_now())
        }
    }

    /// Builds a UTC snapshot from a unix millisecond timestamp.
    ///
    /// Timestamps outside the representable range clamp to the unix epoch.
    pub fn from_unix_ms(unix_ms: u64) -> Self {
        let utc = i64::try_from(unix_ms)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or_default();
        Self {
            year: u32::try_from(utc.year()).unwrap_or(1970),
            month: utc.month(),
            day: utc.day(),
            hour: utc.hour(),
            minute: utc.minute(),
            second: utc.second(),
        }
    }

    /// Formats the time portion, e.g. `09:05 PM` or `21:05`.
    pub fn format_time(self, format: ClockFormat) -> String {
        match format {
            ClockFormat::TwentyFourHour => format!("{:02}:{:02}", self.hour, self.minute),
            ClockFormat::TwelveHour => {
                let mut hour = self.hour % 12;
                if hour == 0 {
                    hour = 12;
                }
                let suffix = if self.hour >= 12 { "PM" } else { "AM" };
                format!("{:02}:{:02} {}", hour, self.minute, suffix)
            }
        }
    }

    /// Formats the date portion as `M/D/YYYY`.
    pub fn format_date(self) -> String {
        format!("{}/{}/{}", self.month, self.day, self.year)
    }

    /// Accessible label combining date and time.
    pub fn aria_label(self, format: ClockFormat) -> String {
        format!("{}, {}", self.format_date(), self.format_time(format))
    }
}
