//! 营业时间 - mall/store open-closed computation
//!
//! Catalog hours are free text such as `"10:00 - 22:00"`, `"10:00–22:00"` or
//! `"24/7"`. Windows that close at or before they open wrap past midnight.

use chrono::{DateTime, NaiveTime, Timelike};
use chrono_tz::Tz;
use shared::models::VenueStatus;

/// Parsed opening hours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningHours {
    AlwaysOpen,
    Window { open: NaiveTime, close: NaiveTime },
}

impl OpeningHours {
    /// Parse catalog hours text; `None` when the format is not recognized
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if text == "24/7" || text.eq_ignore_ascii_case("24 hours") {
            return Some(Self::AlwaysOpen);
        }

        let (open, close) = text.split_once(['-', '–', '—'])?;
        let open = parse_time(open)?;
        let close = parse_time(close)?;
        if open == close {
            return Some(Self::AlwaysOpen);
        }
        Some(Self::Window { open, close })
    }

    /// Whether the venue is open at a wall-clock time
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        match *self {
            Self::AlwaysOpen => true,
            Self::Window { open, close } if open < close => time >= open && time < close,
            // Overnight window, e.g. 20:00 - 02:00
            Self::Window { open, close } => time >= open || time < close,
        }
    }

    /// Minutes until the next closing time, `None` when closed or always open
    pub fn minutes_until_close(&self, time: NaiveTime) -> Option<u32> {
        let Self::Window { close, .. } = *self else {
            return None;
        };
        if !self.is_open_at(time) {
            return None;
        }
        let now = time.num_seconds_from_midnight() / 60;
        let close = close.num_seconds_from_midnight() / 60;
        Some(if close > now {
            close - now
        } else {
            24 * 60 - now + close
        })
    }
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    if text == "24:00" {
        return NaiveTime::from_hms_opt(0, 0, 0);
    }
    NaiveTime::parse_from_str(text, "%H:%M").ok()
}

/// Status a shopper should see right now
///
/// Declared `coming_soon` and `closed` always win; otherwise parseable
/// hours decide, and unparseable or missing hours keep the declared status.
pub fn effective_status(
    declared: VenueStatus,
    hours: Option<&str>,
    now: DateTime<Tz>,
) -> VenueStatus {
    match declared {
        VenueStatus::ComingSoon | VenueStatus::Closed => declared,
        VenueStatus::Open => match hours.and_then(OpeningHours::parse) {
            Some(parsed) if parsed.is_open_at(now.time()) => VenueStatus::Open,
            Some(_) => VenueStatus::Closed,
            None => declared,
        },
    }
}
