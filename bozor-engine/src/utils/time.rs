//! 时间工具函数 - 业务时区

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Default business time zone
pub const DEFAULT_TIMEZONE: &str = "Asia/Samarkand";

/// Parse an IANA time zone name
pub fn parse_timezone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

/// Current wall-clock time in the business time zone
pub fn now_in(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

/// Unix millis → business time zone; `None` when out of range
pub fn millis_to_local(millis: i64, tz: Tz) -> Option<DateTime<Tz>> {
    tz.timestamp_millis_opt(millis).single()
}
