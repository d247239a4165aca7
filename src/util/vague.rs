use chrono::{DateTime, TimeZone, Utc};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

/// Render a signed number of seconds as a short duration like `3w` or `-1h`.
///
/// The largest unit whose threshold the magnitude reaches is used, truncating
/// toward zero; only years carry a decimal. Anything under one second
/// renders as an empty string, without a sign.
pub fn vague_duration(delta_seconds: f64) -> String {
    let magnitude = delta_seconds.abs();
    if magnitude.is_nan() || magnitude < 1.0 {
        return String::new();
    }
    let sign = if delta_seconds < 0.0 { "-" } else { "" };
    let days = magnitude / DAY;

    let amount = if magnitude >= 365.0 * DAY {
        format!("{:.1}y", days / 365.0)
    } else if magnitude >= 90.0 * DAY {
        format!("{}mo", (days / 30.0) as u64)
    } else if magnitude >= 14.0 * DAY {
        format!("{}w", (days / 7.0) as u64)
    } else if magnitude >= DAY {
        format!("{}d", days as u64)
    } else if magnitude >= HOUR {
        format!("{}h", (magnitude / HOUR) as u64)
    } else if magnitude >= MINUTE {
        format!("{}min", (magnitude / MINUTE) as u64)
    } else {
        format!("{}s", magnitude as u64)
    };

    format!("{sign}{amount}")
}

/// Vague duration from `reference` to `target`; empty when there is no target
pub fn vague_datetime<Tz: TimeZone>(target: Option<DateTime<Utc>>, reference: &DateTime<Tz>) -> String {
    let Some(target) = target else {
        return String::new();
    };
    let delta = target.signed_duration_since(reference.with_timezone(&Utc));
    vague_duration(delta.num_milliseconds() as f64 / 1000.0)
}
