use chrono::{DateTime, NaiveDate, TimeZone};
use sha2::{Digest as _, Sha256};

/// Derive the base seed for a calendar day.
///
/// The day is rendered as `YYYY-MM-DD`, hashed with SHA-256, and the first four digest bytes
/// are read as a big-endian `u32` (the same value as parsing the first eight hex digits).
pub fn daily_seed(date: NaiveDate) -> u32 {
    let key = date.format("%Y-%m-%d").to_string();
    let digest = Sha256::digest(key.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Derive the daily seed for a timestamp, discarding the time of day.
///
/// The calendar day is taken in the timestamp's own zone.
pub fn daily_seed_for<Tz: TimeZone>(at: &DateTime<Tz>) -> u32 {
    daily_seed(at.date_naive())
}

#[cfg(test)]
#[path = "../../tests/unit/seed/daily.rs"]
mod tests;
