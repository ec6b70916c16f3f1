use time::macros::format_description;
use time::OffsetDateTime;

use crewdesk_core::record::AttendanceEntry;

/// Render the attendance clock (`9:15:42 AM`).
///
/// Pure function of the given instant; the attendance screen re-evaluates it
/// once per second against the current time. Formatting a literal description
/// cannot fail, so the fallback is never observed.
#[must_use]
pub fn format_clock(now: OffsetDateTime) -> String {
    let description =
        format_description!("[hour repr:12 padding:none]:[minute]:[second] [period]");
    now.format(&description).unwrap_or_default()
}

/// Render the long day line under the clock (`Monday, January 15, 2024`).
#[must_use]
pub fn format_day(now: OffsetDateTime) -> String {
    let description =
        format_description!("[weekday repr:long], [month repr:long] [day padding:none], [year]");
    now.format(&description).unwrap_or_default()
}

/// Total hours worked across the attendance log.
#[must_use]
pub fn total_hours(entries: &[AttendanceEntry]) -> f32 {
    entries.iter().map(|entry| entry.hours).sum()
}

/// Average hours per logged day, `0.0` for an empty log.
#[must_use]
pub fn average_hours(entries: &[AttendanceEntry]) -> f32 {
    if entries.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let days = entries.len() as f32;
    total_hours(entries) / days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewdesk_core::category::AttendanceStatus;
    use crewdesk_core::RecordId;
    use time::macros::datetime;

    fn entry(id: u32, hours: f32) -> AttendanceEntry {
        AttendanceEntry {
            id: RecordId::new(id),
            date: time::macros::date!(2024 - 01 - 15),
            check_in: "09:00 AM".into(),
            check_out: "06:00 PM".into(),
            status: AttendanceStatus::Present,
            hours,
        }
    }

    #[test]
    fn clock_renders_twelve_hour_time() {
        assert_eq!(format_clock(datetime!(2024-01-15 09:15:42 UTC)), "9:15:42 AM");
        assert_eq!(format_clock(datetime!(2024-01-15 18:30:05 UTC)), "6:30:05 PM");
        assert_eq!(format_clock(datetime!(2024-01-15 00:00:00 UTC)), "12:00:00 AM");
    }

    #[test]
    fn day_line_matches_screen_format() {
        assert_eq!(
            format_day(datetime!(2024-01-15 09:00:00 UTC)),
            "Monday, January 15, 2024"
        );
    }

    #[test]
    fn clock_is_deterministic() {
        let at = datetime!(2024-01-15 12:34:56 UTC);
        assert_eq!(format_clock(at), format_clock(at));
    }

    #[test]
    fn hours_aggregate_over_the_log() {
        let log = vec![entry(1, 9.25), entry(2, 9.0), entry(3, 8.5)];
        assert!((total_hours(&log) - 26.75).abs() < f32::EPSILON);
        assert!((average_hours(&log) - 26.75 / 3.0).abs() < f32::EPSILON);
        assert!(average_hours(&[]).abs() < f32::EPSILON);
    }
}
