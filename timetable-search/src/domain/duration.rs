//! Elapsed-time calculation between raw timetable time strings.
//!
//! Durations are rendered as "H:MM" with unbounded, unpadded hours: a leg
//! spanning two calendar days can legitimately report "49:45".

use chrono::Duration;

use super::time::{ClockTime, TimeError};

/// Compute the elapsed time between a departure and an arrival time string,
/// rendered as "H:MM".
///
/// Either string may carry a "(+Nd)" day-offset annotation. When the
/// arrival has no annotation and its clock-time is strictly earlier than
/// the departure's, a single overnight wrap is inferred; the result is
/// never negative.
///
/// # Errors
///
/// Returns [`TimeError`] if either string is not a valid "HH:MM" time,
/// optionally suffixed with a day annotation.
///
/// # Examples
///
/// ```
/// use timetable_search::domain::duration;
///
/// assert_eq!(duration("08:00", "10:30").unwrap(), "2:30");
/// assert_eq!(duration("23:00", "01:00").unwrap(), "2:00");
/// assert_eq!(duration("13:30", "15:15 (+2d)").unwrap(), "49:45");
/// ```
pub fn duration(departure: &str, arrival: &str) -> Result<String, TimeError> {
    Ok(format_duration(duration_minutes(departure, arrival)?))
}

/// Same computation as [`duration`], returning a [`chrono::Duration`].
pub fn duration_minutes(departure: &str, arrival: &str) -> Result<Duration, TimeError> {
    let dep = ClockTime::parse(departure)?;
    let arr = ClockTime::parse(arrival)?.resolve_after(dep);
    Ok(dep.gap_until(arr))
}

/// Render a duration as "H:MM" (hours unbounded, minutes zero-padded).
pub fn format_duration(d: Duration) -> String {
    let total = d.num_minutes();
    format!("{}:{:02}", total / 60, total % 60)
}
