//! Clock-time handling for timetable entries.
//!
//! The source timetable gives times as "HH:MM" strings, with an optional
//! "(+Nd)" suffix on arrivals that land N calendar days after departure.
//! This module provides a type for working with these times on an absolute
//! timeline, handling overnight services that cross midnight.

use chrono::{Duration, NaiveTime, Timelike};
use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time with a day offset placing it on an absolute timeline.
///
/// Scheduled times need to track both the time of day and which day they
/// fall on, because overnight services cross midnight. Day 0 is the day the
/// first leg of an itinerary departs; an arrival annotated "(+1d)" falls on
/// day 1.
///
/// The day offset is only non-zero when the source string carries an
/// explicit annotation, or after [`ClockTime::resolve_after`] has placed
/// the time on a timeline. It is never inferred at parse time.
///
/// # Examples
///
/// ```
/// use timetable_search::domain::ClockTime;
///
/// let t = ClockTime::parse("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
/// assert_eq!(t.day(), 0);
///
/// let t = ClockTime::parse("06:15 (+2d)").unwrap();
/// assert_eq!(t.day(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    time: NaiveTime,
    day: u32,
}

impl ClockTime {
    /// Create a clock-time from a time of day and a day offset.
    pub fn new(time: NaiveTime, day: u32) -> Self {
        Self { time, day }
    }

    /// Parse a time from "HH:MM" format, optionally suffixed "(+Nd)".
    ///
    /// The annotation marks an arrival N days after the reference day. A
    /// "(+0d)" annotation parses to day 0 and behaves exactly like an
    /// unannotated time; a day offset is never inferred here.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_search::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse("00:00").is_ok());
    /// assert!(ClockTime::parse("23:59").is_ok());
    /// assert!(ClockTime::parse("15:15 (+1d)").is_ok());
    /// assert_eq!(ClockTime::parse("14:30 (+0d)").unwrap().day(), 0);
    ///
    /// assert!(ClockTime::parse("1430").is_err());
    /// assert!(ClockTime::parse("25:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let (base, day) = split_day_annotation(s)?;

        // Must be exactly 5 characters: HH:MM
        if base.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = base.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self { time, day })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Returns the day offset.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns the time-of-day component.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Absolute position on the timeline, in minutes from day-0 midnight.
    pub fn minutes_from_midnight(&self) -> i64 {
        i64::from(self.day) * 24 * 60 + i64::from(self.hour()) * 60 + i64::from(self.minute())
    }

    /// Place this clock-time on the timeline at or after `reference`.
    ///
    /// Takes the reference's day, adds this time's explicit day offset if
    /// one was annotated, and otherwise infers a single overnight wrap when
    /// the resulting instant would be strictly earlier than the reference.
    /// The implicit wrap adds exactly one day, never more.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_search::domain::ClockTime;
    ///
    /// let dep = ClockTime::parse("23:00").unwrap();
    ///
    /// // 01:00 is earlier than 23:00 on the clock, so it wraps to day 1.
    /// let arr = ClockTime::parse("01:00").unwrap().resolve_after(dep);
    /// assert_eq!(arr.day(), 1);
    ///
    /// // An explicit annotation wins; nothing further is inferred.
    /// let arr = ClockTime::parse("15:15 (+1d)").unwrap().resolve_after(dep);
    /// assert_eq!(arr.day(), 1);
    /// ```
    pub fn resolve_after(&self, reference: ClockTime) -> ClockTime {
        let mut resolved = ClockTime::new(self.time, reference.day.saturating_add(self.day));
        if self.day == 0 && resolved < reference {
            resolved.day = resolved.day.saturating_add(1);
        }
        resolved
    }

    /// Returns the signed gap from this time until `later`.
    pub fn gap_until(&self, later: ClockTime) -> Duration {
        Duration::minutes(later.minutes_from_midnight() - self.minutes_from_midnight())
    }
}

impl Ord for ClockTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.minutes_from_midnight()
            .cmp(&other.minutes_from_midnight())
    }
}

impl PartialOrd for ClockTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClockTime({:02}:{:02} day {})",
            self.hour(),
            self.minute(),
            self.day
        )
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())?;
        if self.day > 0 {
            write!(f, " (+{}d)", self.day)?;
        }
        Ok(())
    }
}

/// Split an optional "(+Nd)" suffix off a time string.
///
/// Returns the bare "HH:MM" part and the annotated day offset (0 when the
/// string carries no annotation).
fn split_day_annotation(s: &str) -> Result<(&str, u32), TimeError> {
    let Some(open) = s.find('(') else {
        return Ok((s, 0));
    };

    let suffix = &s[open..];
    let digits = suffix
        .strip_prefix("(+")
        .and_then(|rest| rest.strip_suffix("d)"))
        .ok_or_else(|| TimeError::new("malformed day annotation, expected (+Nd)"))?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::new("day annotation must contain digits"));
    }
    let day: u32 = digits
        .parse()
        .map_err(|_| TimeError::new("day annotation out of range"))?;

    Ok((s[..open].trim_end(), day))
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
