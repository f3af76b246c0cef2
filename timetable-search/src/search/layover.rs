//! Transfer-feasibility policy.
//!
//! Night service is thinner and less reliable, so the policy is asymmetric:
//! an after-hours arrival tolerates only a short layover, while a daytime
//! transfer may wait up to two hours. Both too-short and implausibly-long
//! gaps are rejected.

use chrono::Duration;

use crate::domain::ClockTime;

/// Decides whether the gap between an arrival and the next departure is an
/// acceptable transfer.
///
/// Both times must already be resolved onto the same absolute timeline
/// (see [`ClockTime::resolve_after`]).
///
/// # Examples
///
/// ```
/// use timetable_search::search::LayoverPolicy;
/// use timetable_search::domain::ClockTime;
///
/// let policy = LayoverPolicy::default();
/// let arrival = ClockTime::parse("11:00").unwrap();
/// let departure = ClockTime::parse("11:20").unwrap();
/// assert!(policy.acceptable(arrival, departure));
/// ```
#[derive(Debug, Clone)]
pub struct LayoverPolicy {
    /// Minimum gap needed to change trains, always enforced.
    pub min_transfer: Duration,
    /// Maximum gap after a daytime arrival.
    pub max_daytime: Duration,
    /// Maximum gap after an after-hours arrival.
    pub max_after_hours: Duration,
    /// Hour (inclusive) at which after-hours begins.
    pub after_hours_start: u32,
    /// Hour (exclusive) at which after-hours ends.
    pub after_hours_end: u32,
}

impl Default for LayoverPolicy {
    fn default() -> Self {
        Self {
            min_transfer: Duration::minutes(15),
            max_daytime: Duration::hours(2),
            max_after_hours: Duration::minutes(30),
            after_hours_start: 22,
            after_hours_end: 6,
        }
    }
}

impl LayoverPolicy {
    /// Returns true if the layover between `arrival` and the following
    /// `departure` satisfies the policy. All bounds are inclusive.
    pub fn acceptable(&self, arrival: ClockTime, departure: ClockTime) -> bool {
        let gap = arrival.gap_until(departure);

        if gap < self.min_transfer {
            return false;
        }

        if self.is_after_hours(arrival) {
            gap <= self.max_after_hours
        } else {
            gap <= self.max_daytime
        }
    }

    /// Whether a time falls in the after-hours window (wraps past midnight).
    fn is_after_hours(&self, t: ClockTime) -> bool {
        let hour = t.hour();
        hour >= self.after_hours_start || hour < self.after_hours_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse(s).unwrap()
    }

    #[test]
    fn daytime_window() {
        let policy = LayoverPolicy::default();

        // 15 minutes is the inclusive minimum
        assert!(policy.acceptable(t("10:00"), t("10:15")));
        assert!(!policy.acceptable(t("10:00"), t("10:14")));

        // 2 hours is the inclusive daytime maximum
        assert!(policy.acceptable(t("10:00"), t("12:00")));
        assert!(!policy.acceptable(t("10:00"), t("12:01")));
    }

    #[test]
    fn after_hours_window() {
        let policy = LayoverPolicy::default();

        // Arrival at 23:00 is after-hours: max 30 minutes, inclusive
        assert!(policy.acceptable(t("23:00"), t("23:30")));
        assert!(!policy.acceptable(t("23:00"), t("23:31")));
        assert!(policy.acceptable(t("23:00"), t("23:15")));
        assert!(!policy.acceptable(t("23:00"), t("23:10")));
    }

    #[test]
    fn after_hours_spans_midnight() {
        let policy = LayoverPolicy::default();

        // Early-morning arrivals are after-hours too
        assert!(policy.acceptable(t("05:00"), t("05:20")));
        assert!(!policy.acceptable(t("05:00"), t("06:00")));

        // 06:00 is daytime again
        assert!(policy.acceptable(t("06:00"), t("07:30")));
    }

    #[test]
    fn boundary_hours() {
        let policy = LayoverPolicy::default();

        // 22:00 arrival is already after-hours
        assert!(!policy.acceptable(t("22:00"), t("23:00")));
        // 21:59 is still daytime
        assert!(policy.acceptable(t("21:59"), t("22:59")));
    }

    #[test]
    fn classification_uses_arrival_not_departure() {
        let policy = LayoverPolicy::default();

        // Daytime arrival, departure after 22:00: daytime rules apply
        assert!(policy.acceptable(t("21:00"), t("22:30")));
    }

    #[test]
    fn negative_gap_rejected() {
        let policy = LayoverPolicy::default();
        assert!(!policy.acceptable(t("10:00"), t("09:00")));
    }

    #[test]
    fn after_hours_gap_across_midnight() {
        let policy = LayoverPolicy::default();

        // 23:50 day 0 -> 00:10 day 1 is a 20-minute after-hours gap
        let arrival = t("23:50");
        let departure = t("00:10").resolve_after(arrival);
        assert!(policy.acceptable(arrival, departure));
    }

    #[test]
    fn custom_policy() {
        let policy = LayoverPolicy {
            min_transfer: Duration::minutes(5),
            max_daytime: Duration::hours(4),
            ..LayoverPolicy::default()
        };

        assert!(policy.acceptable(t("10:00"), t("10:05")));
        assert!(policy.acceptable(t("10:00"), t("14:00")));
    }
}
