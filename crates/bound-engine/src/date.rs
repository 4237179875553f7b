//! Local-calendar-day arithmetic.
//!
//! Puzzle selection works on local midnight boundaries, never UTC instants:
//! the host passes in its local date and the engine only counts whole days.

use chrono::{Days, NaiveDate, NaiveDateTime};

/// Extra delay added to the rollover timer so it fires just past midnight.
pub const ROLLOVER_SLACK_MS: i64 = 50;

/// Local date on which puzzle #1 ran.
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 25).expect("valid epoch date")
}

/// Day key for a local date, e.g. `2026-02-25`.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// 1-based puzzle ordinal for `today`, counted in whole local days since
/// `epoch`. Dates before the epoch clamp to 1.
pub fn puzzle_number(epoch: NaiveDate, today: NaiveDate) -> u32 {
    let days = today.signed_duration_since(epoch).num_days();
    (days + 1).max(1) as u32
}

/// Milliseconds until the next local midnight, plus a small slack so a
/// timer armed with this value lands on the new day. Recomputed at every
/// arm so long-lived tabs stay correct across DST shifts.
pub fn millis_until_next_midnight(now: NaiveDateTime) -> i64 {
    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    match now
        .date()
        .checked_add_days(Days::new(1))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        Some(midnight) => midnight.signed_duration_since(now).num_milliseconds() + ROLLOVER_SLACK_MS,
        // Calendar overflow; unreachable for real clocks.
        None => DAY_MS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_day_is_puzzle_one() {
        assert_eq!(puzzle_number(ymd(2026, 2, 25), ymd(2026, 2, 25)), 1);
    }

    #[test]
    fn two_days_later_is_puzzle_three() {
        assert_eq!(puzzle_number(ymd(2026, 2, 25), ymd(2026, 2, 27)), 3);
    }

    #[test]
    fn before_epoch_clamps_to_one() {
        assert_eq!(puzzle_number(ymd(2026, 2, 25), ymd(2026, 2, 20)), 1);
    }

    #[test]
    fn increments_by_one_per_day() {
        let epoch = ymd(2026, 2, 25);
        let mut prev = 0;
        for offset in 0..400u64 {
            let today = epoch.checked_add_days(Days::new(offset)).unwrap();
            let n = puzzle_number(epoch, today);
            assert_eq!(n as u64, offset + 1);
            assert!(n > prev);
            prev = n;
        }
    }

    #[test]
    fn crosses_month_boundary() {
        assert_eq!(puzzle_number(ymd(2026, 2, 25), ymd(2026, 3, 1)), 5);
    }

    #[test]
    fn day_key_format() {
        assert_eq!(day_key(ymd(2026, 2, 25)), "2026-02-25");
        assert_eq!(day_key(ymd(2026, 12, 1)), "2026-12-01");
    }

    #[test]
    fn midnight_delay_from_evening() {
        let now = ymd(2026, 2, 25).and_hms_opt(18, 0, 0).unwrap();
        assert_eq!(
            millis_until_next_midnight(now),
            6 * 60 * 60 * 1000 + ROLLOVER_SLACK_MS
        );
    }

    #[test]
    fn midnight_delay_at_midnight_is_full_day() {
        let now = ymd(2026, 2, 25).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(
            millis_until_next_midnight(now),
            24 * 60 * 60 * 1000 + ROLLOVER_SLACK_MS
        );
    }
}
