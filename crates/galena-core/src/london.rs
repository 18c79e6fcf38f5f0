//! Europe/London civil-time helpers.
//!
//! All LME prompt datetimes are expressed in the exchange's civil timezone.
//! This module centralises the timezone handle, the 12:30 prompt expiry
//! stamp, and the Rulebook trading-day cutoff used by the Cash/TOM/3M
//! calculations.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// The exchange's civil timezone.
pub const LONDON: Tz = chrono_tz::Europe::London;

/// Hour component of the prompt expiry stamp (the Rulebook close).
pub const PROMPT_EXPIRY_HOUR: u32 = 12;
/// Minute component of the prompt expiry stamp.
pub const PROMPT_EXPIRY_MINUTE: u32 = 30;

/// The current instant in Europe/London.
#[must_use]
pub fn now_london() -> DateTime<Tz> {
    Utc::now().with_timezone(&LONDON)
}

/// Offset aligning a wall-clock instant with the Rulebook's 19:31
/// trading-day boundary: 19:31 plus this offset lands on the next
/// calendar date.
#[must_use]
pub fn trading_day_cutoff() -> Duration {
    Duration::minutes(4 * 60 + 29)
}

/// The trading date a London instant belongs to under the 19:31 rule.
///
/// Applied on the wall-clock (naive local) representation, so a DST
/// transition earlier in the day does not shift the boundary.
#[must_use]
pub fn trading_date(reference: DateTime<Tz>) -> NaiveDate {
    (reference.naive_local() + trading_day_cutoff()).date()
}

/// Stamps a calendar date with the 12:30 Europe/London prompt expiry.
#[must_use]
pub fn at_prompt_expiry(date: NaiveDate) -> DateTime<Tz> {
    let local = date
        .and_hms_opt(PROMPT_EXPIRY_HOUR, PROMPT_EXPIRY_MINUTE, 0)
        .expect("12:30 is a valid wall-clock time");
    LONDON
        .from_local_datetime(&local)
        .single()
        .expect("12:30 is never skipped or ambiguous in Europe/London")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_at_prompt_expiry() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
        let stamped = at_prompt_expiry(date);

        assert_eq!(stamped.hour(), 12);
        assert_eq!(stamped.minute(), 30);
        assert_eq!(stamped.date_naive(), date);
    }

    #[test]
    fn test_at_prompt_expiry_on_dst_transition_days() {
        // Clocks go forward 2024-03-31 and back 2024-10-27; 12:30 exists
        // exactly once on both days.
        for (y, m, d) in [(2024, 3, 31), (2024, 10, 27)] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let stamped = at_prompt_expiry(date);
            assert_eq!(stamped.date_naive(), date);
        }
    }

    #[test]
    fn test_trading_date_rolls_at_19_31() {
        // 19:30 stays on the same trading date, 19:31 rolls to the next.
        let on_close = LONDON.with_ymd_and_hms(2024, 12, 24, 19, 30, 0).unwrap();
        let after_close = LONDON.with_ymd_and_hms(2024, 12, 24, 19, 31, 0).unwrap();

        assert_eq!(
            trading_date(on_close),
            NaiveDate::from_ymd_opt(2024, 12, 24).unwrap()
        );
        assert_eq!(
            trading_date(after_close),
            NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()
        );
    }
}
