//! The Cash (SPOT) prompt date.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use tracing::error;

use galena_core::dates::is_weekend;
use galena_core::london::{at_prompt_expiry, trading_date};
use galena_core::types::{split_holidays, Holiday};

use crate::error::{CurveError, CurveResult};
use crate::relative::MAX_SEARCH_DAYS;

/// The Cash prompt for a reference instant.
///
/// Per the Rulebook definition of Cash: in relation to the period between
/// 19:31 on one Business Day and 19:30 on the next, the first Settlement
/// Business Day which falls after the next following Business Day.
///
/// Weekends and full-closure dates are skipped without counting as
/// business days; non-settlement business days count but cannot host the
/// prompt.
pub fn cash_date(reference: DateTime<Tz>, holidays: &[Holiday]) -> CurveResult<DateTime<Tz>> {
    let split = split_holidays(holidays);
    let mut current = trading_date(reference);
    let mut business_days_passed = 0u32;

    for _ in 0..MAX_SEARCH_DAYS {
        if is_weekend(current) || split.is_full_closure(current) {
            current += Duration::days(1);
            continue;
        }

        if business_days_passed > 1 && !split.is_non_settlement(current) {
            // this is the definition of a cash date
            return Ok(at_prompt_expiry(current));
        }

        business_days_passed += 1;
        current += Duration::days(1);
    }

    error!(%reference, "cash date search exhausted without finding a settlement day");
    Err(CurveError::unresolved("cash date search", MAX_SEARCH_DAYS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use galena_core::london::LONDON;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cash_over_plain_days() {
        // Wed -> Fri when nothing is in the way.
        let reference = LONDON.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        let cash = cash_date(reference, &[]).unwrap();
        assert_eq!(cash, LONDON.with_ymd_and_hms(2024, 1, 12, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_cash_skips_weekend() {
        // Thu -> Mon across the weekend.
        let reference = LONDON.with_ymd_and_hms(2024, 1, 11, 9, 0, 0).unwrap();
        let cash = cash_date(reference, &[]).unwrap();
        assert_eq!(cash.date_naive(), date(2024, 1, 15));
    }

    #[test]
    fn test_non_settlement_day_counts_but_cannot_host() {
        // Fri 2024-01-12 is a business day but not settlement-eligible:
        // it still counts toward the two business days, and Cash slides
        // to Monday.
        let holidays = [Holiday::non_settlement(date(2024, 1, 12))];
        let reference = LONDON.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        let cash = cash_date(reference, &holidays).unwrap();
        assert_eq!(cash.date_naive(), date(2024, 1, 15));
    }

    #[test]
    fn test_full_closure_does_not_count() {
        // Thu 2024-01-11 fully closed: it is skipped entirely, pushing
        // the count out by a day.
        let holidays = [Holiday::closure(date(2024, 1, 11))];
        let reference = LONDON.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        let cash = cash_date(reference, &holidays).unwrap();
        assert_eq!(cash.date_naive(), date(2024, 1, 15));
    }

    #[test]
    fn test_degenerate_calendar_fails_hard() {
        // Every weekday for five weeks fully closed: the bounded scan
        // must fail rather than loop or fabricate a date.
        let mut holidays = Vec::new();
        let mut day = date(2024, 1, 10);
        while day < date(2024, 2, 14) {
            holidays.push(Holiday::closure(day));
            day += Duration::days(1);
        }
        let reference = LONDON.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();

        assert!(matches!(
            cash_date(reference, &holidays),
            Err(CurveError::UnresolvedSearch { .. })
        ));
    }
}
