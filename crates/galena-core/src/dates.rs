//! Calendar-date arithmetic helpers.
//!
//! Month arithmetic here is *clamped*: adding one month to January 31
//! yields the last day of February. This matches the exchange's calendar
//! conventions for window and horizon calculations.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Weekday};

/// Adds a number of calendar months to a date, clamping the day to the
/// last valid day of the target month.
#[must_use]
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .expect("date stays well within chrono's representable range")
}

/// Number of whole calendar months separating two instants.
///
/// Returns the largest `k` such that `earlier` advanced by `k` clamped
/// months is on or before `later`. Callers pass `later >= earlier`.
#[must_use]
pub fn whole_months_between(later: NaiveDateTime, earlier: NaiveDateTime) -> i32 {
    let estimate = (later.year() - earlier.year()) * 12 + later.month() as i32
        - earlier.month() as i32;
    if estimate < 0 {
        return estimate;
    }
    let shifted = earlier
        .checked_add_months(Months::new(estimate as u32))
        .expect("date stays well within chrono's representable range");
    if shifted <= later {
        estimate
    } else {
        estimate - 1
    }
}

/// The nth occurrence of a weekday within a month (1-based).
///
/// Returns `None` when the month has no nth occurrence (e.g. a fifth
/// Friday in a 30-day month).
#[must_use]
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let first_weekday = first_of_month.weekday();

    let days_until = (weekday.num_days_from_monday() as i32
        - first_weekday.num_days_from_monday() as i32)
        .rem_euclid(7) as u32;

    let day = 1 + days_until + (n - 1) * 7;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// The first occurrence of `weekday` strictly after `date`.
#[must_use]
pub fn next_weekday_after(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut result = date + Duration::days(1);
    while result.weekday() != weekday {
        result += Duration::days(1);
    }
    result
}

/// Whether the date falls on a Saturday or Sunday.
///
/// LME settlement weekends are fixed Saturday/Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
