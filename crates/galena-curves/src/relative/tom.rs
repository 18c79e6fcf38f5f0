//! The TOM (Cash Today) prompt date.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;

use galena_core::dates::is_weekend;
use galena_core::london::{at_prompt_expiry, trading_date};
use galena_core::types::{split_holidays, Holiday};

use crate::error::CurveResult;
use crate::relative::MAX_SEARCH_DAYS;

/// The TOM prompt for a reference instant, when one exists.
///
/// Per the Rulebook definition of Cash Today: the first Settlement
/// Business Day after the Business Day the trade belongs to — save that
/// there is no Prompt Date for Cash Today where that day is a Business
/// Day but not a Settlement Business Day. In that case, and when the
/// bounded scan finds no candidate, this returns `None`.
pub fn tom_date(
    reference: DateTime<Tz>,
    holidays: &[Holiday],
) -> CurveResult<Option<DateTime<Tz>>> {
    let split = split_holidays(holidays);
    let mut current = trading_date(reference);
    let mut business_days_passed = 0u32;

    for _ in 0..MAX_SEARCH_DAYS {
        if is_weekend(current) || split.is_full_closure(current) {
            // closed days neither count nor settle
        } else if split.is_non_settlement(current) {
            if business_days_passed != 0 {
                // Cash Today is a business day but not a settlement
                // business day: no TOM prompt.
                return Ok(None);
            }
            business_days_passed += 1;
        } else if business_days_passed != 0 {
            return Ok(Some(at_prompt_expiry(current)));
        } else {
            business_days_passed += 1;
        }

        current += Duration::days(1);
    }

    Ok(None)
}
