//! Integration tests validated against the LME Rulebook worked examples.
//!
//! These tests drive the engine with the real 2023–2025 LME holiday
//! calendar (closure flags included) and pin the derived Cash, TOM, 3M,
//! weekly, and monthly prompts to independently checked values.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Weekday};
use chrono_tz::Tz;
use std::fs;

use galena_core::calendars::good_friday;
use galena_core::dates::whole_months_between;
use galena_core::london::LONDON;
use galena_core::types::Holiday;
use galena_curves::{
    build_curve, build_prompt_map, cash_date, monthly_prompts, three_month_date, tom_date,
    weekly_prompts, PromptMap,
};

/// Path to the LME holiday calendar fixture.
const FIXTURE_FILE: &str = "tests/fixtures/lme_holidays_2023_2025.json";

fn load_holidays() -> Vec<Holiday> {
    let raw = fs::read_to_string(FIXTURE_FILE).expect("holiday fixture readable");
    serde_json::from_str(&raw).expect("holiday fixture parses")
}

/// Every fixture date, closure or not, is an LME non-prompt date.
fn non_prompt_dates(holidays: &[Holiday]) -> Vec<NaiveDate> {
    holidays.iter().map(|h| h.date).collect()
}

fn london(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
    LONDON.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fixture_prompt_map(reference: DateTime<Tz>) -> PromptMap {
    let holidays = load_holidays();
    build_prompt_map(&non_prompt_dates(&holidays), Some(reference)).unwrap()
}

// ============================================================================
// Good Friday
// ============================================================================

#[test]
fn good_friday_reference_table() {
    let cases = [
        (2022, date(2022, 4, 15)),
        (2023, date(2023, 4, 7)),
        (2024, date(2024, 3, 29)),
        (2025, date(2025, 4, 18)),
    ];
    for (year, expected) in cases {
        assert_eq!(good_friday(year).unwrap(), expected, "Good Friday {year}");
    }
}

#[test]
fn good_friday_rejects_out_of_range_years() {
    assert!(good_friday(1582).is_err());
    assert!(good_friday(4100).is_err());
}

// ============================================================================
// Prompt map structural properties
// ============================================================================

const MAP_REFERENCE_DATES: [(i32, u32, u32); 6] = [
    (2023, 1, 1),
    (2023, 6, 30),
    (2023, 11, 30),
    (2024, 4, 1),
    (2024, 11, 15),
    (2025, 3, 5),
];

#[test]
fn prompt_map_has_no_circular_mappings() {
    for (y, m, d) in MAP_REFERENCE_DATES {
        let map = fixture_prompt_map(london(y, m, d, 9, 0));

        for (key, value) in map.iter() {
            if key == value {
                continue;
            }
            let mut seen = Vec::new();
            let mut cursor = key;
            // Follow the chain until it fixes or leaves the window.
            while let Some(next) = map.resolve(cursor) {
                if next == cursor {
                    break;
                }
                assert!(
                    !seen.contains(&next),
                    "mapping loop from {key} via {value} (reference {y}-{m:02}-{d:02})"
                );
                seen.push(next);
                cursor = next;
            }
        }
    }
}

#[test]
fn prompt_map_has_no_indirect_mappings() {
    for (y, m, d) in MAP_REFERENCE_DATES {
        let map = fixture_prompt_map(london(y, m, d, 9, 0));

        for (key, value) in map.iter() {
            if key == value {
                continue;
            }
            // The window end can be open: targets past the last mapped
            // date cannot be re-checked, same as the source system.
            if let Some(second_hop) = map.resolve(value) {
                assert_eq!(
                    second_hop, value,
                    "indirect mapping {key} -> {value} -> {second_hop}"
                );
            }
        }
    }
}

#[test]
fn prompt_map_build_is_idempotent() {
    let holidays = load_holidays();
    let non_prompts = non_prompt_dates(&holidays);
    let reference = london(2024, 11, 15, 9, 0);

    let first = build_prompt_map(&non_prompts, Some(reference)).unwrap();
    let second = build_prompt_map(&non_prompts, Some(reference)).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Three-month date
// ============================================================================

#[test]
fn three_month_reference_cases() {
    let cases = [
        (london(2023, 11, 30, 15, 35), london(2024, 2, 29, 12, 30)),
        (london(2024, 2, 6, 15, 35), london(2024, 5, 7, 12, 30)),
        (london(2024, 3, 1, 5, 35), london(2024, 5, 31, 12, 30)),
        (london(2024, 11, 15, 0, 0), london(2025, 2, 14, 12, 30)),
        (london(2025, 8, 30, 0, 0), london(2025, 11, 28, 12, 30)),
        (london(2025, 9, 26, 0, 0), london(2025, 12, 29, 12, 30)),
    ];

    for (reference, expected) in cases {
        let map = fixture_prompt_map(reference);
        let result = three_month_date(reference, &map).unwrap();
        assert_eq!(result, expected, "3M for {reference}");
    }
}

#[test]
fn three_month_stays_in_target_month() {
    // 2024-05-06 is a non-prompt: the naive guess rolls to 05-07, which
    // must not escape May.
    let reference = london(2024, 2, 6, 15, 35);
    let map = fixture_prompt_map(reference);
    let result = three_month_date(reference, &map).unwrap();

    assert_eq!(result.month(), 5);
    assert_eq!(result.date_naive(), date(2024, 5, 7));
}

// ============================================================================
// Cash date
// ============================================================================

#[test]
fn cash_date_reference_cases() {
    let holidays = load_holidays();
    let cases = [
        (london(2023, 11, 21, 12, 15), london(2023, 11, 24, 12, 30)),
        (london(2023, 11, 22, 15, 51), london(2023, 11, 24, 12, 30)),
        (london(2023, 11, 30, 15, 1), london(2023, 12, 4, 12, 30)),
        (london(2024, 3, 28, 13, 30), london(2024, 4, 3, 12, 30)),
        (london(2024, 12, 24, 13, 30), london(2024, 12, 30, 12, 30)),
        (london(2024, 12, 24, 19, 31), london(2024, 12, 31, 12, 30)),
        (london(2025, 6, 18, 3, 59), london(2025, 6, 20, 12, 30)),
        (london(2025, 6, 18, 20, 59), london(2025, 6, 23, 12, 30)),
        (london(2025, 6, 19, 14, 0), london(2025, 6, 23, 12, 30)),
        (london(2025, 6, 19, 19, 31), london(2025, 6, 24, 12, 30)),
        (london(2025, 10, 10, 12, 30), london(2025, 10, 14, 12, 30)),
        (london(2025, 10, 10, 19, 31), london(2025, 10, 15, 12, 30)),
    ];

    for (reference, expected) in cases {
        let result = cash_date(reference, &holidays).unwrap();
        assert_eq!(result, expected, "cash for {reference}");
    }
}

// ============================================================================
// TOM date
// ============================================================================

#[test]
fn tom_date_reference_cases() {
    let holidays = load_holidays();
    let cases = [
        (
            london(2023, 11, 21, 12, 15),
            Some(london(2023, 11, 22, 12, 30)),
        ),
        (london(2023, 11, 22, 15, 51), None),
        (
            london(2023, 11, 30, 15, 1),
            Some(london(2023, 12, 1, 12, 30)),
        ),
        (
            london(2024, 3, 28, 13, 30),
            Some(london(2024, 4, 2, 12, 30)),
        ),
        (
            london(2024, 12, 24, 13, 30),
            Some(london(2024, 12, 27, 12, 30)),
        ),
        (
            london(2024, 12, 24, 19, 31),
            Some(london(2024, 12, 30, 12, 30)),
        ),
        (london(2025, 6, 18, 3, 59), None),
        (
            london(2025, 6, 18, 20, 59),
            Some(london(2025, 6, 20, 12, 30)),
        ),
        (london(2025, 6, 19, 14, 0), Some(london(2025, 6, 20, 12, 30))),
        (
            london(2025, 6, 19, 19, 31),
            Some(london(2025, 6, 23, 12, 30)),
        ),
        (london(2025, 10, 10, 12, 30), None),
        (
            london(2025, 10, 10, 19, 31),
            Some(london(2025, 10, 14, 12, 30)),
        ),
    ];

    for (reference, expected) in cases {
        let result = tom_date(reference, &holidays).unwrap();
        assert_eq!(result, expected, "TOM for {reference}");
    }
}

// ============================================================================
// Weekly prompts
// ============================================================================

#[test]
fn weekly_prompts_are_wednesdays_to_the_sixth_month() {
    let references = [
        london(2023, 11, 21, 12, 15),
        london(2023, 11, 30, 15, 1),
        london(2024, 3, 28, 13, 30),
        london(2024, 12, 24, 13, 30),
        london(2025, 6, 18, 20, 59),
        london(2025, 10, 10, 19, 31),
    ];

    for reference in references {
        let map = fixture_prompt_map(reference);
        let weeklies = weekly_prompts(reference, &map).unwrap();
        assert!(!weeklies.is_empty(), "no weeklies for {reference}");

        for prompt in &weeklies {
            assert_eq!(prompt.weekday(), Weekday::Wed, "weekly {prompt}");
            assert_eq!((prompt.hour(), prompt.minute()), (12, 30));
        }

        let months_out = whole_months_between(
            weeklies.last().unwrap().naive_local(),
            reference.naive_local(),
        );
        assert!(
            months_out == 5 || months_out == 6,
            "weeklies for {reference} end {months_out} months out"
        );
    }
}

// ============================================================================
// Monthly prompts
// ============================================================================

#[test]
fn monthly_prompts_count_and_third_wednesday() {
    let cases = [
        (london(2023, 11, 21, 12, 15), 18u32),
        (london(2024, 12, 24, 19, 31), 24),
        (london(2025, 6, 19, 14, 0), 10),
        (london(2025, 10, 10, 19, 31), 6),
    ];

    for (reference, months) in cases {
        let prompts = monthly_prompts(reference, months);
        assert_eq!(prompts.len(), months as usize);

        for prompt in &prompts {
            assert_eq!(
                prompt.weekday(),
                Weekday::Wed,
                "monthly prompts fall on the third Wednesday"
            );
            assert!(
                (15..=21).contains(&prompt.day()),
                "third Wednesday is the 15th-21st"
            );
            assert_eq!(
                (prompt.hour(), prompt.minute(), prompt.second()),
                (12, 30, 0),
                "prompts expire at the close (12:30)"
            );
        }

        for pair in prompts.windows(2) {
            assert!(pair[0] < pair[1], "monthly prompts strictly increase");
        }

        let months_out = whole_months_between(
            prompts.last().unwrap().naive_local(),
            reference.naive_local(),
        );
        assert!(
            months_out <= months as i32,
            "last monthly further out than {months} months"
        );
    }
}

// ============================================================================
// Full curve
// ============================================================================

#[test]
fn full_curve_over_fixture_calendar() {
    let holidays = load_holidays();
    let non_prompts = non_prompt_dates(&holidays);
    let reference = london(2023, 11, 21, 12, 15);

    let curve = build_curve(&non_prompts, &holidays, 18, Some(reference))
        .unwrap()
        .with_broken_dates();

    assert_eq!(curve.cash, london(2023, 11, 24, 12, 30));
    assert_eq!(curve.tom, Some(london(2023, 11, 22, 12, 30)));
    assert_eq!(curve.three_month, london(2024, 2, 21, 12, 30));
    assert_eq!(curve.monthlies.len(), 18);

    let broken = curve.broken_dates().unwrap();
    assert!(!broken.is_empty());
    for dt in broken {
        assert!(*dt > curve.cash && *dt < curve.three_month);
    }

    let prompts = curve.prompt_list();
    assert!(prompts.contains(&curve.cash));
    assert!(prompts.contains(&curve.three_month));
    assert!(prompts.contains(&london(2023, 11, 22, 12, 30)));
    for pair in prompts.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}
