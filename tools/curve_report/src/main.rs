//! Curve report harness.
//!
//! Builds a futures curve from a holiday calendar JSON and prints the
//! derived dates — used to eyeball a calendar change before it reaches
//! the overnight run.
//!
//! ```text
//! curve_report <holidays.json> [--date YYYY-MM-DDTHH:MM] [--months N]
//! ```

use std::env;
use std::fs;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use galena_core::london::LONDON;
use galena_core::types::Holiday;
use galena_curves::{build_curve, DEFAULT_FORWARD_MONTHS};

struct Args {
    holidays_path: String,
    reference: Option<DateTime<Tz>>,
    forward_months: u32,
}

fn parse_args() -> Result<Args> {
    let mut holidays_path = None;
    let mut reference = None;
    let mut forward_months = DEFAULT_FORWARD_MONTHS;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--date" => {
                let raw = args.next().context("--date requires a value")?;
                let local = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M")
                    .with_context(|| format!("cannot parse --date {raw}"))?;
                let zoned = LONDON
                    .from_local_datetime(&local)
                    .single()
                    .with_context(|| format!("{raw} is skipped or ambiguous in Europe/London"))?;
                reference = Some(zoned);
            }
            "--months" => {
                let raw = args.next().context("--months requires a value")?;
                forward_months = raw
                    .parse()
                    .with_context(|| format!("cannot parse --months {raw}"))?;
            }
            _ if holidays_path.is_none() => holidays_path = Some(arg),
            _ => bail!("unexpected argument: {arg}"),
        }
    }

    Ok(Args {
        holidays_path: holidays_path
            .context("usage: curve_report <holidays.json> [--date YYYY-MM-DDTHH:MM] [--months N]")?,
        reference,
        forward_months,
    })
}

fn run(args: &Args) -> Result<()> {
    let raw = fs::read_to_string(&args.holidays_path)
        .with_context(|| format!("cannot read {}", args.holidays_path))?;
    let holidays: Vec<Holiday> =
        serde_json::from_str(&raw).context("holiday calendar does not parse")?;
    let non_prompts: Vec<_> = holidays.iter().map(|h| h.date).collect();

    let curve = build_curve(
        &non_prompts,
        &holidays,
        args.forward_months,
        args.reference,
    )?
    .with_broken_dates();

    println!("cash        {}", curve.cash);
    match curve.tom {
        Some(tom) => println!("tom         {tom}"),
        None => println!("tom         (no prompt date for cash today)"),
    }
    println!("three_month {}", curve.three_month);
    println!(
        "weeklies    {} from {} to {}",
        curve.weeklies.len(),
        curve.weeklies.first().map_or_else(|| "-".to_string(), |d| d.to_string()),
        curve.weeklies.last().map_or_else(|| "-".to_string(), |d| d.to_string()),
    );
    println!("monthlies   {}", curve.monthlies.len());
    println!(
        "broken      {}",
        curve.broken_dates().map_or(0, |dates| dates.len())
    );

    println!("\nprompt list:");
    for prompt in curve.prompt_list() {
        println!("  {prompt}");
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let result = parse_args().and_then(|args| run(&args));
    if let Err(err) = result {
        eprintln!("curve_report: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
