use crate::config::Config;
use crate::error::Error;
use crate::timesheet::models::{PayPeriod, Timesheet, WEEK_SPLIT_INDEX};
use crate::timesheet::{calculator, time};
use chrono::Utc;
use std::env;
use std::fs;
use tracing::{info, warn};

/// Load the configured timesheet, tally it, and print the period report
pub fn run(config: &Config) -> miette::Result<()> {
    let raw = fs::read_to_string(&config.sheet_path).map_err(Error::from)?;
    let sheet = Timesheet::from_toml(&raw)?;

    // A sheet that does not name its period gets the current one
    let period = sheet.pay_period.unwrap_or_else(|| {
        let today = Utc::now().with_timezone(&config.tz()).date_naive();
        PayPeriod::containing(config.period_anchor, today)
    });

    let result = calculator::compute(&sheet.entries());

    if env::var("TIMESHEET_JSON").is_ok() {
        let json = serde_json::to_string_pretty(&result).map_err(Error::from)?;
        println!("{}", json);
        return Ok(());
    }

    println!("Pay period {}", period);
    for (index, total) in result.day_totals.iter().enumerate() {
        let date = period
            .day_date(index as u8)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| format!("day {}", index + 1));
        let marker = if result.day_valid[index] { "" } else { "  (invalid)" };
        println!("  {}  {}{}", date, time::format_hours(*total), marker);

        if index == WEEK_SPLIT_INDEX {
            println!("  Week one total: {}", time::format_hours(result.week_one_total));
        }
    }
    println!("  Week two total: {}", time::format_hours(result.week_two_total));
    println!("Grand total: {}", time::format_hours(result.grand_total));

    if let Some(cap) = config.hours_cap {
        if result.grand_total > cap {
            warn!(
                "Grand total {} exceeds the {} hour allotment for this pay period",
                time::format_hours(result.grand_total),
                time::format_hours(cap)
            );
        }
    }

    if result.submit_enabled {
        info!("Timesheet is ready to submit");
    } else {
        info!("Timesheet is not ready to submit");
    }

    Ok(())
}
