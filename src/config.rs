use crate::error::{config_error, TallyResult};
use chrono::NaiveDate;
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Default timezone for resolving "today" into a pay period
pub const DEFAULT_TIMEZONE: &str = "America/Detroit";

/// Default timesheet file path
pub const DEFAULT_SHEET_PATH: &str = "timesheet.toml";

/// Start date of a known pay period; all periods sit on this 14-day grid
pub const DEFAULT_PERIOD_ANCHOR: &str = "2019-01-01";

/// Main configuration structure for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the timesheet TOML file to tally
    pub sheet_path: String,
    /// Timezone used when the sheet does not name its pay period
    pub timezone: String,
    /// Start date of any known pay period
    pub period_anchor: NaiveDate,
    /// Hours allotted per pay period, if the employee has an allotment
    pub hours_cap: Option<f64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> TallyResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let sheet_path =
            env::var("TIMESHEET_FILE").unwrap_or_else(|_| DEFAULT_SHEET_PATH.to_string());

        // Timezone must be a real IANA name
        let timezone = env::var("TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());
        timezone
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Invalid TIMEZONE value: {}", timezone)))?;

        let period_anchor = env::var("TIMESHEET_PERIOD_ANCHOR")
            .unwrap_or_else(|_| DEFAULT_PERIOD_ANCHOR.to_string());
        let period_anchor = NaiveDate::parse_from_str(&period_anchor, "%Y-%m-%d")
            .map_err(|_| config_error("Invalid TIMESHEET_PERIOD_ANCHOR format, expected YYYY-MM-DD"))?;

        let hours_cap = match env::var("TIMESHEET_HOURS_CAP") {
            Ok(raw) => Some(
                raw.parse::<f64>()
                    .map_err(|_| config_error("Invalid TIMESHEET_HOURS_CAP format"))?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            sheet_path,
            timezone,
            period_anchor,
            hours_cap,
        })
    }

    /// Parsed timezone; validated at load time, so a stored config that
    /// somehow carries a bad name falls back to UTC
    pub fn tz(&self) -> Tz {
        self.timezone.parse().unwrap_or(Tz::UTC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timezone_parses() {
        assert!(DEFAULT_TIMEZONE.parse::<Tz>().is_ok());
    }

    #[test]
    fn test_tz_falls_back_to_utc() {
        let config = Config {
            sheet_path: DEFAULT_SHEET_PATH.to_string(),
            timezone: "Not/AZone".to_string(),
            period_anchor: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
            hours_cap: None,
        };
        assert_eq!(config.tz(), Tz::UTC);
    }
}
