use crate::config::Config;
use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, NaiveDate, NaiveTime, Utc};

/// Display formats used for the `fecha` and `hora` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formats {
    pub date: String,
    pub time: String,
}

impl Default for Formats {
    fn default() -> Self {
        Self {
            date: "%d/%m/%Y".to_string(),
            time: "%H:%M".to_string(),
        }
    }
}

impl Formats {
    /// Formats from the configuration. A malformed strftime string is a
    /// configuration error.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        check_format("date_format", &cfg.date_format)?;
        check_format("time_format", &cfg.time_format)?;
        Ok(Self {
            date: cfg.date_format.clone(),
            time: cfg.time_format.clone(),
        })
    }
}

fn check_format(name: &str, fmt: &str) -> AppResult<()> {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::Config(format!("{name} is not a valid format: {fmt}")));
    }
    Ok(())
}

/// Date and time a record is stamped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl Stamp {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Current wall-clock time at a fixed UTC offset (hours).
    pub fn now(utc_offset_hours: i32) -> AppResult<Self> {
        let offset = utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                AppError::Config(format!("utc_offset_hours out of range: {utc_offset_hours}"))
            })?;
        let local = Utc::now().with_timezone(&offset).naive_local();
        Ok(Self::new(local.date(), local.time()))
    }

    pub fn date_str(&self, formats: &Formats) -> String {
        self.date.format(&formats.date).to_string()
    }

    pub fn time_str(&self, formats: &Formats) -> String {
        self.time.format(&formats.time).to_string()
    }
}
