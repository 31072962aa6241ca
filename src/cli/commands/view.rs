use crate::blob::open_store;
use crate::cli::parser::{Commands, DatasetChoice};
use crate::config::Config;
use crate::core::view::{ViewLogic, ViewQuery};
use crate::errors::{AppError, AppResult};
use crate::models::Stamp;
use crate::store::{DEDUCTION, FILL_UP};
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View {
        dataset,
        date,
        today,
        json,
    } = cmd
    {
        let query = ViewQuery {
            date: match (date, today) {
                (Some(d), _) => Some(
                    parse_date(d, &cfg.date_format)
                        .ok_or_else(|| AppError::InvalidDate(d.to_string()))?,
                ),
                (None, true) => Some(Stamp::now(cfg.utc_offset_hours)?.date),
                (None, false) => None,
            },
        };

        let (key, schema) = match dataset {
            DatasetChoice::Fills => (&cfg.fill_up_dataset, &FILL_UP),
            DatasetChoice::Deductions => (&cfg.deduction_dataset, &DEDUCTION),
        };

        let blobs = open_store(&cfg.store)?;
        ViewLogic::show(cfg, blobs.as_ref(), key, schema, &query, *json)?;
    }

    Ok(())
}
