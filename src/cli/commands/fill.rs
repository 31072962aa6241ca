use crate::blob::open_store;
use crate::cli::parser::{Commands, FillKind};
use crate::config::Config;
use crate::core::fill::FillLogic;
use crate::errors::AppResult;
use crate::models::{FillDetails, FillUpForm, Stamp};

/// Record a pump or tank fill-up.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fill { kind } = cmd {
        //
        // 1. Collect the form
        //
        let (vehicle, details, comment) = match kind {
            FillKind::Pump {
                vehicle,
                old_seal,
                liters,
                price,
                new_seal,
                comment,
            } => (
                *vehicle,
                FillDetails::Pump {
                    liters: *liters,
                    price: *price,
                    old_seal: *old_seal,
                    new_seal: *new_seal,
                },
                comment.clone(),
            ),
            FillKind::Tank {
                vehicle,
                old_seal,
                meter_start,
                liters,
                meter_end,
                new_seal,
                comment,
            } => (
                *vehicle,
                FillDetails::Tank {
                    meter_start: *meter_start,
                    meter_end: *meter_end,
                    liters: *liters,
                    old_seal: *old_seal,
                    new_seal: *new_seal,
                },
                comment.clone(),
            ),
        };

        let form = FillUpForm {
            vehicle,
            details,
            comment,
            entered_by: super::operator(cfg)?,
        };

        //
        // 2. Stamp and persist
        //
        let stamp = Stamp::now(cfg.utc_offset_hours)?;
        let blobs = open_store(&cfg.store)?;
        FillLogic::apply(cfg, blobs.as_ref(), &form, &stamp)?;
    }

    Ok(())
}
