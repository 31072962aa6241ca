use crate::blob::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::deduct::DeductLogic;
use crate::errors::AppResult;
use crate::models::{DeductionForm, Stamp};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Deduct {
        vehicle,
        liters,
        comment,
    } = cmd
    {
        let form = DeductionForm {
            vehicle: *vehicle,
            liters: *liters,
            comment: comment.clone(),
            entered_by: super::operator(cfg)?,
        };

        let stamp = Stamp::now(cfg.utc_offset_hours)?;
        let blobs = open_store(&cfg.store)?;
        DeductLogic::apply(cfg, blobs.as_ref(), &form, &stamp)?;
    }

    Ok(())
}
