use crate::blob::BlobStore;
use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::errors::AppResult;
use crate::models::{DeductionForm, Fleet, Formats, Stamp};
use crate::store::{AppendOutcome, DEDUCTION};

/// High-level business logic for the `deduct` command.
pub struct DeductLogic;

impl DeductLogic {
    pub fn apply(
        cfg: &Config,
        blobs: &dyn BlobStore,
        form: &DeductionForm,
        stamp: &Stamp,
    ) -> AppResult<AppendOutcome> {
        let fields = form.to_fields(&Fleet::from_config(cfg), stamp, &Formats::from_config(cfg)?)?;

        RecordLogic::append(
            cfg,
            blobs,
            &cfg.deduction_dataset,
            &DEDUCTION,
            &fields,
            "deduct",
        )
    }
}
