use crate::blob::BlobStore;
use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::errors::AppResult;
use crate::models::{FillUpForm, Fleet, Formats, Stamp};
use crate::store::{AppendOutcome, FILL_UP};

/// High-level business logic for the `fill` command.
pub struct FillLogic;

impl FillLogic {
    pub fn apply(
        cfg: &Config,
        blobs: &dyn BlobStore,
        form: &FillUpForm,
        stamp: &Stamp,
    ) -> AppResult<AppendOutcome> {
        let fields = form.to_fields(&Fleet::from_config(cfg), stamp, &Formats::from_config(cfg)?)?;

        RecordLogic::append(
            cfg,
            blobs,
            &cfg.fill_up_dataset,
            &FILL_UP,
            &fields,
            &format!("fill_{}", form.location().label().to_lowercase()),
        )
    }
}
