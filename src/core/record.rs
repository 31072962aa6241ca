use crate::blob::BlobStore;
use crate::config::Config;
use crate::core::log::ttlog;
use crate::errors::AppResult;
use crate::store::{AppendOutcome, Fields, MirrorStatus, RecordStore, Schema};
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

/// Shared append path of every form: persist, then report.
pub struct RecordLogic;

impl RecordLogic {
    pub fn append(
        cfg: &Config,
        blobs: &dyn BlobStore,
        key: &str,
        schema: &Schema,
        fields: &Fields,
        operation: &str,
    ) -> AppResult<AppendOutcome> {
        let store = RecordStore::new(blobs).with_mirror_dir(expand_tilde(&cfg.mirror_dir));
        let log_path = cfg.log_file();

        let outcome = match store.append(key, schema, fields) {
            Ok(o) => o,
            Err(e) => {
                ttlog(&log_path, &format!("{operation}_failed"), key, &e.to_string());
                return Err(e);
            }
        };

        if outcome.created {
            warning(format!(
                "Dataset '{key}' was not found in {}; created it with an empty {} table.",
                blobs.describe(),
                schema.name
            ));
        }

        if let MirrorStatus::Failed(reason) = &outcome.mirror {
            warning(format!("Local copy not updated ({reason})"));
        }

        success(format!(
            "Information saved successfully! (id {}, {} rows in '{key}')",
            outcome.id, outcome.rows
        ));

        ttlog(
            &log_path,
            operation,
            key,
            &format!("row {} appended ({} rows)", outcome.id, outcome.rows),
        );

        Ok(outcome)
    }
}
