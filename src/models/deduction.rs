use super::{Fleet, Formats, Stamp, require_user};
use crate::errors::AppResult;
use crate::store::Fields;
use crate::store::schema::col;

/// Manual deduction of fuel stock consumed by a vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionForm {
    pub vehicle: u32,
    /// Approximate liters consumed; left unset when unknown.
    pub liters: Option<u64>,
    pub comment: Option<String>,
    pub entered_by: String,
}

impl DeductionForm {
    pub fn to_fields(&self, fleet: &Fleet, stamp: &Stamp, formats: &Formats) -> AppResult<Fields> {
        let vehicle = fleet.validate(self.vehicle)?;
        let user = require_user(&self.entered_by)?;

        let mut fields = Fields::new()
            .with_int(col::VEHICLE, u64::from(vehicle))
            .with_text(col::DATE, stamp.date_str(formats))
            .with_text(col::TIME, stamp.time_str(formats));

        if let Some(liters) = self.liters {
            fields = fields.with_int(col::LITERS_DEDUCTED, liters);
        }
        if let Some(comment) = &self.comment {
            fields = fields.with_text(col::COMMENT, comment.clone());
        }

        Ok(fields.with_text(col::USER, user))
    }
}
