//! Fuel fill-up form: a pump purchase or a load into the bulk tank.

use super::{FillLocation, Fleet, Formats, Stamp, require_user};
use crate::errors::AppResult;
use crate::store::Fields;
use crate::store::schema::col;

/// Inputs that depend on where the fuel was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillDetails {
    Pump {
        liters: u64,
        price: u64,
        old_seal: u64,
        new_seal: u64,
    },
    Tank {
        meter_start: u64,
        meter_end: u64,
        liters: u64,
        old_seal: u64,
        new_seal: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillUpForm {
    pub vehicle: u32,
    pub details: FillDetails,
    pub comment: Option<String>,
    pub entered_by: String,
}

impl FillUpForm {
    pub fn location(&self) -> FillLocation {
        match self.details {
            FillDetails::Pump { .. } => FillLocation::Pump,
            FillDetails::Tank { .. } => FillLocation::Tank,
        }
    }

    /// Build the row values for the fill-up dataset.
    ///
    /// Pump fills never carry meter readings and tank fills never carry a
    /// price; those columns fall back to their defaults in the store.
    pub fn to_fields(&self, fleet: &Fleet, stamp: &Stamp, formats: &Formats) -> AppResult<Fields> {
        let vehicle = fleet.validate(self.vehicle)?;
        let user = require_user(&self.entered_by)?;

        let mut fields = Fields::new()
            .with_int(col::VEHICLE, u64::from(vehicle))
            .with_text(col::DATE, stamp.date_str(formats))
            .with_text(col::TIME, stamp.time_str(formats))
            .with_text(col::FILL_LOCATION, self.location().code());

        fields = match &self.details {
            FillDetails::Pump {
                liters,
                price,
                old_seal,
                new_seal,
            } => fields
                .with_int(col::OLD_SEAL, *old_seal)
                .with_int(col::LITERS_FILLED, *liters)
                .with_int(col::PRICE, *price)
                .with_int(col::NEW_SEAL, *new_seal),
            FillDetails::Tank {
                meter_start,
                meter_end,
                liters,
                old_seal,
                new_seal,
            } => fields
                .with_int(col::OLD_SEAL, *old_seal)
                .with_int(col::METER_START, *meter_start)
                .with_int(col::LITERS_FILLED, *liters)
                .with_int(col::METER_END, *meter_end)
                .with_int(col::NEW_SEAL, *new_seal),
        };

        if let Some(comment) = &self.comment {
            fields = fields.with_text(col::COMMENT, comment.clone());
        }

        Ok(fields.with_text(col::USER, user))
    }
}
