pub mod deduction;
pub mod fill_location;
pub mod fill_up;
pub mod fleet;
pub mod stamp;

pub use deduction::DeductionForm;
pub use fill_location::FillLocation;
pub use fill_up::{FillDetails, FillUpForm};
pub use fleet::Fleet;
pub use stamp::{Formats, Stamp};

use crate::errors::{AppError, AppResult};

/// `enteredBy` is mandatory on every record.
pub(crate) fn require_user(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::MissingUser);
    }
    Ok(trimmed.to_string())
}
