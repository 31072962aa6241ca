use crate::errors::{AppError, AppResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillLocation {
    Pump, // Surtidor
    Tank, // Tanque
}

impl FillLocation {
    /// Value stored in the `lugarCarga` column.
    pub fn code(&self) -> &'static str {
        match self {
            FillLocation::Pump => "Surtidor",
            FillLocation::Tank => "Tanque",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FillLocation::Pump => "Pump",
            FillLocation::Tank => "Tank",
        }
    }

    /// Accepts both the stored values and the English names, any case.
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "surtidor" | "pump" => Ok(FillLocation::Pump),
            "tanque" | "tank" => Ok(FillLocation::Tank),
            _ => Err(AppError::InvalidFillLocation(code.to_string())),
        }
    }
}

impl fmt::Display for FillLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
