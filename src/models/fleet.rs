use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// The fixed set of vehicle numbers a record may refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    numbers: Vec<u32>,
}

impl Fleet {
    pub fn new(mut numbers: Vec<u32>) -> Self {
        numbers.sort_unstable();
        numbers.dedup();
        Self { numbers }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.fleet.clone())
    }

    pub fn contains(&self, vehicle: u32) -> bool {
        self.numbers.binary_search(&vehicle).is_ok()
    }

    pub fn validate(&self, vehicle: u32) -> AppResult<u32> {
        if self.contains(vehicle) {
            Ok(vehicle)
        } else {
            Err(AppError::InvalidVehicle(vehicle))
        }
    }

    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }
}
