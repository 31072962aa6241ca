pub mod config;
pub mod deduct;
pub mod fill;
pub mod fleet;
pub mod init;
pub mod log;
pub mod view;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Name recorded in `usuario`: `--user` wins over `operator` in the config.
pub(crate) fn operator(cfg: &Config) -> AppResult<String> {
    cfg.operator
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .ok_or(AppError::MissingUser)
}
