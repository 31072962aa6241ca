pub mod config;
pub mod deduct;
pub mod fill;
pub mod log;
pub mod record;
pub mod view;
