//! Implementation blocks for bootstrap types.

pub mod bootstrap_settings;
pub mod database_bootstrapper;
