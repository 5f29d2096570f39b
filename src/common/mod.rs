//! Common utilities shared by the configuration and bootstrap code.
//!
//! # Utilities
//!
//! - Environment value parsing (`parse_positive`, `parse_flag`)
//!
//! # Example
//!
//! ```rust,ignore
//! use relay_bootstrap::common::common::parse_positive;
//!
//! let open: u32 = parse_positive("SQL_MAX_OPEN_CONNS", "500")?;
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
