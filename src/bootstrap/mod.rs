//! Startup sequence that brings the database to a usable state.
//!
//! 1. select the backend from the connection descriptor
//! 2. open the pool with the configured limits
//! 3. on the `master` node only, migrate the seven record types in order
//! 4. on the `master` node only, create the root account when no user exists
//!
//! Every failure is fatal for the process; nothing is retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use relay_bootstrap::bootstrap::structs::database_bootstrapper::DatabaseBootstrapper;
//!
//! let connector = DatabaseBootstrapper::from_configuration(&config).run().await?;
//! // serve...
//! connector.close().await?;
//! ```

/// Bootstrap data structures.
pub mod structs;

/// Implementation blocks for the bootstrap sequence.
pub mod impls;

#[cfg(test)]
mod tests;
