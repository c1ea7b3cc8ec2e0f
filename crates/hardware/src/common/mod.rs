//! Common types shared across the simulator.
//!
//! Currently this holds the error taxonomy; see [`error`].

/// Decode, loader, config and simulation errors.
pub mod error;

pub use error::{ConfigError, DecodeError, LoaderError, SimError};
