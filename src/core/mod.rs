//! Core components of the `btc-fund-radar` crate.
//!
//! This module contains the foundational building blocks shared by every section:
//! - The [`RadarClient`] and its builder.
//! - The [`RadarError`] type.
//! - Startup [`Secrets`].
//! - Internal networking helpers.

/// The client (`RadarClient`), builder, and endpoint defaults.
pub mod client;
/// Startup secrets loading and validation.
pub mod config;
/// The primary error type (`RadarError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::RadarClient`
pub use client::{RadarClient, RadarClientBuilder};
pub use config::Secrets;
pub use error::RadarError;
