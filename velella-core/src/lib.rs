//! Shared foundation for the velella bioinformatics crates.
//!
//! `velella-core` holds what the domain crates (`velella-seq`,
//! `velella-tax`) have in common:
//!
//! - **Error types** — [`VelellaError`] and [`Result`] for structured error
//!   handling

pub mod error;

pub use error::{Result, VelellaError};
