//! Shared primitives for the Cyanea bioinformatics ecosystem.
//!
//! `cyanea-core` provides the foundation that the other Cyanea crates build on:
//!
//! - **Error types**: [`CyaneaError`], [`InvalidCharacter`] and [`Result`] for structured error handling

pub mod error;

pub use error::{CyaneaError, InvalidCharacter, Result};
