//! Utility modules.
//!
//! Provides:
//! - [`format`] - Path helpers and display formatting (sizes, names, dates)
//! - [`dom`] - Browser DOM helpers
//! - [`url`] - Percent-encoding of paths in URL hashes

pub mod dom;
pub mod format;
pub mod url;
