//! Core types, mod-97 check digits, and notation conversion.
//!
//! Everything here is pure and total: failures are returned as
//! [`Rejection`] values, never panics.

pub mod checksum;
mod error;
mod notation;
mod types;

pub use checksum::{check_value, compute_check, verify};
pub use error::*;
pub use notation::*;
pub use types::*;
