//! Locating a structured communication inside free text.
//!
//! Bank statement lines and remittance fields rarely hold a bare code. This
//! module finds the first occurrence of either notation in a line, then
//! hands it to the codec for parsing and checksum validation.
//!
//! # Example
//!
//! ```rust
//! use ogm::extract::*;
//! use ogm::core::Notation;
//!
//! let m = find_structured("Please pay +++123/4567/89095+++ today.").unwrap();
//! assert_eq!(m.as_str(), "+++123/4567/89095+++");
//!
//! // 13 consecutive digits are not a 12-digit code.
//! assert!(find_numeric("Code 1234567890950 (13 digits)").is_err());
//!
//! let code = identify("Ref 123456789095 attached", Notation::Numeric).unwrap();
//! assert_eq!(code.to_string(), "123456789095");
//! ```

mod scanner;

pub use scanner::{Match, find, find_all, find_numeric, find_structured, identify};
