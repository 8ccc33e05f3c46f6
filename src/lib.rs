//! # ogm
//!
//! Belgian structured communications ("OGM" / "VCS"): the 12-digit payment
//! reference with a mod-97 check pair, written either as bare digits
//! (`123456789095`) or as `+++123/4567/89095+++`.
//!
//! The crate validates both notations, generates fresh references, finds a
//! reference embedded in free text, and recovers references whose `+`
//! characters were turned into spaces by form-urlencoded transport.
//! Failures are values ([`core::Rejection`]), never panics.
//!
//! ## Quick Start
//!
//! ```rust
//! use ogm::core::*;
//!
//! let code = parse_structured("+++123/4567/89095+++").unwrap();
//! assert_eq!(code.to_string(), "123456789095");
//! assert!(validate(code).is_ok());
//!
//! let bad = parse_numeric("123456789000").unwrap();
//! let err = validate(bad).unwrap_err();
//! assert_eq!(err.to_string(), "invalid check digits: expected 95 for base 1234567890");
//! assert_eq!(render(bad).as_str(), "+++123/4567/89000+++");
//!
//! assert_eq!(compute_check("0000000097"), "97");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Code types, check digits, notation parsing and rendering |
//! | `extract` | Find a code of either notation inside a line of text |
//! | `generate` | Random checksum-valid codes from the OS CSPRNG |
//! | `recovery` | `+`/space recovery cascade and query-string readings |
//! | `service` | [`service::StructuredComm`], the request-layer facade |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "extract")]
pub mod extract;

#[cfg(feature = "generate")]
pub mod generate;

#[cfg(feature = "recovery")]
pub mod recovery;

#[cfg(feature = "service")]
pub mod service;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
