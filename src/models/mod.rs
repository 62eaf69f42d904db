//! Value types for the crate.
//!
//! - [`Cidr`] - canonical IPv4 CIDR block
//! - [`CidrError`] - construction errors

mod cidr;
mod error;

// Re-export public types
pub use cidr::{get_cidr_mask, Cidr, MAX_LENGTH};
pub use error::CidrError;
