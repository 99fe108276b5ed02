//! Key handling
//!
//! ## Responsibilities
//! - Reject structurally unsafe keys before they reach the filesystem
//! - Map accepted keys to fixed-width, filesystem-safe file names
//!
//! Validation and mapping are independent: the validator guards against
//! malformed caller input, the mapper guarantees the on-disk name is safe
//! for any input it is given.

mod mapper;
mod validator;

pub use mapper::file_name_for;
pub use validator::{validate, InvalidKeyReason, MAX_KEY_LEN};
