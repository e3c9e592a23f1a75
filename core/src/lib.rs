//! Core domain logic for Roster.
//!
//! - **`registry`**: the ordered, observable in-memory collection of user records
//! - **`validation`**: field-level checks run before any registry mutation

pub mod registry;
pub mod validation;

pub use registry::{RegistryError, RegistryEvent, RegistryStore};
pub use validation::{parse_submission, validate};
