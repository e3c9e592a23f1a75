//! Core domain types for Roster.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

#![allow(clippy::missing_errors_doc)]

mod form;
mod ids;
mod record;
mod theme;
pub mod ui;

pub use form::{AGE_REQUIRED, FieldErrors, FormField, NAME_REQUIRED};
pub use ids::{SubscriptionId, UserId};
pub use record::{Age, AgeError, EmptyNameError, UserName, UserRecord};
pub use theme::ThemeMode;
