//! Application engine for Roster.
//!
//! This crate contains the App state machine without TUI dependencies: the
//! add form, the edit overlay, the removal dialog and the theme switch, all
//! driving one [`roster_core::RegistryStore`].

mod app;
mod confirm;
mod forms;
mod notifications;

pub use app::{App, Focus, InputMode};
pub use confirm::{Confirm, DELETE_PROMPT, RemoveOutcome};
pub use forms::{AddForm, EditOutcome, EditOverlay, FormState};
pub use notifications::{Notice, NoticeLevel};

pub use roster_config::{MemoryPreferenceStore, PreferenceStore, ThemePreference};
pub use roster_core::{RegistryError, RegistryEvent, RegistryStore};
pub use roster_types::{
    AGE_REQUIRED, Age, FieldErrors, FormField, NAME_REQUIRED, ThemeMode, UserId, UserName,
    UserRecord,
};

pub mod ui {
    pub use roster_types::ui::{DraftInput, ModalEffect, ModalEffectKind, UiOptions};
}
