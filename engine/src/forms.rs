//! Form state for the add form and the edit overlay.
//!
//! Each form instance owns its own buffers and errors. Both share the same
//! validate-then-mutate contract through [`FormState::accept`].

use roster_core::{RegistryError, RegistryStore, parse_submission};
use roster_types::ui::DraftInput;
use roster_types::{Age, FieldErrors, FormField, UserId, UserName, UserRecord};

#[derive(Debug, Clone, Default)]
pub struct FormState {
    name: DraftInput,
    age: DraftInput,
    errors: FieldErrors,
    focus: FormField,
}

impl FormState {
    #[must_use]
    pub fn field(&self, field: FormField) -> &DraftInput {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut DraftInput {
        match field {
            FormField::Name => &mut self.name,
            FormField::Age => &mut self.age,
        }
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn focused_mut(&mut self) -> &mut DraftInput {
        self.field_mut(self.focus)
    }

    /// Validate the buffers. On failure the displayed errors are replaced and
    /// focus moves to the first offending field.
    fn accept(&mut self) -> Option<(UserName, Age)> {
        match parse_submission(self.name.text(), self.age.text()) {
            Ok(values) => Some(values),
            Err(errors) => {
                if let Some((first, _)) = errors.iter().next() {
                    self.focus = first;
                }
                tracing::debug!(errors = errors.len(), "Submission rejected");
                self.errors = errors;
                None
            }
        }
    }

    fn seed(&mut self, name: &str, age: &str) {
        self.name.set_text(name);
        self.age.set_text(age);
        self.errors.clear();
        self.focus = FormField::Name;
    }

    fn reset(&mut self) {
        self.name.clear();
        self.age.clear();
        self.errors.clear();
        self.focus = FormField::Name;
    }
}

/// The main view's add form.
#[derive(Debug, Clone, Default)]
pub struct AddForm {
    state: FormState,
}

impl AddForm {
    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// Validate and, when acceptable, append to the registry and clear the form.
    /// On rejection the registry is never touched.
    pub fn submit(&mut self, registry: &mut RegistryStore) -> Result<UserRecord, FieldErrors> {
        let Some((name, age)) = self.state.accept() else {
            return Err(self.state.errors.clone());
        };
        let record = registry.add(name, age);
        self.state.reset();
        Ok(record)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// The overlay was closed; nothing ran.
    Inactive,
    /// Validation failed; the overlay stays open with errors shown.
    Rejected(FieldErrors),
    /// The record was updated and the overlay closed.
    Saved(UserId),
    /// The target no longer exists in the registry; the overlay closed.
    Missing(UserId),
}

/// Modal edit form scoped to one target record.
#[derive(Debug, Clone, Default)]
pub struct EditOverlay {
    target: Option<UserRecord>,
    visible: bool,
    state: FormState,
}

impl EditOverlay {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn target(&self) -> Option<&UserRecord> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Mutable form access. `None` while closed: the overlay is inert then.
    pub fn state_mut(&mut self) -> Option<&mut FormState> {
        self.visible.then_some(&mut self.state)
    }

    /// Point the overlay at a different record (or none). The buffers are
    /// re-seeded and errors cleared whether or not the overlay is visible.
    pub fn retarget(&mut self, record: Option<&UserRecord>) {
        match record {
            Some(record) => self
                .state
                .seed(record.name.as_str(), &record.age.to_string()),
            None => self.state.reset(),
        }
        self.target = record.cloned();
    }

    pub fn open(&mut self, record: &UserRecord) {
        self.retarget(Some(record));
        self.visible = true;
    }

    /// Close without touching the registry. Returns whether it was open.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    pub fn submit(&mut self, registry: &mut RegistryStore) -> EditOutcome {
        if !self.visible {
            return EditOutcome::Inactive;
        }
        let Some(id) = self.target.as_ref().map(|target| target.id) else {
            self.visible = false;
            return EditOutcome::Inactive;
        };
        let Some((name, age)) = self.state.accept() else {
            return EditOutcome::Rejected(self.state.errors.clone());
        };

        self.visible = false;
        match registry.edit(id, name, age) {
            Ok(()) => {
                self.retarget(registry.get(id));
                EditOutcome::Saved(id)
            }
            Err(RegistryError::NotFound(id)) => EditOutcome::Missing(id),
        }
    }
}
