//! The App state machine: owns the registry, both forms, the removal dialog
//! and the theme, and turns user intents into registry mutations.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use roster_config::ThemePreference;
use roster_core::{RegistryError, RegistryEvent, RegistryStore};
use roster_types::ui::{DraftInput, ModalEffect, UiOptions};
use roster_types::{FormField, ThemeMode, UserId, UserRecord};

use crate::confirm::{Confirm, RemoveOutcome};
use crate::forms::{AddForm, EditOutcome, EditOverlay, FormState};
use crate::notifications::Notice;


/// Which part of the main view receives keys when no modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Age,
    List,
}

impl Focus {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Age,
            Self::Age => Self::List,
            Self::List => Self::Name,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::List,
            Self::Age => Self::Name,
            Self::List => Self::Age,
        }
    }

    #[must_use]
    pub const fn field(self) -> Option<FormField> {
        match self {
            Self::Name => Some(FormField::Name),
            Self::Age => Some(FormField::Age),
            Self::List => None,
        }
    }
}

/// What currently owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Main,
    EditOverlay,
    ConfirmRemove,
}

pub struct App {
    registry: RegistryStore,
    dirty: Rc<Cell<bool>>,
    add_form: AddForm,
    edit_overlay: EditOverlay,
    pending_removal: Option<UserId>,
    focus: Focus,
    selected: usize,
    theme: ThemePreference,
    ui_options: UiOptions,
    notice: Option<Notice>,
    modal_effect: Option<ModalEffect>,
    last_tick: Instant,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(theme: ThemePreference, ui_options: UiOptions) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let mut registry = RegistryStore::new();

        let redraw = Rc::clone(&dirty);
        registry.subscribe(move |event: &RegistryEvent, records: &[UserRecord]| {
            tracing::trace!(?event, count = records.len(), "Registry changed");
            redraw.set(true);
        });

        Self {
            registry,
            dirty,
            add_form: AddForm::default(),
            edit_overlay: EditOverlay::default(),
            pending_removal: None,
            focus: Focus::default(),
            selected: 0,
            theme,
            ui_options,
            notice: None,
            modal_effect: None,
            last_tick: Instant::now(),
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------
    // Read access for rendering
    // ------------------------------------------------------------------

    #[must_use]
    pub fn registry(&self) -> &RegistryStore {
        &self.registry
    }

    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        self.registry.records()
    }

    #[must_use]
    pub fn add_form(&self) -> &AddForm {
        &self.add_form
    }

    #[must_use]
    pub fn edit_overlay(&self) -> &EditOverlay {
        &self.edit_overlay
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.pending_removal.is_some() {
            InputMode::ConfirmRemove
        } else if self.edit_overlay.is_visible() {
            InputMode::EditOverlay
        } else {
            InputMode::Main
        }
    }

    /// The record awaiting a yes/no answer, if the confirmation dialog is open.
    #[must_use]
    pub fn pending_removal(&self) -> Option<&UserRecord> {
        self.pending_removal.and_then(|id| self.registry.get(id))
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        (!self.registry.is_empty()).then(|| self.selected.min(self.registry.len() - 1))
    }

    #[must_use]
    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.selected_index()
            .and_then(|index| self.registry.records().get(index))
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn modal_effect(&self) -> Option<&ModalEffect> {
        self.modal_effect.as_ref()
    }

    // ------------------------------------------------------------------
    // Frame lifecycle
    // ------------------------------------------------------------------

    /// Advance animations. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.advance_effects(delta);
    }

    fn advance_effects(&mut self, delta: Duration) {
        if let Some(effect) = &mut self.modal_effect {
            effect.advance(delta);
            if effect.is_finished() {
                self.modal_effect = None;
            }
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Whether anything changed since the last call.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dismiss_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }

    fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mark_dirty();
    }

    fn start_effect(&mut self, effect: ModalEffect) {
        if self.ui_options.reduced_motion {
            return;
        }
        self.modal_effect = Some(effect);
        self.mark_dirty();
    }

    // ------------------------------------------------------------------
    // Main view navigation
    // ------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if let Some(field) = focus.field() {
            self.add_form.state_mut().set_focus(field);
        }
        self.mark_dirty();
    }

    pub fn select_next(&mut self) {
        if let Some(index) = self.selected_index() {
            self.selected = (index + 1).min(self.registry.len() - 1);
            self.mark_dirty();
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(index) = self.selected_index() {
            self.selected = index.saturating_sub(1);
            self.mark_dirty();
        }
    }

    /// The text buffer that typed characters go to, if any.
    ///
    /// Routes to the overlay while it is open; never to the list.
    pub fn active_draft_mut(&mut self) -> Option<&mut DraftInput> {
        self.mark_dirty();
        match self.input_mode() {
            InputMode::ConfirmRemove => None,
            InputMode::EditOverlay => self.edit_overlay.state_mut().map(FormState::focused_mut),
            InputMode::Main => {
                let field = self.focus.field()?;
                Some(self.add_form.state_mut().field_mut(field))
            }
        }
    }

    // ------------------------------------------------------------------
    // Add
    // ------------------------------------------------------------------

    pub fn submit_add(&mut self) -> Option<UserRecord> {
        self.mark_dirty();
        match self.add_form.submit(&mut self.registry) {
            Ok(record) => {
                self.focus = Focus::Name;
                self.set_notice(Notice::info(format!("Added {}", record.name)));
                Some(record)
            }
            Err(errors) => {
                if let Some((field, _)) = errors.iter().next() {
                    self.focus = match field {
                        FormField::Name => Focus::Name,
                        FormField::Age => Focus::Age,
                    };
                }
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Edit
    // ------------------------------------------------------------------

    /// Open the overlay for `id`, seeded from the record's current values.
    pub fn open_edit(&mut self, id: UserId) -> bool {
        let Some(record) = self.registry.get(id) else {
            tracing::warn!(%id, "Edit requested for unknown user");
            self.set_notice(Notice::warning("That user no longer exists"));
            return false;
        };
        self.edit_overlay.open(record);
        self.start_effect(ModalEffect::pop_scale(ModalEffect::POP_DURATION));
        self.mark_dirty();
        true
    }

    pub fn edit_selected(&mut self) -> bool {
        match self.selected_user().map(|record| record.id) {
            Some(id) => self.open_edit(id),
            None => false,
        }
    }

    /// Move focus between the overlay's two fields.
    pub fn edit_focus_next(&mut self) {
        if let Some(state) = self.edit_overlay.state_mut() {
            state.set_focus(state.focus().next());
            self.mark_dirty();
        }
    }

    pub fn submit_edit(&mut self) -> EditOutcome {
        let outcome = self.edit_overlay.submit(&mut self.registry);
        match &outcome {
            EditOutcome::Inactive => {}
            EditOutcome::Rejected(_) => {
                self.start_effect(ModalEffect::shake(ModalEffect::SHAKE_DURATION));
                self.mark_dirty();
            }
            EditOutcome::Saved(id) => {
                if let Some(record) = self.registry.get(*id) {
                    let text = format!("Updated {}", record.name);
                    self.set_notice(Notice::info(text));
                }
                self.modal_effect = None;
            }
            EditOutcome::Missing(id) => {
                tracing::warn!(%id, "Edited user disappeared before save");
                self.modal_effect = None;
                self.set_notice(Notice::warning("That user no longer exists"));
            }
        }
        outcome
    }

    pub fn cancel_edit(&mut self) -> bool {
        let was_open = self.edit_overlay.cancel();
        if was_open {
            self.modal_effect = None;
            self.mark_dirty();
        }
        was_open
    }

    // ------------------------------------------------------------------
    // Remove
    // ------------------------------------------------------------------

    /// Remove `id` if `confirm` agrees. The registry is untouched otherwise.
    pub fn remove_with(
        &mut self,
        id: UserId,
        confirm: &mut impl Confirm,
    ) -> Result<RemoveOutcome, RegistryError> {
        let Some(record) = self.registry.get(id) else {
            tracing::warn!(%id, "Remove requested for unknown user");
            self.set_notice(Notice::warning("That user no longer exists"));
            return Err(RegistryError::NotFound(id));
        };
        if !confirm.confirm(record) {
            tracing::debug!(%id, "Removal declined");
            return Ok(RemoveOutcome::Kept);
        }

        let removed = self.registry.remove(id)?;
        if self.edit_overlay.target().is_some_and(|target| target.id == id) {
            self.edit_overlay.retarget(None);
            self.edit_overlay.cancel();
        }
        if let Some(last) = self.registry.len().checked_sub(1) {
            self.selected = self.selected.min(last);
        } else {
            self.selected = 0;
        }
        self.set_notice(Notice::info(format!("Removed {}", removed.name)));
        Ok(RemoveOutcome::Removed(removed))
    }

    /// Open the confirmation dialog for `id`. The dialog's answer arrives via
    /// [`App::resolve_removal`].
    pub fn request_remove(&mut self, id: UserId) -> bool {
        if self.registry.get(id).is_none() {
            tracing::warn!(%id, "Remove requested for unknown user");
            return false;
        }
        self.pending_removal = Some(id);
        self.start_effect(ModalEffect::pop_scale(ModalEffect::POP_DURATION));
        self.mark_dirty();
        true
    }

    pub fn request_remove_selected(&mut self) -> bool {
        match self.selected_user().map(|record| record.id) {
            Some(id) => self.request_remove(id),
            None => false,
        }
    }

    /// Close the confirmation dialog with the user's answer.
    pub fn resolve_removal(&mut self, confirmed: bool) -> Option<RemoveOutcome> {
        let id = self.pending_removal.take()?;
        self.modal_effect = None;
        self.mark_dirty();
        self.remove_with(id, &mut |_: &UserRecord| confirmed).ok()
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    /// Flip light/dark. The new mode applies even if persisting it fails.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        if let Err(err) = self.theme.toggle() {
            tracing::warn!("Failed to persist theme preference: {err}");
            self.set_notice(Notice::error(format!("Theme not saved: {err}")));
        }
        self.mark_dirty();
        self.theme.mode()
    }
}
