//! Agenda controller use-cases.
//!
//! # Responsibility
//! - Orchestrate validation, store mutation and stats refresh for each user
//!   action (add/edit/remove/clear/select).
//! - Own the pure UI state: form contents, selection and cached stats.
//! - Surface every failure as a typed error; nothing here is fatal.
//!
//! # Invariants
//! - A failed action never mutates the store.
//! - Selection is tracked by `ContactId` and resolved to a position only at
//!   mutation time, so display order can never redirect an edit or removal.
//! - Cached stats always match the store after any mutating action returns.
//! - Log lines carry counts and error codes only, never contact values.

use crate::model::contact::{Contact, ContactField, ContactId};
use crate::model::form::ContactForm;
use crate::presentation::{
    render_rows, render_stats, AgendaSnapshot, ContactView, Notice, CONFIRM_REMOVE_MESSAGE,
    CONFIRM_REMOVE_TITLE,
};
use crate::repo::contact_repo::{ContactRepository, MemoryContactRepository, RepoError};
use crate::seed::example_contacts;
use crate::stats::{compute, ContactStats};
use crate::validation::{validate, ValidationError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Action that needs a selected contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    Edit,
    Remove,
}

impl SelectionAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Remove => "remove",
        }
    }
}

/// Controller error for agenda use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// Form contents cannot become a contact.
    Validation(ValidationError),
    /// Store rejected the operation; only reachable if the selection is stale.
    Repo(RepoError),
    /// Edit or remove was triggered with nothing selected.
    SelectionRequired(SelectionAction),
}

impl ControllerError {
    /// Stable machine-readable code, used in logs and FFI envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::MissingRequiredField(_)) => "missing_required_field",
            Self::Validation(ValidationError::FormatError { .. }) => "format_error",
            Self::Repo(RepoError::IndexOutOfBounds { .. }) => "index_out_of_bounds",
            Self::Repo(RepoError::NotFound(_)) => "not_found",
            Self::SelectionRequired(_) => "selection_required",
        }
    }
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::SelectionRequired(action) => {
                write!(f, "a contact must be selected to {}", action.as_str())
            }
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::SelectionRequired(_) => None,
        }
    }
}

impl From<ValidationError> for ControllerError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ControllerError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Result of a remove request that passed the selection check.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    Removed(Contact),
    Declined,
}

/// User action dispatched by a front-end through [`AgendaController::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    SetField(ContactField, String),
    Add,
    Edit,
    Remove,
    Clear,
    Select(ContactId),
    /// Row position in the latest snapshot, for positional front-ends.
    SelectRow(usize),
    Deselect,
}

/// Headless agenda controller over a contact repository.
pub struct AgendaController<R: ContactRepository = MemoryContactRepository> {
    repo: R,
    form: ContactForm,
    selection: Option<ContactId>,
    stats: ContactStats,
}

impl AgendaController<MemoryContactRepository> {
    /// Creates a controller over an in-memory store seeded with the example
    /// contacts.
    pub fn with_examples() -> Self {
        Self::new(MemoryContactRepository::with_contacts(example_contacts()))
    }
}

impl<R: ContactRepository> AgendaController<R> {
    /// Creates a controller with an empty form and no selection.
    pub fn new(repo: R) -> Self {
        let stats = compute(repo.all());
        Self {
            repo,
            form: ContactForm::default(),
            selection: None,
            stats,
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Stored contacts in display order.
    pub fn contacts(&self) -> &[Contact] {
        self.repo.all()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Replaces the whole form.
    pub fn set_form(&mut self, form: ContactForm) {
        self.form = form;
    }

    pub fn selection(&self) -> Option<ContactId> {
        self.selection
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selection.and_then(|id| self.repo.get(id))
    }

    pub fn stats(&self) -> ContactStats {
        self.stats
    }

    /// Validates the form and appends a new contact.
    ///
    /// # Contract
    /// - On success the form is cleared, the selection dropped and stats
    ///   refreshed.
    /// - On validation failure nothing changes.
    pub fn add(&mut self) -> ControllerResult<ContactId> {
        let result = self.try_add();
        match &result {
            Ok(_) => info!(
                "event=contact_add module=controller status=ok total={}",
                self.stats.total
            ),
            Err(err) => warn!(
                "event=contact_add module=controller status=rejected error_code={}",
                err.code()
            ),
        }
        result
    }

    fn try_add(&mut self) -> ControllerResult<ContactId> {
        let input = validate(&self.form)?;
        let contact = Contact::new(input);
        let id = contact.id;

        self.repo.append(contact);
        self.refresh_stats();
        self.form.clear();
        self.selection = None;
        Ok(id)
    }

    /// Replaces the selected contact with the validated form contents.
    ///
    /// # Contract
    /// - Selection is checked before validation.
    /// - The replaced contact keeps its id and position; selection is kept.
    /// - The form is left as typed.
    pub fn edit(&mut self) -> ControllerResult<ContactId> {
        let result = self.try_edit();
        match &result {
            Ok(_) => info!(
                "event=contact_edit module=controller status=ok total={}",
                self.stats.total
            ),
            Err(err) => warn!(
                "event=contact_edit module=controller status=rejected error_code={}",
                err.code()
            ),
        }
        result
    }

    fn try_edit(&mut self) -> ControllerResult<ContactId> {
        let id = self
            .selection
            .ok_or(ControllerError::SelectionRequired(SelectionAction::Edit))?;
        let input = validate(&self.form)?;
        let index = self.repo.position_of(id).ok_or(RepoError::NotFound(id))?;

        self.repo.replace_at(index, Contact::with_id(id, input))?;
        self.refresh_stats();
        Ok(id)
    }

    /// Removes the selected contact once `confirm` agrees.
    ///
    /// # Contract
    /// - `confirm` is only asked when a selected contact exists.
    /// - Declining leaves store, form and selection untouched.
    /// - Removing clears the form and the selection.
    pub fn remove(
        &mut self,
        confirm: impl FnOnce(&Contact) -> bool,
    ) -> ControllerResult<RemoveOutcome> {
        let result = self.try_remove(confirm);
        match &result {
            Ok(RemoveOutcome::Removed(_)) => info!(
                "event=contact_remove module=controller status=ok total={}",
                self.stats.total
            ),
            Ok(RemoveOutcome::Declined) => {
                debug!("event=contact_remove module=controller status=declined")
            }
            Err(err) => warn!(
                "event=contact_remove module=controller status=rejected error_code={}",
                err.code()
            ),
        }
        result
    }

    fn try_remove(
        &mut self,
        confirm: impl FnOnce(&Contact) -> bool,
    ) -> ControllerResult<RemoveOutcome> {
        let id = self
            .selection
            .ok_or(ControllerError::SelectionRequired(SelectionAction::Remove))?;
        let index = self.repo.position_of(id).ok_or(RepoError::NotFound(id))?;

        if !confirm(&self.repo.all()[index]) {
            return Ok(RemoveOutcome::Declined);
        }

        let removed = self.repo.remove_at(index)?;
        self.refresh_stats();
        self.form.clear();
        self.selection = None;
        Ok(RemoveOutcome::Removed(removed))
    }

    /// Blanks every form field. Selection is kept.
    pub fn clear(&mut self) {
        self.form.clear();
    }

    /// Selects a contact and copies its values into the form.
    pub fn select(&mut self, id: ContactId) -> ControllerResult<()> {
        let contact = self.repo.get(id).ok_or(RepoError::NotFound(id))?;
        self.form = ContactForm::from_contact(contact);
        self.selection = Some(id);
        debug!("event=contact_select module=controller status=ok");
        Ok(())
    }

    /// Selects the contact shown at `index` and returns its id.
    pub fn select_row(&mut self, index: usize) -> ControllerResult<ContactId> {
        let id = self
            .repo
            .all()
            .get(index)
            .map(|contact| contact.id)
            .ok_or(RepoError::IndexOutOfBounds {
                index,
                len: self.repo.len(),
            })?;
        self.select(id)?;
        Ok(id)
    }

    /// Drops the selection; the form is left as is.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// Recomputes stats from the store and returns a fresh snapshot.
    pub fn refresh(&mut self) -> AgendaSnapshot {
        self.refresh_stats();
        self.snapshot()
    }

    /// Builds display state from the current store, stats, form and selection.
    pub fn snapshot(&self) -> AgendaSnapshot {
        AgendaSnapshot {
            rows: render_rows(self.repo.all()),
            stats: self.stats,
            labels: render_stats(&self.stats),
            selection: self.selection,
            form: self.form.clone(),
        }
    }

    /// Runs one user action against `view`.
    ///
    /// Errors and successes are shown through `view.notify`, then the view is
    /// re-rendered. The action result is also returned for callers that
    /// need it.
    pub fn handle<V: ContactView>(
        &mut self,
        action: ContactAction,
        view: &mut V,
    ) -> ControllerResult<()> {
        let result = match action {
            ContactAction::SetField(field, value) => {
                self.set_field(field, value);
                Ok(None)
            }
            ContactAction::Add => self
                .add()
                .map(|_| Some(Notice::info("Sucesso", "Contato adicionado com sucesso!"))),
            ContactAction::Edit => self
                .edit()
                .map(|_| Some(Notice::info("Sucesso", "Contato atualizado com sucesso!"))),
            ContactAction::Remove => self
                .remove(|_| view.confirm(CONFIRM_REMOVE_TITLE, CONFIRM_REMOVE_MESSAGE))
                .map(|_| None),
            ContactAction::Clear => {
                self.clear();
                Ok(None)
            }
            ContactAction::Select(id) => self.select(id).map(|()| None),
            ContactAction::SelectRow(index) => self.select_row(index).map(|_| None),
            ContactAction::Deselect => {
                self.deselect();
                Ok(None)
            }
        };

        match &result {
            Ok(Some(notice)) => view.notify(notice),
            Ok(None) => {}
            Err(err) => view.notify(&Notice::from(err)),
        }
        view.render(&self.snapshot());

        result.map(|_| ())
    }

    fn refresh_stats(&mut self) {
        self.stats = compute(self.repo.all());
    }
}

#[cfg(test)]
mod tests {
    use super::{AgendaController, ControllerError, SelectionAction};
    use crate::model::contact::ContactField;
    use crate::repo::contact_repo::{MemoryContactRepository, RepoError};

    #[test]
    fn new_controller_computes_initial_stats() {
        let controller = AgendaController::with_examples();
        assert_eq!(controller.stats().total, 2);
        assert_eq!(controller.stats().mean_age, 31.5);
        assert_eq!(controller.stats().distinct_states, 2);
    }

    #[test]
    fn select_row_out_of_range_reports_index_error() {
        let mut controller = AgendaController::new(MemoryContactRepository::new());
        let err = controller.select_row(0).unwrap_err();
        assert_eq!(
            err,
            ControllerError::Repo(RepoError::IndexOutOfBounds { index: 0, len: 0 })
        );
        assert_eq!(err.code(), "index_out_of_bounds");
    }

    #[test]
    fn edit_checks_selection_before_validation() {
        let mut controller = AgendaController::with_examples();
        controller.set_field(ContactField::Age, "abc");
        let err = controller.edit().unwrap_err();
        assert_eq!(err, ControllerError::SelectionRequired(SelectionAction::Edit));
    }

    #[test]
    fn clear_keeps_selection() {
        let mut controller = AgendaController::with_examples();
        let id = controller.select_row(1).expect("row exists");
        controller.clear();
        assert!(controller.form().is_blank());
        assert_eq!(controller.selection(), Some(id));
    }
}
