//! Render boundary between controller state and a concrete front-end.
//!
//! # Responsibility
//! - Turn stored contacts and stats into display strings.
//! - Map controller outcomes to user-facing notices.
//! - Define the `ContactView` seam front-ends implement.
//!
//! # Invariants
//! - Currency decoration is applied here only; nothing reads it back.
//! - Render functions take state explicitly and hold no state of their own.

use crate::model::contact::{Contact, ContactField, ContactId};
use crate::model::form::ContactForm;
use crate::service::contact_service::{ControllerError, SelectionAction};
use crate::stats::ContactStats;
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Prefix prepended to rendered income values.
pub const CURRENCY_PREFIX: &str = "R$";

/// Table column headers in display order.
pub const TABLE_COLUMNS: [&str; 6] = ["Nome", "Telefone", "E-mail", "Idade", "Renda", "Estado"];

/// One table row, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRow {
    /// Identity reported back on selection.
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub age: String,
    pub income: String,
    pub state: String,
}

impl ContactRow {
    /// Cells in [`TABLE_COLUMNS`] order.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.age.as_str(),
            self.income.as_str(),
            self.state.as_str(),
        ]
    }
}

/// Text for the three status labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsLabels {
    pub total: String,
    pub mean_age: String,
    pub distinct_states: String,
}

/// Everything a front-end needs to redraw after an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaSnapshot {
    pub rows: Vec<ContactRow>,
    pub stats: ContactStats,
    pub labels: StatsLabels,
    pub selection: Option<ContactId>,
    pub form: ContactForm,
}

/// Dialog flavour for a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// User-facing message produced by a controller action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, message)
    }

    fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&ControllerError> for Notice {
    fn from(value: &ControllerError) -> Self {
        match value {
            ControllerError::Validation(ValidationError::MissingRequiredField(field)) => {
                Notice::warning(
                    "Campo obrigatório",
                    format!("O campo {} é obrigatório!", field.label()),
                )
            }
            ControllerError::Validation(ValidationError::FormatError { .. }) => Notice::error(
                "Erro de formato",
                "Idade deve ser número inteiro\nRenda deve ser numérica (use . ou , como separador)",
            ),
            ControllerError::SelectionRequired(action) => Notice::warning(
                "Seleção necessária",
                format!(
                    "Selecione um contato na lista para {}!",
                    selection_verb(*action)
                ),
            ),
            ControllerError::Repo(err) => Notice::error("Erro", err.to_string()),
        }
    }
}

/// Front-end seam driven by [`crate::AgendaController::handle`].
pub trait ContactView {
    /// Redraws table, labels and form from `snapshot`.
    fn render(&mut self, snapshot: &AgendaSnapshot);
    /// Shows a modal or inline message.
    fn notify(&mut self, notice: &Notice);
    /// Asks a yes/no question; `true` means yes.
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}

/// Title of the delete confirmation dialog.
pub const CONFIRM_REMOVE_TITLE: &str = "Confirmar exclusão";
/// Question asked before a contact is removed.
pub const CONFIRM_REMOVE_MESSAGE: &str = "Tem certeza que deseja remover este contato?";

/// Formats income with the currency prefix and two decimals.
pub fn format_income(income: f64) -> String {
    format!("{CURRENCY_PREFIX} {income:.2}")
}

pub fn render_row(contact: &Contact) -> ContactRow {
    ContactRow {
        id: contact.id,
        name: contact.name.clone(),
        phone: contact.phone.clone(),
        email: contact.email.clone(),
        age: contact.age.to_string(),
        income: format_income(contact.income),
        state: contact.state.clone(),
    }
}

pub fn render_rows(contacts: &[Contact]) -> Vec<ContactRow> {
    contacts.iter().map(render_row).collect()
}

pub fn render_stats(stats: &ContactStats) -> StatsLabels {
    let total = format!("Total: {} contatos", stats.total);
    if stats.total == 0 {
        return StatsLabels {
            total,
            mean_age: "Média Idade: 0 anos".to_string(),
            distinct_states: "Estados: 0".to_string(),
        };
    }

    StatsLabels {
        total,
        mean_age: format!("Média Idade: {:.1} anos", stats.mean_age),
        distinct_states: format!("Estados: {} diferentes", stats.distinct_states),
    }
}

/// Label shown next to a form input.
pub fn field_caption(field: ContactField) -> String {
    format!("{}:", field.label())
}

fn selection_verb(action: SelectionAction) -> &'static str {
    match action {
        SelectionAction::Edit => "editar",
        SelectionAction::Remove => "remover",
    }
}
