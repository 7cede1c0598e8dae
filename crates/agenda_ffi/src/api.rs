//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose agenda actions to Dart via FRB as sync calls.
//! - Let the Flutter widgets act as the presentation layer: they render
//!   snapshots, show dialogs and report selection by contact id.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One process-global controller backs every call.
//! - Removal confirmation is asked on the Dart side; `agenda_remove` only
//!   receives the answer.

use agenda_core::{
    controller_from_config, core_version as core_version_inner,
    init_logging as init_logging_inner, AgendaConfig, AgendaController, AgendaSnapshot,
    ContactAction, ContactField, ContactView, ControllerError, Notice, NoticeKind,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

static AGENDA: OnceLock<Mutex<AgendaController>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.trim()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One table row for the Flutter list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaRowItem {
    pub contact_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub age: String,
    pub income: String,
    pub state: String,
}

/// Full display state after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaViewState {
    pub rows: Vec<AgendaRowItem>,
    pub total_label: String,
    pub mean_age_label: String,
    pub states_label: String,
    /// Selected contact id, if any.
    pub selected_id: Option<String>,
    /// Form values in `name, age, phone, email, income, state` order.
    pub form: Vec<String>,
}

/// Action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaActionResponse {
    /// Whether the action succeeded.
    pub ok: bool,
    /// Stable error code on failure (`missing_required_field`, ...).
    pub error_code: Option<String>,
    /// Dialog kind for `message`: `info|warning|error`, empty when silent.
    pub notice_kind: String,
    pub notice_title: String,
    /// Dialog text; empty when the action needs no dialog.
    pub message: String,
    pub state: AgendaViewState,
}

/// Returns current display state.
#[flutter_rust_bridge::frb(sync)]
pub fn agenda_snapshot() -> AgendaViewState {
    to_view_state(&lock_agenda().snapshot())
}

/// Writes one form field. `field` accepts `name|age|phone|email|income|state`.
#[flutter_rust_bridge::frb(sync)]
pub fn agenda_set_field(field: String, value: String) -> AgendaActionResponse {
    match ContactField::parse(&field) {
        Ok(field) => dispatch(ContactAction::SetField(field, value), false),
        Err(err) => {
            let state = to_view_state(&lock_agenda().snapshot());
            AgendaActionResponse {
                ok: false,
                error_code: Some("unknown_field".to_string()),
                notice_kind: notice_kind_label(NoticeKind::Error).to_string(),
                notice_title: "Erro".to_string(),
                message: err.to_string(),
                state,
            }
        }
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn agenda_clear() -> AgendaActionResponse {
    dispatch(ContactAction::Clear, false)
}

#[flutter_rust_bridge::frb(sync)]
pub fn agenda_add() -> AgendaActionResponse {
    dispatch(ContactAction::Add, false)
}

#[flutter_rust_bridge::frb(sync)]
pub fn agenda_edit() -> AgendaActionResponse {
    dispatch(ContactAction::Edit, false)
}

/// Removes the selected contact when `confirmed` is true.
#[flutter_rust_bridge::frb(sync)]
pub fn agenda_remove(confirmed: bool) -> AgendaActionResponse {
    dispatch(ContactAction::Remove, confirmed)
}

/// Selects a contact by id and loads it into the form.
#[flutter_rust_bridge::frb(sync)]
pub fn agenda_select(contact_id: String) -> AgendaActionResponse {
    match Uuid::parse_str(contact_id.trim()) {
        Ok(id) => dispatch(ContactAction::Select(id), false),
        Err(_) => {
            let state = to_view_state(&lock_agenda().snapshot());
            AgendaActionResponse {
                ok: false,
                error_code: Some("invalid_contact_id".to_string()),
                notice_kind: notice_kind_label(NoticeKind::Error).to_string(),
                notice_title: "Erro".to_string(),
                message: format!("invalid contact id `{contact_id}`"),
                state,
            }
        }
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn agenda_deselect() -> AgendaActionResponse {
    dispatch(ContactAction::Deselect, false)
}

/// Collects what the controller would show through a modal UI.
struct EnvelopeView {
    confirm_answer: bool,
    notice: Option<Notice>,
    snapshot: Option<AgendaSnapshot>,
}

impl ContactView for EnvelopeView {
    fn render(&mut self, snapshot: &AgendaSnapshot) {
        self.snapshot = Some(snapshot.clone());
    }

    fn notify(&mut self, notice: &Notice) {
        self.notice = Some(notice.clone());
    }

    fn confirm(&mut self, _title: &str, _message: &str) -> bool {
        self.confirm_answer
    }
}

fn dispatch(action: ContactAction, confirm_answer: bool) -> AgendaActionResponse {
    let mut agenda = lock_agenda();
    let mut view = EnvelopeView {
        confirm_answer,
        notice: None,
        snapshot: None,
    };
    let result = agenda.handle(action, &mut view);
    let snapshot = view.snapshot.unwrap_or_else(|| agenda.snapshot());

    let (notice_kind, notice_title, message) = match view.notice {
        Some(notice) => (
            notice_kind_label(notice.kind).to_string(),
            notice.title,
            notice.message,
        ),
        None => (String::new(), String::new(), String::new()),
    };

    AgendaActionResponse {
        ok: result.is_ok(),
        error_code: result
            .err()
            .as_ref()
            .map(ControllerError::code)
            .map(str::to_string),
        notice_kind,
        notice_title,
        message,
        state: to_view_state(&snapshot),
    }
}

fn lock_agenda() -> MutexGuard<'static, AgendaController> {
    let agenda = AGENDA.get_or_init(|| {
        let config = AgendaConfig::from_env().unwrap_or_else(|err| {
            warn!("event=ffi_config module=ffi status=fallback error={err}");
            AgendaConfig::default()
        });
        Mutex::new(controller_from_config(&config))
    });
    // Mutations are single Vec operations; state behind a poisoned lock is
    // still consistent.
    agenda.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn to_view_state(snapshot: &AgendaSnapshot) -> AgendaViewState {
    AgendaViewState {
        rows: snapshot
            .rows
            .iter()
            .map(|row| AgendaRowItem {
                contact_id: row.id.to_string(),
                name: row.name.clone(),
                phone: row.phone.clone(),
                email: row.email.clone(),
                age: row.age.clone(),
                income: row.income.clone(),
                state: row.state.clone(),
            })
            .collect(),
        total_label: snapshot.labels.total.clone(),
        mean_age_label: snapshot.labels.mean_age.clone(),
        states_label: snapshot.labels.distinct_states.clone(),
        selected_id: snapshot.selection.map(|id| id.to_string()),
        form: ContactField::ALL
            .into_iter()
            .map(|field| snapshot.form.get(field).to_string())
            .collect(),
    }
}

fn notice_kind_label(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "info",
        NoticeKind::Warning => "warning",
        NoticeKind::Error => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::{
        agenda_add, agenda_deselect, agenda_edit, agenda_remove, agenda_select, agenda_set_field,
        agenda_snapshot, core_version, init_logging, lock_agenda,
    };

    // The controller is process-global; keep every stateful assertion in one
    // test so parallel test threads cannot interleave actions.
    #[test]
    fn agenda_flow_through_ffi() {
        let start = agenda_snapshot();
        let start_len = start.rows.len();

        let missing = agenda_add();
        assert!(!missing.ok);
        assert_eq!(missing.error_code.as_deref(), Some("missing_required_field"));
        assert_eq!(missing.notice_kind, "warning");

        for (field, value) in [
            ("name", "maria souza"),
            ("age", "40"),
            ("phone", "123"),
            ("email", "M@X.com"),
            ("income", "2500,50"),
            ("state", "ba"),
        ] {
            assert!(agenda_set_field(field.to_string(), value.to_string()).ok);
        }
        let added = agenda_add();
        assert!(added.ok, "{}", added.message);
        assert_eq!(added.notice_kind, "info");
        assert_eq!(added.state.rows.len(), start_len + 1);
        let maria = added.state.rows.last().expect("added row").clone();
        assert_eq!(maria.name, "Maria Souza");
        assert_eq!(maria.income, "R$ 2500.50");
        assert!(added.state.form.iter().all(String::is_empty));

        let selected = agenda_select(maria.contact_id.clone());
        assert!(selected.ok);
        assert_eq!(selected.state.form[0], "Maria Souza");
        assert_eq!(selected.state.form[4], "2500.50");

        assert!(agenda_set_field("state".to_string(), "rj".to_string()).ok);
        let edited = agenda_edit();
        assert!(edited.ok, "{}", edited.message);
        assert_eq!(edited.state.rows.last().unwrap().state, "RJ");

        let declined = agenda_remove(false);
        assert!(declined.ok);
        assert_eq!(declined.state.rows.len(), start_len + 1);

        let removed = agenda_remove(true);
        assert!(removed.ok);
        assert_eq!(removed.state.rows.len(), start_len);

        let no_selection = agenda_remove(true);
        assert_eq!(no_selection.error_code.as_deref(), Some("selection_required"));

        assert!(agenda_deselect().ok);
        assert_eq!(
            agenda_select("not-a-uuid".to_string()).error_code.as_deref(),
            Some("invalid_contact_id")
        );
        assert_eq!(
            agenda_set_field("zip".to_string(), "1".to_string())
                .error_code
                .as_deref(),
            Some("unknown_field")
        );
        assert_eq!(lock_agenda().contacts().len(), start_len);
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_relative_dir_and_bad_level() {
        assert!(!init_logging("info".to_string(), "tmp/logs".to_string()).is_empty());
        assert!(!init_logging("verbose".to_string(), "/tmp/logs".to_string()).is_empty());
    }
}
