//! Core domain logic for the contact agenda.
//! This crate is the single source of truth for contact invariants; front-ends
//! only render snapshots and forward user actions.

pub mod config;
pub mod logging;
pub mod model;
pub mod presentation;
pub mod repo;
pub mod seed;
pub mod service;
pub mod stats;
pub mod validation;

pub use config::{AgendaConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{Contact, ContactField, ContactId, ContactInput, UnknownFieldError};
pub use model::form::ContactForm;
pub use presentation::{
    format_income, AgendaSnapshot, ContactRow, ContactView, Notice, NoticeKind, StatsLabels,
};
pub use repo::contact_repo::{ContactRepository, MemoryContactRepository, RepoError, RepoResult};
pub use service::contact_service::{
    AgendaController, ContactAction, ControllerError, ControllerResult, RemoveOutcome,
    SelectionAction,
};
pub use stats::ContactStats;
pub use validation::{validate, ValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Builds a controller according to `config`.
pub fn controller_from_config(config: &AgendaConfig) -> AgendaController {
    if config.seed_examples {
        AgendaController::with_examples()
    } else {
        AgendaController::new(MemoryContactRepository::new())
    }
}
