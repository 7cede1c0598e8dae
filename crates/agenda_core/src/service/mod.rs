//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and repository calls into user actions.
//! - Keep front-ends (terminal, FFI) decoupled from store details.

pub mod contact_service;
