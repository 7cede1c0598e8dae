//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record and its stable identity.
//! - Define the raw form shape the presentation layer reads and writes.
//!
//! # Invariants
//! - Every stored contact is identified by a stable `ContactId`.
//! - Forms carry raw text only; stored contacts carry normalized values only.

pub mod contact;
pub mod form;
