//! Repository layer abstractions and the in-memory store.
//!
//! # Responsibility
//! - Define the ordered contact store contract used by the controller.
//! - Keep storage details out of controller orchestration.
//!
//! # Invariants
//! - Repositories store contacts already normalized by validation.
//! - Repository APIs return semantic errors (`IndexOutOfBounds`, `NotFound`).

pub mod contact_repo;
