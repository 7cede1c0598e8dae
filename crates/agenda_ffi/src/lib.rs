//! Flutter bridge for the contact agenda core.

pub mod api;
