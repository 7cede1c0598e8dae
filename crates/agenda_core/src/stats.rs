//! Aggregate statistics over the contact store.
//!
//! Recomputed from scratch on every call; contact counts are small.

use crate::model::contact::Contact;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Summary numbers shown under the contact table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactStats {
    pub total: usize,
    /// Arithmetic mean of ages; `0.0` when there are no contacts.
    pub mean_age: f64,
    /// Number of distinct normalized state codes.
    pub distinct_states: usize,
}

/// Computes statistics for `contacts`.
pub fn compute(contacts: &[Contact]) -> ContactStats {
    let total = contacts.len();
    if total == 0 {
        return ContactStats::default();
    }

    let age_sum: u64 = contacts.iter().map(|contact| u64::from(contact.age)).sum();
    let states: HashSet<&str> = contacts
        .iter()
        .map(|contact| contact.state.as_str())
        .collect();

    ContactStats {
        total,
        mean_age: age_sum as f64 / total as f64,
        distinct_states: states.len(),
    }
}
