//! Example contacts loaded at startup.

use crate::model::contact::{Contact, ContactInput};

/// Returns the two demonstration contacts, freshly identified.
pub fn example_contacts() -> Vec<Contact> {
    vec![
        Contact::new(ContactInput {
            name: "Ana Silva".to_string(),
            age: 28,
            phone: "(11) 9999-8888".to_string(),
            email: "ana@email.com".to_string(),
            income: 4500.00,
            state: "SP".to_string(),
        }),
        Contact::new(ContactInput {
            name: "Carlos Oliveira".to_string(),
            age: 35,
            phone: "(21) 7777-5555".to_string(),
            email: "carlos@email.com".to_string(),
            income: 6800.50,
            state: "RJ".to_string(),
        }),
    ]
}
