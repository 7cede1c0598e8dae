//! Raw contact form contents.
//!
//! The form holds exactly what the user typed. Nothing here validates or
//! normalizes; that happens in [`crate::validation`].

use crate::model::contact::{Contact, ContactField};
use serde::{Deserialize, Serialize};

/// Six raw text fields keyed by [`ContactField`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub income: String,
    pub state: String,
}

impl ContactForm {
    /// Builds a form from `(field, value)` pairs; unnamed fields stay empty.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (ContactField, &'a str)>) -> Self {
        let mut form = Self::default();
        for (field, value) in pairs {
            form.set(field, value);
        }
        form
    }

    /// Fills the form from a stored contact for editing.
    ///
    /// Income is written as a plain two-decimal number taken from the numeric
    /// value, so the form never sees display decoration.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            age: contact.age.to_string(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            income: format!("{:.2}", contact.income),
            state: contact.state.clone(),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Age => &self.age,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Income => &self.income,
            ContactField::State => &self.state,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn clear_field(&mut self, field: ContactField) {
        self.slot_mut(field).clear();
    }

    /// Blanks every field.
    pub fn clear(&mut self) {
        for field in ContactField::ALL {
            self.clear_field(field);
        }
    }

    /// Returns whether every field is empty.
    pub fn is_blank(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Age => &mut self.age,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
            ContactField::Income => &mut self.income,
            ContactField::State => &mut self.state,
        }
    }
}
