//! Contact repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Keep contacts in insertion order for the process lifetime.
//! - Offer positional writes plus id lookups for selection resolution.
//!
//! # Invariants
//! - Order changes only through `append`, `replace_at` and `remove_at`.
//! - `replace_at` keeps the replaced slot's position.
//! - Out-of-range positions are reported, never clamped.

use crate::model::contact::{Contact, ContactId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    IndexOutOfBounds { index: usize, len: usize },
    NotFound(ContactId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "contact index {index} out of bounds for {len} contact(s)")
            }
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for the ordered contact store.
pub trait ContactRepository {
    /// Appends to the end and returns the new position.
    fn append(&mut self, contact: Contact) -> usize;
    /// Replaces the contact at `index` in place.
    fn replace_at(&mut self, index: usize, contact: Contact) -> RepoResult<()>;
    /// Removes and returns the contact at `index`.
    fn remove_at(&mut self, index: usize) -> RepoResult<Contact>;
    /// Read-only view in store order.
    fn all(&self) -> &[Contact];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    /// Current position of a contact id.
    fn position_of(&self, id: ContactId) -> Option<usize> {
        self.all().iter().position(|contact| contact.id == id)
    }

    fn get(&self, id: ContactId) -> Option<&Contact> {
        self.all().iter().find(|contact| contact.id == id)
    }
}

/// Vec-backed contact store.
#[derive(Debug, Clone, Default)]
pub struct MemoryContactRepository {
    contacts: Vec<Contact>,
}

impl MemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `contacts` in the given order.
    pub fn with_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        Self {
            contacts: contacts.into_iter().collect(),
        }
    }

    fn check_index(&self, index: usize) -> RepoResult<()> {
        if index < self.contacts.len() {
            Ok(())
        } else {
            Err(RepoError::IndexOutOfBounds {
                index,
                len: self.contacts.len(),
            })
        }
    }
}

impl ContactRepository for MemoryContactRepository {
    fn append(&mut self, contact: Contact) -> usize {
        self.contacts.push(contact);
        self.contacts.len() - 1
    }

    fn replace_at(&mut self, index: usize, contact: Contact) -> RepoResult<()> {
        self.check_index(index)?;
        self.contacts[index] = contact;
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> RepoResult<Contact> {
        self.check_index(index)?;
        Ok(self.contacts.remove(index))
    }

    fn all(&self) -> &[Contact] {
        &self.contacts
    }
}
