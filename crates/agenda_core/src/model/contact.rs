//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record kept by the agenda store.
//! - Define the fixed field set shared by forms, validation and rendering.
//!
//! # Invariants
//! - `id` is stable across edits and never reused for another contact.
//! - `name`, `phone` and `email` are non-empty after trimming.
//! - `name` is title-cased, `email` lower-cased, `state` upper-cased.
//! - `income` is a finite number.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one stored contact.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ContactId = Uuid;

/// One of the six input fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Age,
    Phone,
    Email,
    Income,
    State,
}

impl ContactField {
    /// Every field in form order.
    pub const ALL: [ContactField; 6] = [
        Self::Name,
        Self::Age,
        Self::Phone,
        Self::Email,
        Self::Income,
        Self::State,
    ];

    /// Fields that must be non-blank before a contact is created or updated.
    pub const REQUIRED: [ContactField; 3] = [Self::Name, Self::Phone, Self::Email];

    /// Stable key used by front-ends and serialized payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Income => "income",
            Self::State => "state",
        }
    }

    /// User-facing form label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Age => "Idade",
            Self::Phone => "Telefone",
            Self::Email => "E-mail",
            Self::Income => "Renda",
            Self::State => "Estado (UF)",
        }
    }

    /// Returns whether the field must be non-blank.
    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Parses a field key.
    ///
    /// Accepts the English keys and the Portuguese form keys
    /// (`nome|idade|telefone|email|renda|estado`), case-insensitive.
    pub fn parse(value: &str) -> Result<Self, UnknownFieldError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" | "nome" => Ok(Self::Name),
            "age" | "idade" => Ok(Self::Age),
            "phone" | "telefone" => Ok(Self::Phone),
            "email" | "e-mail" => Ok(Self::Email),
            "income" | "renda" => Ok(Self::Income),
            "state" | "estado" | "uf" => Ok(Self::State),
            _ => Err(UnknownFieldError(value.trim().to_string())),
        }
    }
}

impl Display for ContactField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field key that does not name any contact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldError(pub String);

impl Display for UnknownFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown contact field `{}`; expected name|age|phone|email|income|state",
            self.0
        )
    }
}

impl Error for UnknownFieldError {}

/// Normalized contact values produced by validation.
///
/// Carries no identity; the store assigns one through [`Contact::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
    pub income: f64,
    pub state: String,
}

/// Canonical stored contact record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable ID used for selection; decoupled from display order.
    pub id: ContactId,
    pub name: String,
    pub age: u32,
    /// Kept exactly as typed.
    pub phone: String,
    pub email: String,
    pub income: f64,
    /// Two-letter state code by convention; may be empty.
    pub state: String,
}

impl Contact {
    /// Creates a contact with a generated stable ID.
    pub fn new(input: ContactInput) -> Self {
        Self::with_id(Uuid::new_v4(), input)
    }

    /// Creates a contact with a caller-provided ID.
    ///
    /// Used by edits, where the replaced record keeps its identity.
    pub fn with_id(id: ContactId, input: ContactInput) -> Self {
        Self {
            id,
            name: input.name,
            age: input.age,
            phone: input.phone,
            email: input.email,
            income: input.income,
            state: input.state,
        }
    }

    /// Returns the record values without identity.
    pub fn to_input(&self) -> ContactInput {
        ContactInput {
            name: self.name.clone(),
            age: self.age,
            phone: self.phone.clone(),
            email: self.email.clone(),
            income: self.income,
            state: self.state.clone(),
        }
    }
}

/// Title-cases text: letters following a non-letter are upper-cased, all
/// other letters lower-cased.
///
/// `"maria  souza"` -> `"Maria  Souza"`, `"o'neil"` -> `"O'Neil"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_is_letter = false;
    for ch in value.chars() {
        if previous_is_letter {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        previous_is_letter = ch.is_alphabetic();
    }
    out
}
