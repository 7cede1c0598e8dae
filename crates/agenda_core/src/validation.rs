//! Contact form validation and normalization.
//!
//! # Responsibility
//! - Turn raw form text into a normalized [`ContactInput`].
//! - Report the first missing required field or the first unparseable
//!   numeric field.
//!
//! # Invariants
//! - Required fields are checked in `name, phone, email` order, before any
//!   numeric parsing.
//! - Income parsing only swaps every `,` for `.`; grouped input such as
//!   `1.234,56` is rejected rather than guessed.
//! - Validation is pure; it never touches the store.

use crate::model::contact::{title_case, ContactField, ContactInput};
use crate::model::form::ContactForm;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Why a form cannot become a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or whitespace-only.
    MissingRequiredField(ContactField),
    /// Age is not a non-negative integer, or income is not a finite number.
    FormatError { field: ContactField, value: String },
}

impl ValidationError {
    /// Field the error refers to.
    pub fn field(&self) -> ContactField {
        match self {
            Self::MissingRequiredField(field) => *field,
            Self::FormatError { field, .. } => *field,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField(field) => write!(f, "required field `{field}` is empty"),
            Self::FormatError { field, value } => {
                write!(f, "field `{field}` has invalid numeric value `{value}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Validates raw form text and returns normalized contact values.
///
/// # Errors
/// - `MissingRequiredField` when name, phone or email is blank.
/// - `FormatError` when age is not a `u32` or income is not a finite float
///   after `,` -> `.` replacement.
pub fn validate(form: &ContactForm) -> ValidationResult<ContactInput> {
    for field in ContactField::REQUIRED {
        if form.get(field).trim().is_empty() {
            return Err(ValidationError::MissingRequiredField(field));
        }
    }

    let age = parse_age(&form.age)?;
    let income = parse_income(&form.income)?;

    Ok(ContactInput {
        name: title_case(form.name.trim()),
        age,
        phone: form.phone.clone(),
        email: form.email.trim().to_lowercase(),
        income,
        state: form.state.trim().to_uppercase(),
    })
}

fn parse_age(raw: &str) -> ValidationResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| format_error(ContactField::Age, raw))
}

fn parse_income(raw: &str) -> ValidationResult<f64> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format_error(ContactField::Income, raw)),
    }
}

fn format_error(field: ContactField, raw: &str) -> ValidationError {
    ValidationError::FormatError {
        field,
        value: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{validate, ValidationError};
    use crate::model::contact::ContactField;
    use crate::model::form::ContactForm;

    fn form(name: &str, age: &str, phone: &str, email: &str, income: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            age: age.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            income: income.to_string(),
            state: "sp".to_string(),
        }
    }

    #[test]
    fn normalizes_case_of_name_email_and_state() {
        let input = validate(&ContactForm {
            name: "maria souza".to_string(),
            age: "40".to_string(),
            phone: "123".to_string(),
            email: "M@X.com".to_string(),
            income: "2500,50".to_string(),
            state: "ba".to_string(),
        })
        .expect("valid form");

        assert_eq!(input.name, "Maria Souza");
        assert_eq!(input.age, 40);
        assert_eq!(input.phone, "123");
        assert_eq!(input.email, "m@x.com");
        assert_eq!(input.income, 2500.50);
        assert_eq!(input.state, "BA");
    }

    #[test]
    fn accepts_dot_and_comma_decimal_separators() {
        let dot = validate(&form("a", "1", "2", "e", "10.25")).expect("dot separator");
        let comma = validate(&form("a", "1", "2", "e", "10,25")).expect("comma separator");
        assert_eq!(dot.income, comma.income);
    }

    #[test]
    fn grouped_thousands_are_rejected() {
        let err = validate(&form("a", "1", "2", "e", "1.234,56")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::FormatError {
                field: ContactField::Income,
                value: "1.234,56".to_string(),
            }
        );
    }

    #[test]
    fn required_fields_are_checked_before_numbers() {
        let err = validate(&form("a", "abc", "   ", "e", "x")).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredField(ContactField::Phone));
    }

    #[test]
    fn reports_first_missing_field_in_form_order() {
        let err = validate(&form("", "1", "", "", "1")).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredField(ContactField::Name));
    }

    #[test]
    fn rejects_non_integer_and_negative_age() {
        for age in ["abc", "4.5", "-3", ""] {
            let err = validate(&form("a", age, "2", "e", "1")).unwrap_err();
            assert_eq!(err.field(), ContactField::Age, "age input `{age}`");
        }
    }

    #[test]
    fn rejects_non_finite_income() {
        for income in ["inf", "NaN", "", "R$ 10.00"] {
            let err = validate(&form("a", "1", "2", "e", income)).unwrap_err();
            assert_eq!(err.field(), ContactField::Income, "income input `{income}`");
        }
    }

    #[test]
    fn surrounding_whitespace_is_tolerated_for_numbers_and_phone_is_verbatim() {
        let input = validate(&ContactForm {
            name: "  ana  ".to_string(),
            age: " 28 ".to_string(),
            phone: " (11) 9999-8888 ".to_string(),
            email: " Ana@Email.com ".to_string(),
            income: " 4500 ".to_string(),
            state: String::new(),
        })
        .expect("valid form");

        assert_eq!(input.name, "Ana");
        assert_eq!(input.age, 28);
        assert_eq!(input.phone, " (11) 9999-8888 ");
        assert_eq!(input.email, "ana@email.com");
        assert_eq!(input.income, 4500.0);
        assert_eq!(input.state, "");
    }
}
