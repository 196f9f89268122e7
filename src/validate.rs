//! Client-side validation of contact inquiries.
//!
//! Everything here is pure: no I/O, no logging. The controller decides when
//! to run a check and what to do with the result.

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::fmt;

use crate::inquiry::{ContactInquiry, Field};

/// A single field failing its constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Required(Field),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("'{value}' is not a valid option for {}", .field.label())]
    UnknownOption { field: Field, value: String },
    #[error("'{0}' is not a yes/no value")]
    InvalidFlag(String),
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

// =============================================================================
// FIELD ERRORS
// =============================================================================

/// Per-field error messages, ordered by field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, err)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {err}")?;
        }
        Ok(())
    }
}

// =============================================================================
// CHECKS
// =============================================================================

/// Check one field of `inquiry` against its constraint.
///
/// # Errors
///
/// Returns the [`ValidationError`] for that field, if any.
pub fn validate_field(inquiry: &ContactInquiry, field: Field) -> Result<(), ValidationError> {
    let Some(value) = inquiry.text(field) else {
        // Enumerated and boolean fields are valid by construction.
        return Ok(());
    };

    if field.is_required_text() && value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    if field == Field::Email && !is_valid_email(value) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Check every field and collect all failures.
///
/// # Errors
///
/// Returns the non-empty set of field errors when the inquiry is not eligible
/// for submission.
pub fn validate_inquiry(inquiry: &ContactInquiry) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        if let Err(e) = validate_field(inquiry, field) {
            errors.insert(field, e);
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Email grammar: `local@label.label...tld`.
///
/// The local part allows `A-Z a-z 0-9 _ ' + - .`, may not start or end with a
/// dot, may not end with an apostrophe, and may not contain `..`. Every
/// domain label but the last is alphanumeric plus `-` and starts with an
/// alphanumeric. The top-level label is at least two ASCII letters.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.starts_with('.') || local.contains("..") {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'))
    {
        return false;
    }
    !local.ends_with(['.', '\''])
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    if rest.is_empty() {
        return false;
    }

    let labels_ok = rest.iter().all(|label| {
        label.starts_with(|c: char| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    labels_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}
