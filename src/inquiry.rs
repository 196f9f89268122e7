//! Contact inquiry record and its typed field updates.
//!
//! DESIGN
//! ======
//! The inquiry is a plain serde record whose JSON shape is the request body
//! the submission endpoint expects. The two enumerated fields are real enums,
//! so an inquiry can never hold a value outside their fixed sets; raw strings
//! only enter through `FromStr` / [`FieldUpdate::parse`], which reject
//! anything unknown.

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validate::ValidationError;

// =============================================================================
// ENUMERATED FIELDS
// =============================================================================

/// What the prospect wants help with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HelpTopic {
    #[serde(rename = "Evaluate Bird for my company")]
    Evaluate,
    #[default]
    #[serde(rename = "Learn More")]
    LearnMore,
    #[serde(rename = "Get a Quote")]
    GetQuote,
    #[serde(rename = "Other")]
    Other,
}

impl HelpTopic {
    pub const ALL: [Self; 4] = [Self::Evaluate, Self::LearnMore, Self::GetQuote, Self::Other];

    /// Wire value, identical to the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Evaluate => "Evaluate Bird for my company",
            Self::LearnMore => "Learn More",
            Self::GetQuote => "Get a Quote",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for HelpTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HelpTopic {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|topic| topic.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownOption { field: Field::Help, value: s.to_owned() })
    }
}

/// Headcount band of the prospect's company.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanySize {
    #[default]
    #[serde(rename = "1-10")]
    Micro,
    #[serde(rename = "11-50")]
    Small,
    #[serde(rename = "51-200")]
    Medium,
    #[serde(rename = "201-500")]
    Large,
    #[serde(rename = "501-1000")]
    XLarge,
    #[serde(rename = "1000+")]
    Enterprise,
}

impl CompanySize {
    pub const ALL: [Self; 6] = [
        Self::Micro,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::XLarge,
        Self::Enterprise,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Micro => "1-10",
            Self::Small => "11-50",
            Self::Medium => "51-200",
            Self::Large => "201-500",
            Self::XLarge => "501-1000",
            Self::Enterprise => "1000+",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanySize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownOption { field: Field::CompanySize, value: s.to_owned() })
    }
}

// =============================================================================
// INQUIRY
// =============================================================================

/// The payload a prospective customer submits. Field names are the JSON keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: String,
    pub company_name: String,
    pub help: HelpTopic,
    pub company_size: CompanySize,
    pub info: String,
    pub terms: bool,
}

impl ContactInquiry {
    /// Write one field. The variant carries a value of the field's own type.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FirstName(v) => self.first_name = v,
            FieldUpdate::LastName(v) => self.last_name = v,
            FieldUpdate::Email(v) => self.email = v,
            FieldUpdate::JobTitle(v) => self.job_title = v,
            FieldUpdate::CompanyName(v) => self.company_name = v,
            FieldUpdate::Help(v) => self.help = v,
            FieldUpdate::CompanySize(v) => self.company_size = v,
            FieldUpdate::Info(v) => self.info = v,
            FieldUpdate::Terms(v) => self.terms = v,
        }
    }

    /// Borrow a text field's current value. `None` for non-text fields.
    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::JobTitle => Some(&self.job_title),
            Field::CompanyName => Some(&self.company_name),
            Field::Info => Some(&self.info),
            Field::Help | Field::CompanySize | Field::Terms => None,
        }
    }
}

// =============================================================================
// FIELD KEYS
// =============================================================================

/// Key of one inquiry field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    JobTitle,
    CompanyName,
    Help,
    CompanySize,
    Info,
    Terms,
}

impl Field {
    pub const ALL: [Self; 9] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::JobTitle,
        Self::CompanyName,
        Self::Help,
        Self::CompanySize,
        Self::Info,
        Self::Terms,
    ];

    /// JSON key of the field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::JobTitle => "job_title",
            Self::CompanyName => "company_name",
            Self::Help => "help",
            Self::CompanySize => "company_size",
            Self::Info => "info",
            Self::Terms => "terms",
        }
    }

    /// Human label used in error messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Email => "email",
            Self::JobTitle => "job title",
            Self::CompanyName => "company name",
            Self::Help => "how can we help",
            Self::CompanySize => "company size",
            Self::Info => "additional info",
            Self::Terms => "marketing consent",
        }
    }

    /// Text fields that must be non-blank before submission.
    #[must_use]
    pub fn is_required_text(self) -> bool {
        matches!(
            self,
            Self::FirstName | Self::LastName | Self::Email | Self::JobTitle | Self::CompanyName
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_owned()))
    }
}

// =============================================================================
// FIELD UPDATES
// =============================================================================

/// A single-field edit with a value of that field's declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FirstName(String),
    LastName(String),
    Email(String),
    JobTitle(String),
    CompanyName(String),
    Help(HelpTopic),
    CompanySize(CompanySize),
    Info(String),
    Terms(bool),
}

impl FieldUpdate {
    /// Build an update from raw form input.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when an enumerated field gets a value
    /// outside its set or the consent flag is not a recognizable boolean.
    pub fn parse(field: Field, raw: &str) -> Result<Self, ValidationError> {
        let update = match field {
            Field::FirstName => Self::FirstName(raw.to_owned()),
            Field::LastName => Self::LastName(raw.to_owned()),
            Field::Email => Self::Email(raw.to_owned()),
            Field::JobTitle => Self::JobTitle(raw.to_owned()),
            Field::CompanyName => Self::CompanyName(raw.to_owned()),
            Field::Help => Self::Help(raw.parse()?),
            Field::CompanySize => Self::CompanySize(raw.parse()?),
            Field::Info => Self::Info(raw.to_owned()),
            Field::Terms => Self::Terms(parse_flag(raw)?),
        };
        Ok(update)
    }

    /// Key of the field this update targets.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::FirstName(_) => Field::FirstName,
            Self::LastName(_) => Field::LastName,
            Self::Email(_) => Field::Email,
            Self::JobTitle(_) => Field::JobTitle,
            Self::CompanyName(_) => Field::CompanyName,
            Self::Help(_) => Field::Help,
            Self::CompanySize(_) => Field::CompanySize,
            Self::Info(_) => Field::Info,
            Self::Terms(_) => Field::Terms,
        }
    }
}

fn parse_flag(raw: &str) -> Result<bool, ValidationError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ValidationError::InvalidFlag(raw.to_owned())),
    }
}
