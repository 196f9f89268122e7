use super::*;
use crate::inquiry::{CompanySize, FieldUpdate, HelpTopic};

fn valid() -> ContactInquiry {
    ContactInquiry {
        first_name: "Ana".into(),
        last_name: "Lee".into(),
        email: "ana@example.com".into(),
        job_title: "CTO".into(),
        company_name: "Acme".into(),
        help: HelpTopic::Evaluate,
        company_size: CompanySize::Large,
        info: String::new(),
        terms: false,
    }
}

// =============================================================================
// email grammar
// =============================================================================

#[test]
fn email_accepts_common_addresses() {
    for email in [
        "ana@example.com",
        "ana.lee@example.co.uk",
        "ana+sales@mail.example.io",
        "o'brien@example.ie",
        "first_last-2@sub-domain.example.org",
        "A@B.CO",
    ] {
        assert!(is_valid_email(email), "expected valid: {email:?}");
    }
}

#[test]
fn email_rejects_malformed_addresses() {
    for email in [
        "",
        "ana",
        "ana@",
        "@example.com",
        "ana@example",
        "ana@example.c",
        "ana@example.c0m",
        "ana@@example.com",
        "ana@exa@mple.com",
        ".ana@example.com",
        "ana.@example.com",
        "an..a@example.com",
        "ana'@example.com",
        "ana lee@example.com",
        "ana@-example.com",
        "ana@example..com",
        "ana@exam_ple.com",
        " ana@example.com",
        "ana@example.com ",
    ] {
        assert!(!is_valid_email(email), "expected invalid: {email:?}");
    }
}

// =============================================================================
// validate_field
// =============================================================================

#[test]
fn required_text_fields_reject_blank_values() {
    for field in [Field::FirstName, Field::LastName, Field::JobTitle, Field::CompanyName] {
        let mut inquiry = valid();
        inquiry.apply(FieldUpdate::parse(field, "   ").unwrap());
        assert_eq!(validate_field(&inquiry, field), Err(ValidationError::Required(field)));
    }
}

#[test]
fn empty_email_is_required_not_malformed() {
    let mut inquiry = valid();
    inquiry.email = String::new();
    assert_eq!(validate_field(&inquiry, Field::Email), Err(ValidationError::Required(Field::Email)));
}

#[test]
fn malformed_email_is_invalid() {
    let mut inquiry = valid();
    inquiry.email = "ana@example".into();
    assert_eq!(validate_field(&inquiry, Field::Email), Err(ValidationError::InvalidEmail));
}

#[test]
fn info_and_choice_fields_always_pass() {
    let inquiry = ContactInquiry::default();
    for field in [Field::Info, Field::Help, Field::CompanySize, Field::Terms] {
        assert_eq!(validate_field(&inquiry, field), Ok(()));
    }
}

// =============================================================================
// validate_inquiry
// =============================================================================

#[test]
fn valid_inquiry_passes() {
    assert_eq!(validate_inquiry(&valid()), Ok(()));
}

#[test]
fn pristine_inquiry_reports_every_required_field() {
    let errors = validate_inquiry(&ContactInquiry::default()).unwrap_err();
    let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
    assert_eq!(
        fields,
        vec![Field::FirstName, Field::LastName, Field::Email, Field::JobTitle, Field::CompanyName]
    );
}

#[test]
fn errors_collect_mixed_failures() {
    let mut inquiry = valid();
    inquiry.last_name = String::new();
    inquiry.email = "nope".into();

    let errors = validate_inquiry(&inquiry).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(Field::LastName), Some(&ValidationError::Required(Field::LastName)));
    assert_eq!(errors.get(Field::Email), Some(&ValidationError::InvalidEmail));
    assert_eq!(errors.to_string(), "last_name: last name is required; email: invalid email address");
}

// =============================================================================
// messages
// =============================================================================

#[test]
fn error_messages_use_field_labels() {
    assert_eq!(ValidationError::Required(Field::JobTitle).to_string(), "job title is required");
    assert_eq!(
        ValidationError::UnknownOption { field: Field::CompanySize, value: "huge".into() }.to_string(),
        "'huge' is not a valid option for company size"
    );
}

#[test]
fn field_errors_insert_and_remove() {
    let mut errors = FieldErrors::new();
    assert!(errors.is_empty());
    errors.insert(Field::Email, ValidationError::InvalidEmail);
    errors.insert(Field::Email, ValidationError::Required(Field::Email));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Email), Some(&ValidationError::Required(Field::Email)));
    errors.remove(Field::Email);
    assert!(errors.is_empty());
}
