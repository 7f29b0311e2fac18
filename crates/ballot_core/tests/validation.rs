use ballot_core::{validate, Country, Field, FieldError, RawSubmission};
use pretty_assertions::assert_eq;

fn catalog() -> Vec<Country> {
    vec![
        Country {
            name: "France".to_string(),
            code: "FRA".to_string(),
        },
        Country {
            name: "Japan".to_string(),
            code: "JPN".to_string(),
        },
    ]
}

#[test]
fn valid_names_across_the_length_range_pass() {
    for len in [2usize, 3, 50, 99, 100] {
        let name = format!("  {}  ", "n".repeat(len));
        let raw = RawSubmission::new(name, "Voter@Example.org ", "FRA");
        let submission = validate(&raw, &[]).expect("valid submission");
        assert_eq!(submission.name.chars().count(), len);
        assert_eq!(submission.email, "voter@example.org");
        assert_eq!(submission.country_code, "FRA");
    }
}

#[test]
fn bad_name_lengths_yield_exactly_one_name_error() {
    let cases = [
        ("", FieldError::Required(Field::Name)),
        ("   ", FieldError::Required(Field::Name)),
        ("A", FieldError::TooShort),
        (" A ", FieldError::TooShort),
    ];
    for (name, expected) in cases {
        let errors = validate(&RawSubmission::new(name, "a@b.co", "FRA"), &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.fields(), vec![Field::Name], "name {name:?}");
        assert_eq!(errors.get(Field::Name), Some(expected));
    }

    let long = "x".repeat(101);
    let errors = validate(&RawSubmission::new(long, "a@b.co", "FRA"), &[]).unwrap_err();
    assert_eq!(errors.fields(), vec![Field::Name]);
    assert_eq!(errors.get(Field::Name), Some(FieldError::TooLong));
}

#[test]
fn malformed_emails_yield_exactly_one_email_error() {
    for email in ["", "  ", "bad", "no-at.example.com", "user@nodot", "user@"] {
        let errors = validate(&RawSubmission::new("Ada", email, "FRA"), &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.fields(), vec![Field::Email], "email {email:?}");
    }
    let errors = validate(&RawSubmission::new("Ada", "", "FRA"), &[]).unwrap_err();
    assert_eq!(
        errors.get(Field::Email),
        Some(FieldError::Required(Field::Email))
    );
    let errors = validate(&RawSubmission::new("Ada", "bad", "FRA"), &[]).unwrap_err();
    assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidFormat));
}

#[test]
fn every_field_is_checked_independently() {
    let errors = validate(&RawSubmission::new("A", "bad", ""), &[]).unwrap_err();
    assert_eq!(errors.fields(), vec![Field::Name, Field::Email, Field::Country]);
    assert_eq!(
        errors.messages(),
        vec![
            ("name", "Name must be at least 2 characters".to_string()),
            ("email", "Please enter a valid email address".to_string()),
            ("country", "Please select a country".to_string()),
        ]
    );
}

#[test]
fn country_must_be_listed_once_catalog_is_known() {
    let raw = RawSubmission::new("Al", "a@b.co", "ZZZ");
    assert!(validate(&raw, &[]).is_ok());

    let errors = validate(&raw, &catalog()).unwrap_err();
    assert_eq!(errors.get(Field::Country), Some(FieldError::UnknownCountry));

    let raw = RawSubmission::new("Al", "a@b.co", "JPN");
    assert!(validate(&raw, &catalog()).is_ok());
}
