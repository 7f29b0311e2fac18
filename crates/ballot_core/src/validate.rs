//! Pure validation of raw form fields into a [`CountrySubmission`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::Country;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;

/// `local@domain.tld`: no whitespace, exactly one `@`, at least one dot in the domain.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("Invalid email regex")
});

/// Form fields exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawSubmission {
    pub name: String,
    pub email: String,
    pub country: String,
}

impl RawSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            country: country.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.country.is_empty()
    }
}

/// A submission that passed every rule. Fields are already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySubmission {
    pub name: String,
    pub email: String,
    pub country_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Country,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Country => "country",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    TooShort,
    TooLong,
    InvalidFormat,
    UnknownCountry,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(Field::Name) => write!(f, "Name is required"),
            FieldError::Required(Field::Email) => write!(f, "Email is required"),
            FieldError::Required(Field::Country) => write!(f, "Please select a country"),
            FieldError::TooShort => {
                write!(f, "Name must be at least {NAME_MIN_CHARS} characters")
            }
            FieldError::TooLong => {
                write!(f, "Name must be at most {NAME_MAX_CHARS} characters")
            }
            FieldError::InvalidFormat => write!(f, "Please enter a valid email address"),
            FieldError::UnknownCountry => write!(f, "Please select a country from the list"),
        }
    }
}

/// At most one error per field; the first failing rule for a field wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    /// Field key to display message, in field order.
    pub fn messages(&self) -> Vec<(&'static str, String)> {
        self.errors
            .iter()
            .map(|(field, error)| (field.key(), error.to_string()))
            .collect()
    }

    fn record(&mut self, field: Field, error: Option<FieldError>) {
        if let Some(error) = error {
            self.errors.entry(field).or_insert(error);
        }
    }
}

/// Validates every field independently and returns either the normalized
/// submission or all field errors.
///
/// `catalog` is the loaded country list. When it is empty only the
/// `Required` rule applies to the country code.
pub fn validate(
    raw: &RawSubmission,
    catalog: &[Country],
) -> Result<CountrySubmission, ValidationErrors> {
    let name = raw.name.trim();
    let email = raw.email.trim();
    let country = raw.country.trim();

    let mut errors = ValidationErrors::default();
    errors.record(Field::Name, check_name(name));
    errors.record(Field::Email, check_email(email));
    errors.record(Field::Country, check_country(country, catalog));

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CountrySubmission {
        name: name.to_string(),
        email: email.to_lowercase(),
        country_code: country.to_string(),
    })
}

fn check_name(name: &str) -> Option<FieldError> {
    let chars = name.chars().count();
    if chars == 0 {
        Some(FieldError::Required(Field::Name))
    } else if chars < NAME_MIN_CHARS {
        Some(FieldError::TooShort)
    } else if chars > NAME_MAX_CHARS {
        Some(FieldError::TooLong)
    } else {
        None
    }
}

fn check_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        Some(FieldError::Required(Field::Email))
    } else if !EMAIL_REGEX.is_match(email) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    }
}

fn check_country(code: &str, catalog: &[Country]) -> Option<FieldError> {
    if code.is_empty() {
        return Some(FieldError::Required(Field::Country));
    }
    if !catalog.is_empty() && !catalog.iter().any(|country| country.code == code) {
        return Some(FieldError::UnknownCountry);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let raw = RawSubmission::new("  Ada  ", "  Ada@Example.COM ", "GBR");
        let submission = validate(&raw, &[]).unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.country_code, "GBR");
    }

    #[test]
    fn email_grammar() {
        for good in ["a@b.co", "first.last@sub.domain.org", "x+tag@host.io"] {
            assert_eq!(check_email(good), None, "{good}");
        }
        for bad in ["bad", "a@b", "@b.co", "a@.co", "a@b.", "a b@c.de", "a@@b.co"] {
            assert_eq!(check_email(bad), Some(FieldError::InvalidFormat), "{bad}");
        }
    }

    #[test]
    fn name_length_counts_characters() {
        assert_eq!(check_name("Zoë"), None);
        assert_eq!(check_name("é"), Some(FieldError::TooShort));
        assert_eq!(check_name(&"ü".repeat(100)), None);
        assert_eq!(check_name(&"ü".repeat(101)), Some(FieldError::TooLong));
    }

    #[test]
    fn catalog_membership_only_when_loaded() {
        let catalog = vec![Country {
            name: "France".to_string(),
            code: "FRA".to_string(),
        }];
        assert_eq!(check_country("FRA", &catalog), None);
        assert_eq!(
            check_country("XXX", &catalog),
            Some(FieldError::UnknownCountry)
        );
        assert_eq!(check_country("XXX", &[]), None);
    }
}
