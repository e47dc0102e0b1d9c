//! Field rules for translator drafts.
//!
//! Every rule is evaluated so callers can report all violations in one
//! response.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::{AddressFields, TranslatorProfile};

pub const AGE_MIN: i32 = 18;
pub const AGE_MAX: i32 = 120;
pub const GENDER_MAX: usize = 32;
pub const CIN_MAX: usize = 32;
pub const IMAGE_MAX: usize = 2048;
pub const DESCRIPTION_MAX: usize = 2000;
pub const ADDRESS_FIELD_MAX: usize = 255;

static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static CIN_RE: OnceLock<Regex> = OnceLock::new();

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        Regex::new(r"^[0-9+()\- ]{6,20}$")
            .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

fn cin_regex() -> &'static Regex {
    CIN_RE.get_or_init(|| {
        Regex::new("^[A-Za-z0-9]+$")
            .unwrap_or_else(|error| panic!("cin regex failed to compile: {error}"))
    })
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatorValidationError {
    AgeOutOfRange,
    Blank { field: &'static str },
    TooLong { field: &'static str, max: usize },
    InvalidPhone,
    InvalidCin,
    InvalidPrice,
}

impl fmt::Display for TranslatorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AgeOutOfRange => write!(f, "age must be between {AGE_MIN} and {AGE_MAX}"),
            Self::Blank { field } => write!(f, "{field} must not be blank"),
            Self::TooLong { field, max } => {
                write!(f, "{field} must be at most {max} characters")
            }
            Self::InvalidPhone => write!(
                f,
                "phone must be 6 to 20 characters of digits, spaces, '+', '-', '(' or ')'"
            ),
            Self::InvalidCin => write!(f, "cin may only contain letters and digits"),
            Self::InvalidPrice => write!(f, "price must be a finite, non-negative number"),
        }
    }
}

/// Every violation found in a draft, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorValidationErrors(Vec<TranslatorValidationError>);

impl TranslatorValidationErrors {
    pub fn errors(&self) -> &[TranslatorValidationError] {
        &self.0
    }

    /// Human-readable messages suitable for clients.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for TranslatorValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for TranslatorValidationErrors {}

fn check_text(
    errors: &mut Vec<TranslatorValidationError>,
    field: &'static str,
    value: &str,
    max: usize,
    required: bool,
) {
    if required && value.trim().is_empty() {
        errors.push(TranslatorValidationError::Blank { field });
    } else if value.chars().count() > max {
        errors.push(TranslatorValidationError::TooLong { field, max });
    }
}

pub(crate) fn validate_draft(
    profile: &TranslatorProfile,
    address: &AddressFields,
) -> Result<(), TranslatorValidationErrors> {
    let mut errors = Vec::new();

    if !(AGE_MIN..=AGE_MAX).contains(&profile.age) {
        errors.push(TranslatorValidationError::AgeOutOfRange);
    }
    check_text(&mut errors, "gender", &profile.gender, GENDER_MAX, true);
    if !phone_regex().is_match(&profile.phone) {
        errors.push(TranslatorValidationError::InvalidPhone);
    }
    if profile.cin.trim().is_empty() {
        errors.push(TranslatorValidationError::Blank { field: "cin" });
    } else if profile.cin.chars().count() > CIN_MAX {
        errors.push(TranslatorValidationError::TooLong {
            field: "cin",
            max: CIN_MAX,
        });
    } else if !cin_regex().is_match(&profile.cin) {
        errors.push(TranslatorValidationError::InvalidCin);
    }
    check_text(&mut errors, "image", &profile.image, IMAGE_MAX, false);
    check_text(
        &mut errors,
        "description",
        &profile.description,
        DESCRIPTION_MAX,
        false,
    );
    if !profile.price.is_finite() || profile.price < 0.0 {
        errors.push(TranslatorValidationError::InvalidPrice);
    }

    check_text(&mut errors, "address.street", &address.street, ADDRESS_FIELD_MAX, true);
    check_text(&mut errors, "address.city", &address.city, ADDRESS_FIELD_MAX, true);
    check_text(&mut errors, "address.state", &address.state, ADDRESS_FIELD_MAX, true);
    check_text(
        &mut errors,
        "address.postalCode",
        &address.postal_code,
        ADDRESS_FIELD_MAX,
        true,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TranslatorValidationErrors(errors))
    }
}
