use std::fmt;
use std::sync::LazyLock;

use crate::errors::AppError;
use regex::Regex;
use serde::Serialize;

/// A single address book record.
///
/// Fields are set once at construction and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    name: String,
    phone: String,
    email: String,
}

/// User-facing descriptions of each field rule.
pub struct ValidationReq;

impl ValidationReq {
    pub fn name_req() -> String {
        "Name cannot be empty.".to_string()
    }

    pub fn phone_req() -> String {
        "Invalid phone number format. Please enter 10 digits.".to_string()
    }

    pub fn email_req() -> String {
        "Invalid email address format.".to_string()
    }
}

impl Contact {
    /// Builds a contact from raw user input.
    ///
    /// Every field is trimmed, then checked with [`validate_name`],
    /// [`validate_phone`] and [`validate_email`] in that order. The first
    /// failing check aborts construction.
    pub fn new(name: &str, phone: &str, email: &str) -> Result<Self, AppError> {
        let (name, phone, email) = (name.trim(), phone.trim(), email.trim());

        validate_name(name)?;
        validate_phone(phone)?;
        validate_email(email)?;

        Ok(Contact {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        })
    }

    /// Rebuilds a contact read back from the contacts file.
    ///
    /// The file is assumed to be produced by this program, so nothing is
    /// trimmed or validated here.
    pub fn from_trusted(name: &str, phone: &str, email: &str) -> Self {
        Contact {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Case-insensitive name comparison used by search and remove.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone Number: {}, Email: {}",
            self.name, self.phone, self.email
        )
    }
}

pub fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation(ValidationReq::name_req()));
    }
    Ok(())
}

// Exactly ten ASCII digits, no separators or country code
static PHONE_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$"));

// local@domain.tld where tld is 2 to 4 letters
static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}$"));

fn compiled(
    pattern: &'static LazyLock<Result<Regex, regex::Error>>,
) -> Result<&'static Regex, AppError> {
    pattern.as_ref().map_err(|e| AppError::Regex(e.clone()))
}

pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    let re = compiled(&PHONE_RE)?;
    if !re.is_match(phone.trim()) {
        return Err(AppError::Validation(ValidationReq::phone_req()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    let re = compiled(&EMAIL_RE)?;
    if !re.is_match(email.trim()) {
        return Err(AppError::Validation(ValidationReq::email_req()));
    }
    Ok(())
}
