// Shared contact fields with field-level validation.
//
// Both the short and the full customer shape embed this value object, so
// each rule lives in exactly one place and is enforced at construction and
// on every setter.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::error::{AppError, Result};

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[a-zA-Zа-яА-ЯёЁ\d\s\-.,'"()]+$"#).expect("name pattern compiles")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s+()-]+$").expect("phone pattern compiles"));

/// Validate a display name (customer name or contact person).
///
/// Trimmed, 2..=100 characters, Latin/Cyrillic letters, digits, space and
/// a fixed punctuation set.
pub(crate) fn validate_name(value: &str, field: &str) -> Result<String> {
    let value = value.trim();
    let length = value.chars().count();
    if length < 2 {
        return Err(AppError::validation(format!(
            "{} must contain at least 2 characters",
            field
        )));
    }
    if length > 100 {
        return Err(AppError::validation(format!(
            "{} must contain at most 100 characters",
            field
        )));
    }
    if !NAME_RE.is_match(value) {
        return Err(AppError::validation(format!(
            "{} contains characters outside the allowed set",
            field
        )));
    }
    Ok(value.to_string())
}

/// Validate a phone number: 5..=20 digits once formatting is stripped, and
/// no characters besides digits, space, `+`, `-` and parentheses.
pub(crate) fn validate_phone(value: &str) -> Result<String> {
    let value = value.trim();
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < 5 {
        return Err(AppError::validation("phone must contain at least 5 digits"));
    }
    if digits > 20 {
        return Err(AppError::validation("phone must contain at most 20 digits"));
    }
    if !PHONE_RE.is_match(value) {
        return Err(AppError::validation(
            "phone may only contain digits, spaces, '+', '-' and parentheses",
        ));
    }
    Ok(value.to_string())
}

/// Validate a postal address: trimmed, 5..=200 characters, no character
/// restriction.
pub(crate) fn validate_address(value: &str) -> Result<String> {
    let value = value.trim();
    let length = value.chars().count();
    if length < 5 {
        return Err(AppError::validation(
            "address must contain at least 5 characters",
        ));
    }
    if length > 200 {
        return Err(AppError::validation(
            "address must contain at most 200 characters",
        ));
    }
    Ok(value.to_string())
}

/// Validate a record id. Ids are issued by repositories and never negative.
pub(crate) fn validate_id(id: i64) -> Result<i64> {
    if id < 0 {
        return Err(AppError::validation("customer id must not be negative"));
    }
    Ok(id)
}

/// Contact fields shared by [`Customer`](super::Customer) and
/// [`ShortCustomer`](super::ShortCustomer), validated once and embedded by
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactInfo {
    name: String,
    phone: String,
    contact_person: String,
}

impl ContactInfo {
    pub fn new(name: &str, phone: &str, contact_person: &str) -> Result<Self> {
        Ok(Self {
            name: validate_name(name, "name")?,
            phone: validate_phone(phone)?,
            contact_person: validate_name(contact_person, "contact person")?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn contact_person(&self) -> &str {
        &self.contact_person
    }

    pub fn set_name(&mut self, value: &str) -> Result<()> {
        self.name = validate_name(value, "name")?;
        Ok(())
    }

    pub fn set_phone(&mut self, value: &str) -> Result<()> {
        self.phone = validate_phone(value)?;
        Ok(())
    }

    pub fn set_contact_person(&mut self, value: &str) -> Result<()> {
        self.contact_person = validate_name(value, "contact person")?;
        Ok(())
    }
}
