//! Required-field and email-shape checks for [`ClientDetails`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::client::{ClientDetails, ClientField};

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Field name → human-readable message for every failing field.
///
/// Valid iff empty. Ordered by [`ClientField`] so output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<ClientField, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ClientField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: ClientField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the error for one field, leaving the others untouched.
    pub fn clear(&mut self, field: ClientField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClientField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Check every field of `details`, returning all failures at once.
pub fn validate(details: &ClientDetails) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if details.name.trim().is_empty() {
        errors.insert(ClientField::Name, "Name is required");
    }

    if details.email.trim().is_empty() {
        errors.insert(ClientField::Email, "Email is required");
    } else if !EMAIL_SHAPE.is_match(&details.email) {
        errors.insert(ClientField::Email, "Email is invalid");
    }

    if details.phone_number.trim().is_empty() {
        errors.insert(ClientField::PhoneNumber, "Phone number is required");
    }

    if details.identification_number.trim().is_empty() {
        errors.insert(
            ClientField::IdentificationNumber,
            "Identification number is required",
        );
    }

    errors
}
