use std::fmt;

use serde::{Deserialize, Serialize};

/// The four required fields describing the person the documents concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetails {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub identification_number: String,
}

impl ClientDetails {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        identification_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            identification_number: identification_number.into(),
        }
    }

    pub fn get(&self, field: ClientField) -> &str {
        match field {
            ClientField::Name => &self.name,
            ClientField::Email => &self.email,
            ClientField::PhoneNumber => &self.phone_number,
            ClientField::IdentificationNumber => &self.identification_number,
        }
    }

    pub fn set(&mut self, field: ClientField, value: impl Into<String>) {
        let slot = match field {
            ClientField::Name => &mut self.name,
            ClientField::Email => &mut self.email,
            ClientField::PhoneNumber => &mut self.phone_number,
            ClientField::IdentificationNumber => &mut self.identification_number,
        };
        *slot = value.into();
    }
}

/// Field names of [`ClientDetails`], in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClientField {
    Name,
    Email,
    PhoneNumber,
    IdentificationNumber,
}

impl ClientField {
    pub const ALL: [ClientField; 4] = [
        ClientField::Name,
        ClientField::Email,
        ClientField::PhoneNumber,
        ClientField::IdentificationNumber,
    ];

    /// The field's key as it appears in serialized form state.
    pub fn key(self) -> &'static str {
        match self {
            ClientField::Name => "name",
            ClientField::Email => "email",
            ClientField::PhoneNumber => "phoneNumber",
            ClientField::IdentificationNumber => "identificationNumber",
        }
    }
}

impl fmt::Display for ClientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
