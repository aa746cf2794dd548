//! Typed field selector used for sorting and searching.

use crate::error::DirectoryError;
use crate::models::Contact;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl ContactField {
    /// All fields in declaration order.
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Phone];

    /// Function extracting this field from a contact.
    pub fn accessor(self) -> fn(&Contact) -> &str {
        fn name(contact: &Contact) -> &str {
            &contact.name
        }
        fn email(contact: &Contact) -> &str {
            &contact.email
        }
        fn phone(contact: &Contact) -> &str {
            &contact.phone
        }

        match self {
            Self::Name => name,
            Self::Email => email,
            Self::Phone => phone,
        }
    }

    /// The field name as used in criteria and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl FromStr for ContactField {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                DirectoryError::Validation(format!(
                    "unsupported sort criterion '{}', expected one of name, email, phone",
                    s
                ))
            })
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
