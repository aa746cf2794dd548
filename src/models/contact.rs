//! Contact model representing one entry in the directory.

use crate::directory::ContactField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the directory.
///
/// Construction performs no validation; the directory checks field presence
/// when the contact is added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(default)]
pub struct Contact {
    /// Full name of the contact
    pub name: String,

    /// Email address, the identifying key within a directory
    pub email: String,

    /// Phone number
    pub phone: String,
}

impl Contact {
    /// Create a new contact from its three fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Get the value of a single field.
    pub fn field(&self, field: ContactField) -> &str {
        (field.accessor())(self)
    }

    /// Fields that are empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.field(*field).is_empty())
            .collect()
    }

    /// Whether any field contains `keyword` as a case-sensitive substring.
    pub fn matches(&self, keyword: &str) -> bool {
        ContactField::ALL
            .into_iter()
            .any(|field| self.field(field).contains(keyword))
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> ({})", self.name, self.email, self.phone)
    }
}
