//! Contact directory operations: add, edit, delete, search and sort.

use crate::config::Config;
use crate::directory::ContactField;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Contact;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace, warn};

/// How `edit` treats the replacement contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditPolicy {
    /// Replace without checking fields or uniqueness.
    #[default]
    Lenient,

    /// Check the replacement like `add` does, ignoring the record being replaced.
    Strict,
}

impl FromStr for EditPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("Must be 'lenient' or 'strict', got: {}", other)),
        }
    }
}

impl fmt::Display for EditPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// An ordered, in-memory collection of contacts keyed by email.
///
/// Contacts keep insertion order until [`sort`](Self::sort) reorders them.
/// No two contacts added through [`add`](Self::add) share an email. Every
/// operation either succeeds completely or returns an error with the
/// collection unchanged.
///
/// The directory has no internal synchronization; wrap it in a lock to share
/// it across threads.
///
/// # Example
///
/// ```
/// use contact_directory::{Contact, ContactDirectory};
///
/// let mut directory = ContactDirectory::new();
/// directory.add(Contact::new("John Doe", "john@example.com", "111")).unwrap();
/// directory.add(Contact::new("Ann Lee", "ann@example.com", "222")).unwrap();
///
/// let sorted = directory.sort("name").unwrap();
/// assert_eq!(sorted[0].name, "Ann Lee");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    contacts: Vec<Contact>,
    policy: EditPolicy,
}

impl ContactDirectory {
    /// Create an empty directory with the lenient edit policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directory with the given edit policy.
    pub fn with_policy(policy: EditPolicy) -> Self {
        Self {
            contacts: Vec::new(),
            policy,
        }
    }

    /// Create an empty directory configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_policy(config.edit_policy)
    }

    /// The edit policy in effect.
    pub fn policy(&self) -> EditPolicy {
        self.policy
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All contacts in their current order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Look up a contact by email (exact, case-sensitive).
    pub fn get(&self, email: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.email == email)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.get(email).is_some()
    }

    /// Append a contact to the end of the directory.
    ///
    /// # Errors
    ///
    /// - `DirectoryError::Validation` if name, email or phone is empty.
    /// - `DirectoryError::Duplicate` if a contact with the same email exists.
    pub fn add(&mut self, contact: Contact) -> DirectoryResult<()> {
        Self::validate_fields(&contact).map_err(|e| {
            warn!(kind = %e.kind(), email = %contact.email, "Rejected contact");
            e
        })?;
        self.ensure_unique(&contact.email, None).map_err(|e| {
            warn!(kind = %e.kind(), email = %contact.email, "Rejected contact");
            e
        })?;

        debug!(email = %contact.email, "Added contact");
        self.contacts.push(contact);
        trace!(size = self.contacts.len(), "Directory size after add");
        Ok(())
    }

    /// Replace the contact whose email is `email` with `updated`, keeping its position.
    ///
    /// The replacement's own email may differ from `email`. Under
    /// [`EditPolicy::Lenient`] the replacement is stored as given; under
    /// [`EditPolicy::Strict`] it must have every field present and an email
    /// not used by any other contact.
    ///
    /// # Errors
    ///
    /// - `DirectoryError::NotFound` if no contact has `email`.
    /// - `DirectoryError::Validation` / `DirectoryError::Duplicate` under the
    ///   strict policy.
    pub fn edit(&mut self, email: &str, updated: Contact) -> DirectoryResult<()> {
        let index = self.position(email).map_err(|e| {
            warn!(kind = %e.kind(), email, "Edit failed");
            e
        })?;

        if self.policy == EditPolicy::Strict {
            Self::validate_fields(&updated)
                .and_then(|_| self.ensure_unique(&updated.email, Some(index)))
                .map_err(|e| {
                    warn!(kind = %e.kind(), email, replacement = %updated.email, "Edit failed");
                    e
                })?;
        }

        debug!(email, replacement = %updated.email, index, "Edited contact");
        self.contacts[index] = updated;
        Ok(())
    }

    /// Remove the contact whose email is `email`.
    ///
    /// Remaining contacts keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no contact has `email`.
    pub fn delete(&mut self, email: &str) -> DirectoryResult<()> {
        let index = self.position(email).map_err(|e| {
            warn!(kind = %e.kind(), email, "Delete failed");
            e
        })?;

        self.contacts.remove(index);
        debug!(email, size = self.contacts.len(), "Deleted contact");
        Ok(())
    }

    /// Contacts with `keyword` as a case-sensitive substring of any field.
    ///
    /// Returns clones in directory order. An empty keyword matches everything.
    pub fn search(&self, keyword: &str) -> Vec<Contact> {
        let results: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|c| c.matches(keyword))
            .cloned()
            .collect();

        trace!(keyword, matches = results.len(), "Searched contacts");
        results
    }

    /// Sort the directory in place by the field named `criteria`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Validation` if `criteria` is not `name`,
    /// `email` or `phone`; the directory is left unchanged.
    pub fn sort(&mut self, criteria: &str) -> DirectoryResult<&[Contact]> {
        let field = criteria.parse::<ContactField>().map_err(|e| {
            warn!(criteria, "Rejected sort criterion");
            e
        })?;
        Ok(self.sort_by(field))
    }

    /// Sort the directory in place by `field`, ascending and stable.
    pub fn sort_by(&mut self, field: ContactField) -> &[Contact] {
        let key = field.accessor();
        self.contacts.sort_by(|a, b| key(a).cmp(key(b)));

        trace!(%field, size = self.contacts.len(), "Sorted contacts");
        &self.contacts
    }

    fn position(&self, email: &str) -> DirectoryResult<usize> {
        self.contacts
            .iter()
            .position(|c| c.email == email)
            .ok_or_else(|| DirectoryError::NotFound(email.to_string()))
    }

    fn validate_fields(contact: &Contact) -> DirectoryResult<()> {
        let missing = contact.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }

        let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
        Err(DirectoryError::Validation(format!(
            "missing required field(s): {}",
            names.join(", ")
        )))
    }

    /// Fail if any contact other than the one at `skip` already uses `email`.
    fn ensure_unique(&self, email: &str, skip: Option<usize>) -> DirectoryResult<()> {
        let taken = self
            .contacts
            .iter()
            .enumerate()
            .any(|(i, c)| Some(i) != skip && c.email == email);

        if taken {
            return Err(DirectoryError::Duplicate(email.to_string()));
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ContactDirectory {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
