//! Shared fixtures for directory integration tests.

use contact_directory::{Contact, ContactDirectory, EditPolicy};

/// The three contacts from the reference walkthrough, in insertion order.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new("John Doe", "john@x.com", "111"),
        Contact::new("Jane Smith", "jane@x.com", "222"),
        Contact::new("David Johnson", "david@x.com", "333"),
    ]
}

/// A directory pre-populated with [`sample_contacts`].
pub fn seeded_directory(policy: EditPolicy) -> ContactDirectory {
    let mut directory = ContactDirectory::with_policy(policy);
    for contact in sample_contacts() {
        directory
            .add(contact)
            .expect("sample contacts are valid and unique");
    }
    directory
}

/// Names of all contacts in directory order.
#[allow(dead_code)]
pub fn names(directory: &ContactDirectory) -> Vec<String> {
    directory.iter().map(|c| c.name.clone()).collect()
}
