use std::collections::HashSet;

use crate::model::{Contact, Field};

/// The three uniqueness sets kept alongside the contact list.
/// Names and emails are stored case-folded, phones verbatim.
#[derive(Debug, Default)]
pub(crate) struct UniquenessIndex {
    names: HashSet<String>,
    phones: HashSet<String>,
    emails: HashSet<String>,
}

impl UniquenessIndex {
    pub(crate) fn has_name(&self, normalized: &str) -> bool {
        self.names.contains(normalized)
    }

    pub(crate) fn has_phone(&self, phone: &str) -> bool {
        self.phones.contains(phone)
    }

    pub(crate) fn has_email(&self, normalized: &str) -> bool {
        self.emails.contains(normalized)
    }

    /// First field of `contact` that collides with an indexed value,
    /// checked in name, phone, email order.
    pub(crate) fn conflict(&self, contact: &Contact) -> Option<Field> {
        if self.has_name(&contact.normalized_name()) {
            Some(Field::Name)
        } else if self.has_phone(&contact.phone) {
            Some(Field::Phone)
        } else if self.has_email(&contact.normalized_email()) {
            Some(Field::Email)
        } else {
            None
        }
    }

    /// Caller must have checked `conflict` first.
    pub(crate) fn insert(&mut self, contact: &Contact) {
        self.names.insert(contact.normalized_name());
        self.phones.insert(contact.phone.clone());
        self.emails.insert(contact.normalized_email());
    }

    pub(crate) fn remove(&mut self, contact: &Contact) {
        self.names.remove(&contact.normalized_name());
        self.phones.remove(&contact.phone);
        self.emails.remove(&contact.normalized_email());
    }

    /// True when the sets hold exactly the keys of `contacts`.
    pub(crate) fn mirrors<'a>(&self, contacts: impl IntoIterator<Item = &'a Contact>) -> bool {
        let mut names = HashSet::new();
        let mut phones = HashSet::new();
        let mut emails = HashSet::new();
        for c in contacts {
            names.insert(c.normalized_name());
            phones.insert(c.phone.clone());
            emails.insert(c.normalized_email());
        }
        names == self.names && phones == self.phones && emails == self.emails
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_reports_name_before_phone_and_email() {
        let mut index = UniquenessIndex::default();
        let bob = Contact::new("Bob", "5551234567", "bob@x.com");
        index.insert(&bob);

        let clash = Contact::new("BOB", "5551234567", "BOB@X.COM");
        assert_eq!(index.conflict(&clash), Some(Field::Name));

        let clash = Contact::new("Robert", "5551234567", "BOB@X.COM");
        assert_eq!(index.conflict(&clash), Some(Field::Phone));

        let clash = Contact::new("Robert", "5550000000", "BOB@X.COM");
        assert_eq!(index.conflict(&clash), Some(Field::Email));

        let fine = Contact::new("Robert", "5550000000", "rob@x.com");
        assert_eq!(index.conflict(&fine), None);
    }

    #[test]
    fn remove_clears_all_three_keys() {
        let mut index = UniquenessIndex::default();
        let bob = Contact::new("Bob", "5551234567", "Bob@X.com");
        index.insert(&bob);
        index.remove(&bob);

        assert!(!index.has_name("bob"));
        assert!(!index.has_phone("5551234567"));
        assert!(!index.has_email("bob@x.com"));
        assert!(index.mirrors(&[]));
    }

    #[test]
    fn mirrors_detects_drift() {
        let mut index = UniquenessIndex::default();
        let bob = Contact::new("Bob", "5551234567", "bob@x.com");
        index.insert(&bob);
        assert!(index.mirrors([&bob]));
        assert!(!index.mirrors(&[]));
    }
}
