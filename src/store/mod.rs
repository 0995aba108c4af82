mod index;

use tracing::{debug, info};

use crate::error::{ContactError, ContactResult};
use crate::model::{normalize, Contact, Field};
use index::UniquenessIndex;

/// In-memory address book. Owns every contact and the uniqueness index
/// over them; the two only change together, through `admit` and `evict`.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    index: UniquenessIndex,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.index.has_name(&normalize(name))
    }

    pub fn contains_phone(&self, phone: &str) -> bool {
        self.index.has_phone(phone)
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.index.has_email(&normalize(email))
    }

    /// Add a contact. Uniqueness is re-checked here (name, then phone,
    /// then email), so this is safe to call without prior validation of
    /// uniqueness. On rejection nothing is mutated.
    pub fn add(&mut self, contact: Contact) -> ContactResult<&Contact> {
        if let Some(field) = self.index.conflict(&contact) {
            let value = match field {
                Field::Name => contact.name,
                Field::Phone => contact.phone,
                Field::Email => contact.email,
            };
            debug!(%field, %value, "rejected duplicate contact");
            return Err(ContactError::DuplicateValue { field, value });
        }
        Ok(self.admit(contact))
    }

    /// All contacts sorted by name using ordinal (case-sensitive)
    /// comparison. The sort is stable, so equal names keep insertion order.
    pub fn list_all(&self) -> Vec<&Contact> {
        let mut sorted: Vec<&Contact> = self.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    /// Contacts whose name contains `query`, ignoring case, in insertion
    /// order. The query is not trimmed.
    pub fn find_by_name_substring(&self, query: &str) -> Vec<&Contact> {
        let needle = normalize(query);
        self.iter()
            .filter(|c| c.normalized_name().contains(&needle))
            .collect()
    }

    /// Remove the contact whose name equals `name`, ignoring case.
    pub fn remove_by_name(&mut self, name: &str) -> ContactResult<Contact> {
        let key = normalize(name);
        match self.contacts.iter().position(|c| c.normalized_name() == key) {
            Some(pos) => Ok(self.evict(pos)),
            None => Err(ContactError::NotFound {
                name: name.to_string(),
            }),
        }
    }

    /// True when the index holds exactly the keys of the stored contacts.
    pub fn is_consistent(&self) -> bool {
        self.index.mirrors(&self.contacts)
    }

    fn admit(&mut self, contact: Contact) -> &Contact {
        self.index.insert(&contact);
        self.contacts.push(contact);
        debug_assert!(self.is_consistent());
        info!(total = self.contacts.len(), "contact added");
        &self.contacts[self.contacts.len() - 1]
    }

    fn evict(&mut self, pos: usize) -> Contact {
        let contact = self.contacts.remove(pos);
        self.index.remove(&contact);
        debug_assert!(self.is_consistent());
        info!(total = self.contacts.len(), "contact removed");
        contact
    }
}
