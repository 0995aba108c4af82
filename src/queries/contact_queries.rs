use crate::model::{normalize, Contact};
use crate::store::ContactStore;

/// Every contact, sorted by name.
pub fn all_contacts(store: &ContactStore) -> Vec<&Contact> {
    store.list_all()
}

/// Contacts whose name contains the query. Surrounding whitespace is
/// dropped and case is ignored; an empty query matches everyone.
pub fn search_by_name<'a>(store: &'a ContactStore, query: &str) -> Vec<&'a Contact> {
    store.find_by_name_substring(&normalize(query.trim()))
}
