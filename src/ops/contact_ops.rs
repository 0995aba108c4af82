use crate::error::{ContactError, ContactResult};
use crate::model::{normalize, Contact, Field};
use crate::store::ContactStore;
use crate::validation;

/// Trim and check a candidate name: non-empty, then not already taken.
pub fn check_name(store: &ContactStore, name: &str) -> ContactResult<String> {
    let name = validation::non_blank(name, Field::Name)?;
    if store.contains_name(&name) {
        return Err(duplicate(Field::Name, name));
    }
    Ok(name)
}

/// Trim and check a candidate phone: ten digits, then not already taken.
pub fn check_phone(store: &ContactStore, phone: &str) -> ContactResult<String> {
    let phone = validation::phone_number(phone.trim())?;
    if store.contains_phone(&phone) {
        return Err(duplicate(Field::Phone, phone));
    }
    Ok(phone)
}

/// Trim and check a candidate email: address shape, then not already taken.
pub fn check_email(store: &ContactStore, email: &str) -> ContactResult<String> {
    let email = validation::email_address(email.trim())?;
    if store.contains_email(&email) {
        return Err(duplicate(Field::Email, email));
    }
    Ok(email)
}

/// Run the check for `field` against raw input.
pub fn check_field(store: &ContactStore, field: Field, raw: &str) -> ContactResult<String> {
    match field {
        Field::Name => check_name(store, raw),
        Field::Phone => check_phone(store, raw),
        Field::Email => check_email(store, raw),
    }
}

/// Validate all three fields in order and add the contact.
pub fn add_contact(
    store: &mut ContactStore,
    name: &str,
    phone: &str,
    email: &str,
) -> ContactResult<Contact> {
    let name = check_name(store, name)?;
    let phone = check_phone(store, phone)?;
    let email = check_email(store, email)?;
    store.add(Contact::new(name, phone, email)).cloned()
}

/// Delete by name. Input is trimmed and case-folded before lookup.
pub fn delete_contact(store: &mut ContactStore, name: &str) -> ContactResult<Contact> {
    store.remove_by_name(&normalize(name.trim()))
}

fn duplicate(field: Field, value: String) -> ContactError {
    ContactError::DuplicateValue { field, value }
}
