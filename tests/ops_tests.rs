use contact_list::error::ContactError;
use contact_list::model::*;
use contact_list::ops::*;
use contact_list::store::ContactStore;

fn setup() -> ContactStore {
    let mut store = ContactStore::new();
    contact_ops::add_contact(&mut store, "Bob", "5551234567", "bob@x.com").unwrap();
    store
}

// ==========================================================================
// FIELD CHECKS
// ==========================================================================

#[test]
fn check_name_trims() {
    let store = setup();
    assert_eq!(contact_ops::check_name(&store, "  Alice  ").unwrap(), "Alice");
}

#[test]
fn check_name_rejects_blank_before_uniqueness() {
    let store = setup();
    assert!(matches!(
        contact_ops::check_name(&store, "   "),
        Err(ContactError::EmptyField { field: Field::Name })
    ));
}

#[test]
fn check_name_rejects_existing_name_any_case() {
    let store = setup();
    let err = contact_ops::check_name(&store, " bOB ").unwrap_err();
    assert_eq!(err.to_string(), "Contact with this name already exists!");
}

#[test]
fn check_phone_format_comes_before_uniqueness() {
    let store = setup();
    let err = contact_ops::check_phone(&store, "12345").unwrap_err();
    assert_eq!(err.to_string(), "Invalid phone number! Must be 10 digits.");
}

#[test]
fn check_phone_rejects_existing() {
    let store = setup();
    let err = contact_ops::check_phone(&store, "5551234567").unwrap_err();
    assert_eq!(err.to_string(), "Phone number already exists!");
}

#[test]
fn check_phone_trims_surrounding_whitespace() {
    let store = setup();
    assert_eq!(contact_ops::check_phone(&store, " 1234567890 ").unwrap(), "1234567890");
}

#[test]
fn check_phone_treats_empty_as_invalid() {
    let store = setup();
    assert!(matches!(
        contact_ops::check_phone(&store, ""),
        Err(ContactError::InvalidFormat { pattern: Pattern::Phone, .. })
    ));
}

#[test]
fn check_email_rejects_bad_shapes() {
    let store = setup();
    for bad in ["a@b", "a b@c.com", "ab.com", ""] {
        let err = contact_ops::check_email(&store, bad).unwrap_err();
        assert_eq!(err.to_string(), "Invalid email format!", "input {bad:?}");
    }
}

#[test]
fn check_email_rejects_existing_any_case() {
    let store = setup();
    let err = contact_ops::check_email(&store, "BOB@x.COM").unwrap_err();
    assert_eq!(err.to_string(), "Email already exists!");
}

#[test]
fn check_email_keeps_input_case() {
    let store = setup();
    assert_eq!(contact_ops::check_email(&store, "Carol@X.com").unwrap(), "Carol@X.com");
}

#[test]
fn check_field_dispatches() {
    let store = setup();
    assert!(contact_ops::check_field(&store, Field::Name, "Bob").is_err());
    assert!(contact_ops::check_field(&store, Field::Phone, "5550000000").is_ok());
    assert!(contact_ops::check_field(&store, Field::Email, "new@x.com").is_ok());
}

// ==========================================================================
// ADD / DELETE
// ==========================================================================

#[test]
fn add_contact_stores_trimmed_values() {
    let mut store = setup();
    let c = contact_ops::add_contact(&mut store, " Carol ", " 5550001111 ", " carol@x.com ").unwrap();
    assert_eq!(c, Contact::new("Carol", "5550001111", "carol@x.com"));
    assert_eq!(store.len(), 2);
}

#[test]
fn add_contact_reports_first_failing_field() {
    let mut store = setup();
    // Name and email both clash; name is checked first.
    let err = contact_ops::add_contact(&mut store, "BOB", "5550001111", "bob@x.com").unwrap_err();
    assert!(matches!(err, ContactError::DuplicateValue { field: Field::Name, .. }));

    let err = contact_ops::add_contact(&mut store, "Carl", "123", "bob@x.com").unwrap_err();
    assert!(matches!(err, ContactError::InvalidFormat { pattern: Pattern::Phone, .. }));
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_contact_trims_and_ignores_case() {
    let mut store = setup();
    let removed = contact_ops::delete_contact(&mut store, "  bob  ").unwrap();
    assert_eq!(removed.name, "Bob");
    assert!(store.is_empty());
}

#[test]
fn delete_missing_contact_is_not_found() {
    let mut store = setup();
    let err = contact_ops::delete_contact(&mut store, "Zed").unwrap_err();
    assert!(matches!(err, ContactError::NotFound { .. }));
    assert_eq!(store.len(), 1);
}

#[test]
fn deleted_name_can_be_reused() {
    let mut store = setup();
    contact_ops::delete_contact(&mut store, "Bob").unwrap();
    let c = contact_ops::add_contact(&mut store, "Bob", "5551234567", "bob@x.com").unwrap();
    assert_eq!(c.name, "Bob");
}
