use claimdocs_core::client::{ClientDetails, ClientField};
use claimdocs_core::error::CoreError;
use claimdocs_core::form::ClientForm;

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut form = ClientForm::default();
    assert!(!form.validate());
    assert_eq!(form.errors().len(), 4);

    form.set(ClientField::Name, "J");
    assert_eq!(form.errors().get(ClientField::Name), None);
    assert_eq!(form.errors().len(), 3);
    assert_eq!(
        form.errors().get(ClientField::Email),
        Some("Email is required")
    );
}

#[test]
fn revalidating_recomputes_errors() {
    let mut form = ClientForm::default();
    form.validate();

    form.set(ClientField::Name, "Jane");
    form.set(ClientField::Email, "not-an-email");
    assert!(!form.validate());
    assert_eq!(
        form.errors().get(ClientField::Email),
        Some("Email is invalid")
    );
    assert_eq!(form.errors().get(ClientField::Name), None);
}

#[test]
fn submit_returns_snapshot_when_valid() {
    let details = ClientDetails::new("Jane Doe", "jane@example.com", "0821234567", "8001015009087");
    let mut form = ClientForm::new(details.clone());
    let snapshot = form.submit().expect("valid form");
    assert_eq!(snapshot, details);
    assert!(form.errors().is_empty());
}

#[test]
fn submit_refuses_invalid_form() {
    let mut form = ClientForm::new(ClientDetails::new("Jane", "", "1", "1"));
    match form.submit() {
        Err(CoreError::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(ClientField::Email), Some("Email is required"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    // Form state survives for a retry.
    assert_eq!(form.details().name, "Jane");
}
