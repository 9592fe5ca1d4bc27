use clientele::customers::models::{Customer, ShortCustomer};

fn sample() -> Customer {
    Customer::new(1, "Acme", "1 Main Street", "+7 (900) 123-45-67", "Jane Doe").unwrap()
}

#[test]
fn construction_returns_trimmed_input() {
    let customer = Customer::new(
        7,
        "  Acme  ",
        "  1 Main Street ",
        " 12345 ",
        " Jane Doe ",
    )
    .unwrap();
    assert_eq!(customer.id(), 7);
    assert_eq!(customer.name(), "Acme");
    assert_eq!(customer.address(), "1 Main Street");
    assert_eq!(customer.phone(), "12345");
    assert_eq!(customer.contact_person(), "Jane Doe");
}

#[test]
fn negative_id_is_rejected() {
    assert!(Customer::new(-1, "Acme", "1 Main Street", "12345", "Jane Doe").is_err());
}

#[test]
fn address_length_bounds() {
    assert!(Customer::new(1, "Acme", "1234", "12345", "Jane Doe").is_err());
    assert!(Customer::new(1, "Acme", "12345", "12345", "Jane Doe").is_ok());
    assert!(Customer::new(1, "Acme", &"a".repeat(200), "12345", "Jane Doe").is_ok());
    assert!(Customer::new(1, "Acme", &"a".repeat(201), "12345", "Jane Doe").is_err());
}

#[test]
fn address_has_no_character_restriction() {
    assert!(Customer::new(1, "Acme", "12 Main St. #4 <unit $5>", "12345", "Jane Doe").is_ok());
}

#[test]
fn equality_is_structural() {
    assert_eq!(sample(), sample());
    let mut other = sample();
    other.set_address("2 Side Street").unwrap();
    assert_ne!(sample(), other);
}

#[test]
fn hashing_follows_equality() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(sample());
    set.insert(sample());
    assert_eq!(set.len(), 1);
}

#[test]
fn to_short_projects_all_contact_fields() {
    let short = sample().to_short();
    assert_eq!(short.id(), 1);
    assert_eq!(short.name(), "Acme");
    assert_eq!(short.phone(), "+7 (900) 123-45-67");
    assert_eq!(short.contact_person(), "Jane Doe");
}

#[test]
fn short_customer_validates_on_construction() {
    assert!(ShortCustomer::new(1, "Acme", "123", "Jane Doe").is_err());
    assert!(ShortCustomer::new(-2, "Acme", "12345", "Jane Doe").is_err());
}

#[test]
fn setters_enforce_field_rules() {
    let mut customer = sample();
    assert!(customer.set_name("B").is_err());
    assert!(customer.set_address("tiny").is_err());
    assert!(customer.set_id(-5).is_err());
    // Unchanged after failed setters.
    assert_eq!(customer, sample());

    customer.set_name("Beta LLC").unwrap();
    customer.set_contact_person("John Smith").unwrap();
    assert_eq!(customer.name(), "Beta LLC");
    assert_eq!(customer.contact_person(), "John Smith");
}

#[test]
fn display_includes_every_field() {
    let rendered = sample().to_string();
    assert!(rendered.contains("Acme"));
    assert!(rendered.contains("1 Main Street"));
    assert!(rendered.contains("Jane Doe"));
}
