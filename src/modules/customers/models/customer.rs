use crate::core::error::Result;

use super::contact_info::{validate_address, validate_id, ContactInfo};

/// Short-form customer record: id plus contact fields.
///
/// This is the shape `get_page` returns. Fields are private; all mutation
/// goes through validating setters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCustomer {
    id: i64,
    contact: ContactInfo,
}

impl ShortCustomer {
    pub fn new(id: i64, name: &str, phone: &str, contact_person: &str) -> Result<Self> {
        Ok(Self {
            id: validate_id(id)?,
            contact: ContactInfo::new(name, phone, contact_person)?,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        self.contact.name()
    }

    pub fn phone(&self) -> &str {
        self.contact.phone()
    }

    pub fn contact_person(&self) -> &str {
        self.contact.contact_person()
    }
}

impl std::fmt::Display for ShortCustomer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Phone: {}, Contact: {}",
            self.id,
            self.name(),
            self.phone(),
            self.contact_person()
        )
    }
}

/// Full customer record: contact fields plus a postal address.
///
/// Structural equality and hashing cover all fields. Repositories hand out
/// clones, never references into their own state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Customer {
    id: i64,
    contact: ContactInfo,
    address: String,
}

impl Customer {
    pub fn new(
        id: i64,
        name: &str,
        address: &str,
        phone: &str,
        contact_person: &str,
    ) -> Result<Self> {
        Ok(Self {
            id: validate_id(id)?,
            contact: ContactInfo::new(name, phone, contact_person)?,
            address: validate_address(address)?,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        self.contact.name()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        self.contact.phone()
    }

    pub fn contact_person(&self) -> &str {
        self.contact.contact_person()
    }

    pub fn set_id(&mut self, id: i64) -> Result<()> {
        self.id = validate_id(id)?;
        Ok(())
    }

    pub fn set_name(&mut self, value: &str) -> Result<()> {
        self.contact.set_name(value)
    }

    pub fn set_address(&mut self, value: &str) -> Result<()> {
        self.address = validate_address(value)?;
        Ok(())
    }

    pub fn set_phone(&mut self, value: &str) -> Result<()> {
        self.contact.set_phone(value)
    }

    pub fn set_contact_person(&mut self, value: &str) -> Result<()> {
        self.contact.set_contact_person(value)
    }

    /// Project onto the short form handed out by `get_page`.
    pub fn to_short(&self) -> ShortCustomer {
        ShortCustomer {
            id: self.id,
            contact: self.contact.clone(),
        }
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Customer(id={}, name='{}', address='{}', phone='{}', contact_person='{}')",
            self.id,
            self.name(),
            self.address,
            self.phone(),
            self.contact_person()
        )
    }
}
