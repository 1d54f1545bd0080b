//! Person record held by the address book.

use crate::domain::{Address, Email, Name, Phone, Remark, Tag};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A contact in the address book.
///
/// Persons are immutable. Changing a field means deriving a new `Person`
/// (see [`Person::with_remark`]) and swapping it into the address book in
/// place of the old one.
///
/// # Required Fields
/// - `name`, `phone`, `email`, `address`
///
/// # Optional Fields
/// - `tags`: labels, kept sorted and deduplicated
/// - `remark`: free text, empty by default
///
/// # Examples
///
/// ```
/// use addressbook::domain::{Address, Email, Name, Person, Phone, Remark};
///
/// let person = Person::builder(
///     Name::new("Alex Yeoh").unwrap(),
///     Phone::new("87438807").unwrap(),
///     Email::new("alexyeoh@example.com").unwrap(),
///     Address::new("Blk 30 Geylang Street 29, #06-40").unwrap(),
/// )
/// .build();
/// assert!(person.remark().is_empty());
///
/// let remarked = person.with_remark(Remark::new("Likes baseball"));
/// assert_eq!(remarked.name(), person.name());
/// assert_eq!(remarked.remark().as_str(), "Likes baseball");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    remark: Remark,
}

impl Person {
    /// Creates a builder for constructing a Person with optional fields.
    pub fn builder(name: Name, phone: Phone, email: Email, address: Address) -> PersonBuilder {
        PersonBuilder::new(name, phone, email, address)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the person's tags in sorted order.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    /// Returns a copy of this person with every field kept except the remark.
    pub fn with_remark(&self, remark: Remark) -> Person {
        Person {
            remark,
            ..self.clone()
        }
    }

    /// Returns true if both persons have the same name.
    ///
    /// This is the identity used to keep the address book free of
    /// duplicates; it is weaker than `==`, which compares every field.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Person")
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("address", &self.address)
            .field("tags", &self.tags)
            .field("remark", &self.remark)
            .finish()
    }
}

/// Builder for constructing a Person with optional fields.
pub struct PersonBuilder {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    remark: Remark,
}

impl PersonBuilder {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: BTreeSet::new(),
            remark: Remark::empty(),
        }
    }

    /// Sets the tags; duplicates collapse.
    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn remark(mut self, remark: Remark) -> Self {
        self.remark = remark;
        self
    }

    pub fn build(self) -> Person {
        Person {
            name: self.name,
            phone: self.phone,
            email: self.email,
            address: self.address,
            tags: self.tags,
            remark: self.remark,
        }
    }
}
