//! Shared fixtures for unit tests.

use crate::domain::{Address, Email, Index, Name, Person, Phone, Tag};
use crate::model::{AddressBook, Model, ModelManager};

pub(crate) const INDEX_FIRST: Index = Index::from_zero_based(0);
pub(crate) const INDEX_SECOND: Index = Index::from_zero_based(1);
pub(crate) const INDEX_THIRD: Index = Index::from_zero_based(2);

pub(crate) fn person(name: &str, phone: &str, email: &str, address: &str, tags: &[&str]) -> Person {
    Person::builder(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new(email).unwrap(),
        Address::new(address).unwrap(),
    )
    .tags(tags.iter().map(|t| Tag::new(t).unwrap()))
    .build()
}

pub(crate) fn alice() -> Person {
    person(
        "Alice Pauline",
        "94351253",
        "alice@example.com",
        "123, Jurong West Ave 6, #08-111",
        &["friends"],
    )
}

pub(crate) fn benson() -> Person {
    person(
        "Benson Meier",
        "98765432",
        "johnd@example.com",
        "311, Clementi Ave 2, #02-25",
        &["owesMoney", "friends"],
    )
}

pub(crate) fn carl() -> Person {
    person("Carl Kurz", "95352563", "heinz@example.com", "wall street", &[])
}

pub(crate) fn daniel() -> Person {
    person(
        "Daniel Meier",
        "87652533",
        "cornelia@example.com",
        "10th street",
        &["friends"],
    )
}

pub(crate) fn elle() -> Person {
    person("Elle Meyer", "9482224", "werner@example.com", "michegan ave", &[])
}

pub(crate) fn fiona() -> Person {
    person("Fiona Kunz", "9482427", "lydia@example.com", "little tokyo", &[])
}

pub(crate) fn george() -> Person {
    person("George Best", "9482442", "anna@example.com", "4th street", &[])
}

/// A person who is not in the typical address book.
pub(crate) fn bob() -> Person {
    person(
        "Bob Choo",
        "22222222",
        "bob@example.com",
        "Block 123, Bobby Street 3",
        &["husband", "friend"],
    )
}

pub(crate) fn typical_persons() -> Vec<Person> {
    vec![alice(), benson(), carl(), daniel(), elle(), fiona(), george()]
}

pub(crate) fn typical_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    for p in typical_persons() {
        book.add_person(p).unwrap();
    }
    book
}

pub(crate) fn typical_model() -> ModelManager {
    ModelManager::new(typical_address_book())
}

/// Narrows the displayed list down to the single person at `index`.
pub(crate) fn show_person_at_index(model: &mut dyn Model, index: Index) {
    let target = model.filtered_person_list()[index.zero_based()].clone();
    model.update_filtered_person_list(Box::new(move |p: &Person| p.is_same_person(&target)));
    assert_eq!(model.filtered_person_list().len(), 1);
}
