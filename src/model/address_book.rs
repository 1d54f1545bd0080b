//! Ordered collection of unique persons.

use crate::domain::Person;
use serde::Serialize;

use super::{ModelError, ModelResult};

/// The authoritative, ordered list of persons.
///
/// No two entries may be the same person (see [`Person::is_same_person`]).
/// Order is insertion order and is preserved across replacements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a person with the same identity is already present.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Appends a person to the end of the book.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicatePerson` if the same person is already present.
    pub fn add_person(&mut self, person: Person) -> ModelResult<()> {
        if self.has_person(&person) {
            return Err(ModelError::DuplicatePerson {
                name: person.name().to_string(),
            });
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` with `edited` at the same position.
    ///
    /// `target` is located by full equality. `edited` may share identity with
    /// `target` but not with any other entry.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        let position = self
            .position_of(target)
            .ok_or_else(|| ModelError::PersonNotFound {
                name: target.name().to_string(),
            })?;

        let clashes = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != position && p.is_same_person(&edited));
        if clashes {
            return Err(ModelError::DuplicatePerson {
                name: edited.name().to_string(),
            });
        }

        self.persons[position] = edited;
        Ok(())
    }

    /// Returns the absolute position of `person` in the book.
    pub fn position_of(&self, person: &Person) -> Option<usize> {
        self.persons.iter().position(|p| p == person)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

impl FromIterator<Person> for AddressBook {
    /// Collects persons, keeping the first of any duplicates.
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for person in iter {
            let _ = book.add_person(person);
        }
        book
    }
}
