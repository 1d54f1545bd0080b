//! In-memory `Model` implementation.

use std::fmt;

use tracing::debug;

use super::{AddressBook, Model, ModelResult, PersonPredicate, show_all_persons};
use crate::domain::Person;

/// Owns the address book and the predicate of the displayed list.
///
/// The displayed list is never stored; it is recomputed from the backing
/// book on every read, so it always reflects the latest replacement.
pub struct ModelManager {
    address_book: AddressBook,
    predicate: PersonPredicate,
}

impl ModelManager {
    /// Creates a model that displays every person in `address_book`.
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            predicate: show_all_persons(),
        }
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(AddressBook::new())
    }
}

impl Model for ModelManager {
    fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    fn filtered_person_list(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|&p| (self.predicate)(p))
            .collect()
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        self.address_book.set_person(target, edited)?;
        debug!(person = %target.name(), "replaced person");
        Ok(())
    }

    fn update_filtered_person_list(&mut self, predicate: PersonPredicate) {
        self.predicate = predicate;
        debug!(
            displayed = self.filtered_person_list().len(),
            total = self.address_book.len(),
            "updated displayed list"
        );
    }
}

impl PartialEq for ModelManager {
    fn eq(&self, other: &Self) -> bool {
        self.address_book == other.address_book
            && self.filtered_person_list() == other.filtered_person_list()
    }
}

impl fmt::Debug for ModelManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelManager")
            .field("address_book", &self.address_book)
            .field("displayed", &self.filtered_person_list().len())
            .finish()
    }
}
