//! In-memory address book, the `Model` seam commands execute against, and sample data.

mod address_book;
mod model_manager;
mod sample;

pub use address_book::AddressBook;
pub use model_manager::ModelManager;
pub use sample::{SampleDataError, sample_address_book};

use crate::domain::Person;
use thiserror::Error;

/// Errors raised when mutating the address book.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The person to replace is not in the address book.
    #[error("person not found: {name}")]
    PersonNotFound { name: String },

    /// The operation would leave two entries for the same person.
    #[error("this person already exists in the address book: {name}")]
    DuplicatePerson { name: String },
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Predicate selecting which persons appear in the displayed list.
pub type PersonPredicate = Box<dyn Fn(&Person) -> bool>;

/// Predicate that displays every person.
pub fn show_all_persons() -> PersonPredicate {
    Box::new(|_: &Person| true)
}

/// The state commands read and mutate.
///
/// Indices typed by the user always refer to [`Model::filtered_person_list`],
/// never to the backing [`AddressBook`] directly.
pub trait Model {
    /// Returns the backing address book.
    fn address_book(&self) -> &AddressBook;

    /// Returns the displayed list: persons matching the current predicate,
    /// in address book order.
    fn filtered_person_list(&self) -> Vec<&Person>;

    /// Replaces `target` with `edited` at the same position in the address book.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::PersonNotFound` if `target` is absent and
    /// `ModelError::DuplicatePerson` if `edited` clashes with another entry.
    fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()>;

    /// Replaces the predicate of the displayed list.
    fn update_filtered_person_list(&mut self, predicate: PersonPredicate);
}
