//! Contacts the binary starts with.

use crate::domain::{Address, Email, Name, ParseFieldError, ParseTagError, Person, Phone, Tag};

use super::AddressBook;

const SAMPLE_PERSONS: &[(&str, &str, &str, &str, &[&str])] = &[
    (
        "Alex Yeoh",
        "87438807",
        "alexyeoh@example.com",
        "Blk 30 Geylang Street 29, #06-40",
        &["friends"],
    ),
    (
        "Bernice Yu",
        "99272758",
        "berniceyu@example.com",
        "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        &["colleagues", "friends"],
    ),
    (
        "Charlotte Oliveiro",
        "93210283",
        "charlotte@example.com",
        "Blk 11 Ang Mo Kio Street 74, #11-04",
        &["neighbours"],
    ),
    (
        "David Li",
        "91031282",
        "lidavid@example.com",
        "Blk 436 Serangoon Gardens Street 26, #16-43",
        &["family"],
    ),
    (
        "Irfan Ibrahim",
        "92492021",
        "irfan@example.com",
        "Blk 47 Tampines Street 20, #17-35",
        &["classmates"],
    ),
    (
        "Roy Balakrishnan",
        "92624417",
        "royb@example.com",
        "Blk 45 Aljunied Street 85, #11-31",
        &["colleagues"],
    ),
];

/// Error raised when a built-in sample entry fails validation.
#[derive(Debug, thiserror::Error)]
pub enum SampleDataError {
    #[error(transparent)]
    Field(#[from] ParseFieldError),

    #[error(transparent)]
    Tag(#[from] ParseTagError),
}

/// Builds the sample address book.
///
/// # Errors
///
/// Returns `SampleDataError` if a sample entry fails field validation.
pub fn sample_address_book() -> Result<AddressBook, SampleDataError> {
    SAMPLE_PERSONS
        .iter()
        .map(|(name, phone, email, address, tags)| -> Result<Person, SampleDataError> {
            let tags = tags
                .iter()
                .map(|t| Tag::new(t))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Person::builder(
                Name::new(name)?,
                Phone::new(phone)?,
                Email::new(email)?,
                Address::new(address)?,
            )
            .tags(tags)
            .build())
        })
        .collect()
}
