//! User-facing message templates and person formatting.

use crate::domain::Person;

pub const UNKNOWN_COMMAND: &str = "Unknown command";
pub const INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";

/// Renders the usage-guidance message shown when a command is malformed.
pub fn invalid_command_format(usage: &str) -> String {
    format!("Invalid command format! \n{usage}")
}

/// Formats a person for display in command feedback.
///
/// ```
/// use addressbook::domain::{Address, Email, Name, Person, Phone, Tag};
/// use addressbook::logic::format_person;
///
/// let person = Person::builder(
///     Name::new("Alex Yeoh").unwrap(),
///     Phone::new("87438807").unwrap(),
///     Email::new("alexyeoh@example.com").unwrap(),
///     Address::new("Blk 30 Geylang Street 29, #06-40").unwrap(),
/// )
/// .tags([Tag::new("friends").unwrap()])
/// .build();
/// assert_eq!(
///     format_person(&person),
///     "Alex Yeoh; Phone: 87438807; Email: alexyeoh@example.com; \
///      Address: Blk 30 Geylang Street 29, #06-40; Tags: [friends]"
/// );
/// ```
pub fn format_person(person: &Person) -> String {
    let tags: String = person.tags().iter().map(|t| t.to_string()).collect();
    format!(
        "{}; Phone: {}; Email: {}; Address: {}; Tags: {}",
        person.name(),
        person.phone(),
        person.email(),
        person.address(),
        tags
    )
}
