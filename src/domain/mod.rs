//! Core types: Person and its field values, Remark, Tag, Index

mod fields;
mod index;
mod person;
mod remark;
mod tag;

pub use fields::{Address, Email, Name, ParseFieldError, Phone};
pub use index::{Index, IndexError};
pub use person::{Person, PersonBuilder};
pub use remark::Remark;
pub use tag::{ParseTagError, Tag};
