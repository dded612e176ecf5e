//! Book resource.

use serde::Deserialize;

use crate::query::{Field, Id, Text};
use crate::rest::Resource;

/// A book of The Lord of the Rings.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Book {
    /// The unique identifier of the book.
    #[serde(rename = "_id")]
    pub id: String,

    /// The title of the book.
    #[serde(default)]
    pub name: String,
}

impl Book {
    /// Filter and sort field for the book id.
    pub const ID: Field<Self, Id> = Field::new("_id");
    /// Filter and sort field for the title.
    pub const NAME: Field<Self, Text> = Field::new("name");
}

impl Resource for Book {
    const KIND: &'static str = "Book";
}
