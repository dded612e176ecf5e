//! Chapter resources.
//!
//! The service has two chapter shapes: the `chapter` collection carries the
//! id of the owning book, while `book/{id}/chapter` omits it.

use serde::Deserialize;

use crate::query::{Field, Id, Text};
use crate::rest::Resource;

/// A chapter, as listed by the `chapter` collection.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// The unique identifier of the chapter.
    #[serde(rename = "_id")]
    pub id: String,

    /// The chapter title.
    #[serde(default)]
    pub chapter_name: String,

    /// Id of the book containing the chapter.
    #[serde(default)]
    pub book: String,
}

impl Chapter {
    /// Filter and sort field for the chapter id.
    pub const ID: Field<Self, Id> = Field::new("_id");
    /// Filter and sort field for the chapter title.
    pub const CHAPTER_NAME: Field<Self, Text> = Field::new("chapterName");
    /// Filter and sort field for the owning book's id.
    pub const BOOK: Field<Self, Id> = Field::new("book");
}

impl Resource for Chapter {
    const KIND: &'static str = "Chapter";
}

/// A chapter, as listed under a book.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookChapter {
    /// The unique identifier of the chapter.
    #[serde(rename = "_id")]
    pub id: String,

    /// The chapter title.
    #[serde(default)]
    pub chapter_name: String,
}

impl BookChapter {
    /// Filter and sort field for the chapter id.
    pub const ID: Field<Self, Id> = Field::new("_id");
    /// Filter and sort field for the chapter title.
    pub const CHAPTER_NAME: Field<Self, Text> = Field::new("chapterName");
}

impl Resource for BookChapter {
    const KIND: &'static str = "Chapter";
}
