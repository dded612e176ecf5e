//! Quote resource.

use serde::Deserialize;

use crate::query::{Field, Id, Text};
use crate::rest::Resource;

/// A line of dialog from one of the movies.
///
/// `movie` and `character` hold the ids of the related [`Movie`] and
/// [`Character`].
///
/// [`Movie`]: super::Movie
/// [`Character`]: super::Character
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Quote {
    /// The unique identifier of the quote.
    #[serde(rename = "_id")]
    pub id: String,

    /// The spoken line.
    #[serde(default)]
    pub dialog: String,

    /// Id of the movie the line is from.
    #[serde(default)]
    pub movie: String,

    /// Id of the character who speaks the line.
    #[serde(default)]
    pub character: String,
}

impl Quote {
    /// Filter and sort field for the quote id.
    pub const ID: Field<Self, Id> = Field::new("_id");
    /// Filter and sort field for the spoken line.
    pub const DIALOG: Field<Self, Text> = Field::new("dialog");
    /// Filter and sort field for the movie id.
    pub const MOVIE: Field<Self, Id> = Field::new("movie");
    /// Filter and sort field for the speaking character's id.
    pub const CHARACTER: Field<Self, Id> = Field::new("character");
}

impl Resource for Quote {
    const KIND: &'static str = "Quote";
}
