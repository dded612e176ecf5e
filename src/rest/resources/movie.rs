//! Movie resource.
//!
//! Covers both film trilogies. The numeric fields are the ones most useful
//! for comparison filters:
//!
//! ```rust
//! use one_api::query::{op, Query};
//! use one_api::rest::resources::Movie;
//!
//! let query = Query::<Movie>::new()
//!     .with(Movie::ACADEMY_AWARD_WINS, op::ge(1))
//!     .with(Movie::BUDGET_IN_MILLIONS, op::lt(100));
//!
//! let params = query.compile().unwrap();
//! assert_eq!(params.get("academyAwardWins>"), Some("1"));
//! assert_eq!(params.get("budgetInMillions<100"), Some(""));
//! ```

use serde::Deserialize;

use crate::query::{Field, Id, Number, Text};
use crate::rest::Resource;

/// A movie, or one of the two trilogy aggregates the service also lists.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// The unique identifier of the movie.
    #[serde(rename = "_id")]
    pub id: String,

    /// The movie title.
    #[serde(default)]
    pub name: String,

    /// Running time in minutes.
    #[serde(default)]
    pub runtime_in_minutes: u32,

    /// Production budget in millions of US dollars.
    #[serde(default)]
    pub budget_in_millions: f64,

    /// Box office revenue in millions of US dollars.
    #[serde(default)]
    pub box_office_revenue_in_millions: f64,

    /// Number of Academy Award nominations.
    #[serde(default)]
    pub academy_award_nominations: u32,

    /// Number of Academy Awards won.
    #[serde(default)]
    pub academy_award_wins: u32,

    /// Rotten Tomatoes score, 0 to 100.
    #[serde(default)]
    pub rotten_tomatoes_score: f64,
}

impl Movie {
    /// Filter and sort field for the movie id.
    pub const ID: Field<Self, Id> = Field::new("_id");
    /// Filter and sort field for the title.
    pub const NAME: Field<Self, Text> = Field::new("name");
    /// Filter and sort field for the running time.
    pub const RUNTIME_IN_MINUTES: Field<Self, Number> = Field::new("runtimeInMinutes");
    /// Filter and sort field for the budget.
    pub const BUDGET_IN_MILLIONS: Field<Self, Number> = Field::new("budgetInMillions");
    /// Filter and sort field for box office revenue.
    pub const BOX_OFFICE_REVENUE_IN_MILLIONS: Field<Self, Number> =
        Field::new("boxOfficeRevenueInMillions");
    /// Filter and sort field for Academy Award nominations.
    pub const ACADEMY_AWARD_NOMINATIONS: Field<Self, Number> =
        Field::new("academyAwardNominations");
    /// Filter and sort field for Academy Award wins.
    pub const ACADEMY_AWARD_WINS: Field<Self, Number> = Field::new("academyAwardWins");
    /// Filter and sort field for the Rotten Tomatoes score.
    pub const ROTTEN_TOMATOES_SCORE: Field<Self, Number> = Field::new("rottenTomatoesScore");
}

impl Resource for Movie {
    const KIND: &'static str = "Movie";
}
