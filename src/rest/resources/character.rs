//! Character resource.

use serde::Deserialize;

use crate::query::{Field, Id, Text};
use crate::rest::Resource;

/// A character of Middle-earth.
///
/// Apart from the id and name, every attribute is optional in the dataset;
/// the service sends either nothing, `null`, or an empty string for unknown
/// values. Empty strings are kept as `Some("")`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// The unique identifier of the character.
    #[serde(rename = "_id")]
    pub id: String,

    /// The character's name.
    #[serde(default)]
    pub name: String,

    /// Race, e.g. "Hobbit" or "Maiar".
    #[serde(default)]
    pub race: Option<String>,

    /// Gender.
    #[serde(default)]
    pub gender: Option<String>,

    /// Date of birth, free-form.
    #[serde(default)]
    pub birth: Option<String>,

    /// Date of death, free-form.
    #[serde(default)]
    pub death: Option<String>,

    /// Realm of origin.
    #[serde(default)]
    pub realm: Option<String>,

    /// Hair colour.
    #[serde(default)]
    pub hair: Option<String>,

    /// Height, free-form.
    #[serde(default)]
    pub height: Option<String>,

    /// Spouse's name.
    #[serde(default)]
    pub spouse: Option<String>,

    /// Link to the character's wiki page.
    #[serde(default)]
    pub wiki_url: Option<String>,
}

impl Character {
    /// Filter and sort field for the character id.
    pub const ID: Field<Self, Id> = Field::new("_id");
    /// Filter and sort field for the name.
    pub const NAME: Field<Self, Text> = Field::new("name");
    /// Filter and sort field for race.
    pub const RACE: Field<Self, Text> = Field::new("race");
    /// Filter and sort field for gender.
    pub const GENDER: Field<Self, Text> = Field::new("gender");
    /// Filter and sort field for date of birth.
    pub const BIRTH: Field<Self, Text> = Field::new("birth");
    /// Filter and sort field for date of death.
    pub const DEATH: Field<Self, Text> = Field::new("death");
    /// Filter and sort field for realm.
    pub const REALM: Field<Self, Text> = Field::new("realm");
    /// Filter and sort field for hair colour.
    pub const HAIR: Field<Self, Text> = Field::new("hair");
    /// Filter and sort field for height.
    pub const HEIGHT: Field<Self, Text> = Field::new("height");
    /// Filter and sort field for spouse.
    pub const SPOUSE: Field<Self, Text> = Field::new("spouse");
    /// Filter and sort field for the wiki link.
    pub const WIKI_URL: Field<Self, Text> = Field::new("wikiUrl");
}

impl Resource for Character {
    const KIND: &'static str = "Character";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_character_deserialization_with_sparse_fields() {
        let character: Character = serde_json::from_value(json!({
            "_id": "5cd99d4bde30eff6ebccfea0",
            "name": "Gandalf",
            "race": "Maiar",
            "gender": "Male",
            "spouse": "",
            "death": null,
            "wikiUrl": "http://lotr.wikia.com//wiki/Gandalf"
        }))
        .unwrap();

        assert_eq!(character.name, "Gandalf");
        assert_eq!(character.race.as_deref(), Some("Maiar"));
        assert_eq!(character.spouse.as_deref(), Some(""));
        assert_eq!(character.death, None);
        assert_eq!(character.hair, None);
        assert_eq!(
            character.wiki_url.as_deref(),
            Some("http://lotr.wikia.com//wiki/Gandalf")
        );
    }

    #[test]
    fn test_character_wiki_url_field_name() {
        assert_eq!(Character::WIKI_URL.name(), "wikiUrl");
    }
}
