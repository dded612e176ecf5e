//! The resource trait.

use serde::de::DeserializeOwned;

/// An entity served by the One API.
///
/// Implementors are plain serde structs. Their queryable fields are declared
/// as [`Field`](crate::query::Field) associated constants next to the struct
/// fields, e.g. `Character::NAME`.
///
/// # Example
///
/// ```rust
/// use one_api::query::{Field, Id, Text};
/// use one_api::rest::Resource;
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// pub struct Realm {
///     #[serde(rename = "_id")]
///     pub id: String,
///     pub name: String,
/// }
///
/// impl Realm {
///     pub const ID: Field<Self, Id> = Field::new("_id");
///     pub const NAME: Field<Self, Text> = Field::new("name");
/// }
///
/// impl Resource for Realm {
///     const KIND: &'static str = "Realm";
/// }
/// ```
pub trait Resource: DeserializeOwned {
    /// The singular type name, used in error messages (e.g., "Character").
    const KIND: &'static str;
}
