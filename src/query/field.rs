//! Typed schema fields.
//!
//! A [`Field<R, K>`] names one field of resource `R` whose values are of kind
//! `K`. Fields are declared as associated constants on the resource types
//! (e.g. `Movie::RUNTIME_IN_MINUTES`), so a query can only reference fields of
//! the resource it targets, and only with operators legal for the field's kind.

use std::fmt;
use std::marker::PhantomData;

mod private {
    pub trait Sealed {}
}

/// The value kind of a schema field.
///
/// Implemented by [`Text`], [`Number`], and [`Id`] only.
pub trait FieldKind: private::Sealed {
    /// Human readable kind name, used in debug output.
    const NAME: &'static str;
}

/// String-valued fields. Support equality, lists, and patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {}

/// Numeric fields. Support equality, lists, and comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {}

/// Identifier fields (`_id` and references). Support equality and lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Id {}

impl private::Sealed for Text {}
impl private::Sealed for Number {}
impl private::Sealed for Id {}

impl FieldKind for Text {
    const NAME: &'static str = "text";
}

impl FieldKind for Number {
    const NAME: &'static str = "number";
}

impl FieldKind for Id {
    const NAME: &'static str = "id";
}

/// A field of resource `R` with value kind `K`.
pub struct Field<R, K> {
    name: &'static str,
    _marker: PhantomData<fn() -> (R, K)>,
}

impl<R, K> Field<R, K> {
    /// Declares a field by its wire name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Returns the wire name of the field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<R, K> Clone for Field<R, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, K> Copy for Field<R, K> {}

impl<R, K> PartialEq for Field<R, K> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<R, K> Eq for Field<R, K> {}

impl<R, K: FieldKind> fmt::Debug for Field<R, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field({}: {})", self.name, K::NAME)
    }
}

/// Sort order for [`Query::sort`](crate::query::Query::sort).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Ascending (the default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Returns the wire spelling of the direction.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Hobbit {}

    const NAME: Field<Hobbit, Text> = Field::new("name");

    #[test]
    fn test_field_exposes_wire_name() {
        assert_eq!(NAME.name(), "name");
    }

    #[test]
    fn test_field_debug_includes_kind() {
        assert_eq!(format!("{NAME:?}"), "Field(name: text)");
    }

    #[test]
    fn test_sort_direction_defaults_to_ascending() {
        assert_eq!(SortDirection::default(), SortDirection::Asc);
        assert_eq!(SortDirection::Asc.to_string(), "asc");
        assert_eq!(SortDirection::Desc.to_string(), "desc");
    }
}
