//! Filter conditions and their wire encoding.
//!
//! Conditions are created with the constructors in [`op`] and attached to a
//! field with [`Query::with`](crate::query::Query::with). Each condition
//! implements [`Condition<K>`] only for the field kinds it is legal on, so
//! `op::gt` on a text field or a [`Pattern`] on a numeric field is a compile
//! error.
//!
//! The service's filter grammar, with `f` the field and `v` the value:
//!
//! | Condition | Key | Value |
//! |---|---|---|
//! | `op::eq(v)` | `f` | `v` |
//! | `op::ne(v)` | `f!` | `v` |
//! | `op::gt(v)` | `f>v` | empty |
//! | `op::lt(v)` | `f<v` | empty |
//! | `op::ge(v)` | `f>` | `v` |
//! | `op::le(v)` | `f<` | `v` |
//! | `op::is_in([v1, v2])` | `f` | `v1,v2` |
//! | `op::not_in([v1, v2])` | `f!` | `v1,v2` |

use std::fmt::{self, Write as _};

use regex::Regex;
use regex_syntax::ast::parse::Parser;
use regex_syntax::ast::ErrorKind;

use crate::query::errors::InvalidQueryError;
use crate::query::field::{Id, Number, Text};

/// A filter that can be applied to a field of kind `K`.
pub trait Condition<K> {
    /// Encodes the condition on `field` into a single query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidQueryError`] if the value cannot be sent, such as an
    /// empty value list or a non-finite number.
    fn encode(self, field: &'static str) -> Result<(String, String), InvalidQueryError>;
}

/// A value usable in an equality filter on a field of kind `K`.
pub trait ScalarValue<K> {
    /// Renders the value in its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidQueryError::NonFiniteNumber`] for NaN or infinite numbers.
    fn render(self, field: &'static str) -> Result<String, InvalidQueryError>;
}

/// A value usable as a member of an `in` / `not in` list on a field of kind `K`.
pub trait ListValue<K> {
    /// Renders the value in its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidQueryError::NonFiniteNumber`] for NaN or infinite numbers.
    fn render_item(self, field: &'static str) -> Result<String, InvalidQueryError>;
}

impl<V: Into<TextValue>> ScalarValue<Text> for V {
    fn render(self, _field: &'static str) -> Result<String, InvalidQueryError> {
        Ok(self.into().to_string())
    }
}

impl<V: Into<String>> ScalarValue<Id> for V {
    fn render(self, _field: &'static str) -> Result<String, InvalidQueryError> {
        Ok(self.into())
    }
}

impl<V: Into<f64>> ScalarValue<Number> for V {
    fn render(self, field: &'static str) -> Result<String, InvalidQueryError> {
        render_number(field, self.into())
    }
}

impl<V: Into<String>> ListValue<Text> for V {
    fn render_item(self, _field: &'static str) -> Result<String, InvalidQueryError> {
        Ok(self.into())
    }
}

impl<V: Into<String>> ListValue<Id> for V {
    fn render_item(self, _field: &'static str) -> Result<String, InvalidQueryError> {
        Ok(self.into())
    }
}

impl<V: Into<f64>> ListValue<Number> for V {
    fn render_item(self, field: &'static str) -> Result<String, InvalidQueryError> {
        render_number(field, self.into())
    }
}

/// Numbers go out in their shortest form: `50`, `2.5`.
fn render_number(field: &'static str, value: f64) -> Result<String, InvalidQueryError> {
    if value.is_finite() {
        Ok(value.to_string())
    } else {
        Err(InvalidQueryError::NonFiniteNumber { field })
    }
}

fn render_list<K, V: ListValue<K>>(
    field: &'static str,
    values: Vec<V>,
) -> Result<String, InvalidQueryError> {
    if values.is_empty() {
        return Err(InvalidQueryError::EmptyValueList { field });
    }
    let rendered = values
        .into_iter()
        .map(|v| ListValue::<K>::render_item(v, field))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.join(","))
}

/// A regular-expression filter value for text fields.
///
/// Patterns are sent as `/<source>/<flags>`, which the service evaluates as a
/// regular expression instead of a literal. The source is checked with the
/// `regex` crate when the pattern is created.
///
/// # Example
///
/// ```rust
/// use one_api::query::Pattern;
///
/// let pattern = Pattern::new("^gand").unwrap().case_insensitive();
/// assert_eq!(pattern.to_string(), "/^gand/i");
///
/// assert!(Pattern::new("(unclosed").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    case_insensitive: bool,
}

impl Pattern {
    /// Creates a case-sensitive pattern from its source text.
    ///
    /// The source is parsed for syntax errors only. Look-around and
    /// backreferences are accepted: the service evaluates them even though
    /// the `regex` crate cannot.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidQueryError::InvalidPattern`] if the source is empty
    /// or does not parse.
    pub fn new(source: impl Into<String>) -> Result<Self, InvalidQueryError> {
        let source = source.into();
        if source.is_empty() {
            return Err(InvalidQueryError::InvalidPattern {
                pattern: source,
                reason: "pattern is empty".to_string(),
            });
        }
        if let Err(e) = Parser::new().parse(&source) {
            if !matches!(
                e.kind(),
                ErrorKind::UnsupportedLookAround | ErrorKind::UnsupportedBackreference
            ) {
                return Err(InvalidQueryError::InvalidPattern {
                    pattern: source,
                    reason: e.to_string(),
                });
            }
        }
        Ok(Self {
            source,
            case_insensitive: false,
        })
    }

    /// Makes the pattern match regardless of case.
    #[must_use]
    pub const fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Returns the pattern source, without delimiters or flags.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl From<&Regex> for Pattern {
    fn from(regex: &Regex) -> Self {
        Self {
            source: regex.as_str().to_string(),
            case_insensitive: false,
        }
    }
}

/// Renders `/<source>/<flags>`, escaping any unescaped `/` in the source.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('/')?;
        let mut escaped = false;
        for c in self.source.chars() {
            if c == '/' && !escaped {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
            escaped = c == '\\' && !escaped;
        }
        f.write_char('/')?;
        if self.case_insensitive {
            f.write_char('i')?;
        }
        Ok(())
    }
}

/// A text filter value: a literal string or a [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextValue {
    /// Matched verbatim.
    Literal(String),
    /// Matched as a regular expression.
    Pattern(Pattern),
}

impl From<&str> for TextValue {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for TextValue {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<&String> for TextValue {
    fn from(value: &String) -> Self {
        Self::Literal(value.clone())
    }
}

impl From<Pattern> for TextValue {
    fn from(pattern: Pattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<&Regex> for TextValue {
    fn from(regex: &Regex) -> Self {
        Self::Pattern(regex.into())
    }
}

impl fmt::Display for TextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.write_str(s),
            Self::Pattern(p) => fmt::Display::fmt(p, f),
        }
    }
}

/// Condition constructors.
///
/// ```rust
/// use one_api::query::{op, Query};
/// use one_api::rest::resources::Movie;
///
/// let query = Query::<Movie>::new()
///     .with(Movie::NAME, op::ne("The Two Towers"))
///     .with(Movie::RUNTIME_IN_MINUTES, op::gt(160));
///
/// let params = query.compile().unwrap();
/// assert_eq!(params.get("name!"), Some("The Two Towers"));
/// assert_eq!(params.get("runtimeInMinutes>160"), Some(""));
/// ```
pub mod op {
    use super::{AtLeast, AtMost, Equals, GreaterThan, LessThan, NoneOf, NotEquals, OneOf};

    /// Field equals `value` (or matches it, for a [`Pattern`](super::Pattern)).
    pub const fn eq<V>(value: V) -> Equals<V> {
        Equals(value)
    }

    /// Field does not equal (or match) `value`.
    pub const fn ne<V>(value: V) -> NotEquals<V> {
        NotEquals(value)
    }

    /// Field is strictly greater than `value`.
    pub const fn gt<V>(value: V) -> GreaterThan<V> {
        GreaterThan(value)
    }

    /// Field is strictly less than `value`.
    pub const fn lt<V>(value: V) -> LessThan<V> {
        LessThan(value)
    }

    /// Field is greater than or equal to `value`.
    pub const fn ge<V>(value: V) -> AtLeast<V> {
        AtLeast(value)
    }

    /// Field is less than or equal to `value`.
    pub const fn le<V>(value: V) -> AtMost<V> {
        AtMost(value)
    }

    /// Field equals one of `values`.
    pub fn is_in<I: IntoIterator>(values: I) -> OneOf<I::Item> {
        OneOf(values.into_iter().collect())
    }

    /// Field equals none of `values`.
    pub fn not_in<I: IntoIterator>(values: I) -> NoneOf<I::Item> {
        NoneOf(values.into_iter().collect())
    }
}

/// See [`op::eq`].
#[derive(Debug, Clone, PartialEq)]
pub struct Equals<V>(V);

/// See [`op::ne`].
#[derive(Debug, Clone, PartialEq)]
pub struct NotEquals<V>(V);

/// See [`op::gt`].
#[derive(Debug, Clone, PartialEq)]
pub struct GreaterThan<V>(V);

/// See [`op::lt`].
#[derive(Debug, Clone, PartialEq)]
pub struct LessThan<V>(V);

/// See [`op::ge`].
#[derive(Debug, Clone, PartialEq)]
pub struct AtLeast<V>(V);

/// See [`op::le`].
#[derive(Debug, Clone, PartialEq)]
pub struct AtMost<V>(V);

/// See [`op::is_in`].
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf<V>(Vec<V>);

/// See [`op::not_in`].
#[derive(Debug, Clone, PartialEq)]
pub struct NoneOf<V>(Vec<V>);

impl<K, V: ScalarValue<K>> Condition<K> for Equals<V> {
    fn encode(self, field: &'static str) -> Result<(String, String), InvalidQueryError> {
        Ok((field.to_string(), ScalarValue::<K>::render(self.0, field)?))
    }
}

impl<K, V: ScalarValue<K>> Condition<K> for NotEquals<V> {
    fn encode(self, field: &'static str) -> Result<(String, String), InvalidQueryError> {
        Ok((format!("{field}!"), ScalarValue::<K>::render(self.0, field)?))
    }
}

impl<V: Into<f64>> Condition<Number> for GreaterThan<V> {
    fn encode(self, field: &'static str) -> Result<(String, String), InvalidQueryError> {
        let value = render_number(field, self.0.into())?;
        Ok((format!("{field}>{value}"), String::new()))
    }
}

impl<V: Into<f64>> Condition<Number> for LessThan<V> {
    fn encode(self, field: &'static str) -> Result<(String, String), InvalidQueryError> {
        let value = render_number(field, self.0.into())?;
        Ok((format!("{field}<{value}"), String::new()))
    }
}

impl<V: Into<f64>> Condition<Number> for AtLeast<V> {
    fn encode(self, field: &'static str) -> Result<(String, String), InvalidQueryError> {
        Ok((format!("{field}>"), render_number(field, self.0.into())?))
    }
}

impl<V: Into<f64>> Condition<Number> for AtMost<V> {
    fn encode(self, field: &'static str) -> Result<(String, String), InvalidQueryError> {
        Ok((format!("{field}<"), render_number(field, self.0.into())?))
    }
}

impl<K, V: ListValue<K>> Condition<K> for OneOf<V> {
    fn encode(self, field: &'static str) -> Result<(String, String), InvalidQueryError> {
        Ok((field.to_string(), render_list(field, self.0)?))
    }
}

impl<K, V: ListValue<K>> Condition<K> for NoneOf<V> {
    fn encode(self, field: &'static str) -> Result<(String, String), InvalidQueryError> {
        Ok((format!("{field}!"), render_list(field, self.0)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode<K, C: Condition<K>>(condition: C, field: &'static str) -> (String, String) {
        condition.encode(field).unwrap()
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_equality_on_text() {
        assert_eq!(
            encode::<Text, _>(op::eq("Gandalf"), "name"),
            pair("name", "Gandalf")
        );
        assert_eq!(
            encode::<Text, _>(op::ne("Gandalf"), "name"),
            pair("name!", "Gandalf")
        );
    }

    #[test]
    fn test_comparisons_embed_or_carry_value() {
        assert_eq!(
            encode::<Number, _>(op::gt(50), "runtimeInMinutes"),
            pair("runtimeInMinutes>50", "")
        );
        assert_eq!(
            encode::<Number, _>(op::lt(200), "runtimeInMinutes"),
            pair("runtimeInMinutes<200", "")
        );
        assert_eq!(
            encode::<Number, _>(op::ge(50), "runtimeInMinutes"),
            pair("runtimeInMinutes>", "50")
        );
        assert_eq!(
            encode::<Number, _>(op::le(200), "runtimeInMinutes"),
            pair("runtimeInMinutes<", "200")
        );
    }

    #[test]
    fn test_numbers_render_in_shortest_form() {
        assert_eq!(
            encode::<Number, _>(op::eq(93.0), "budgetInMillions"),
            pair("budgetInMillions", "93")
        );
        assert_eq!(
            encode::<Number, _>(op::ge(2.5), "budgetInMillions"),
            pair("budgetInMillions>", "2.5")
        );
    }

    #[test]
    fn test_lists_are_comma_joined() {
        assert_eq!(
            encode::<Text, _>(op::is_in(["Hobbit", "Human"]), "race"),
            pair("race", "Hobbit,Human")
        );
        assert_eq!(
            encode::<Text, _>(op::not_in(["Orc", "Goblin"]), "race"),
            pair("race!", "Orc,Goblin")
        );
        assert_eq!(
            encode::<Number, _>(op::is_in([1, 2, 3]), "academyAwardWins"),
            pair("academyAwardWins", "1,2,3")
        );
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let result = Condition::<Text>::encode(op::is_in(Vec::<String>::new()), "race");
        assert_eq!(
            result,
            Err(InvalidQueryError::EmptyValueList { field: "race" })
        );
    }

    #[test]
    fn test_non_finite_number_is_rejected() {
        let result = Condition::<Number>::encode(op::gt(f64::NAN), "runtimeInMinutes");
        assert_eq!(
            result,
            Err(InvalidQueryError::NonFiniteNumber {
                field: "runtimeInMinutes"
            })
        );
    }

    #[test]
    fn test_pattern_is_sent_as_source_not_escaped() {
        let pattern = Pattern::new("^Gand.*").unwrap();
        assert_eq!(
            encode::<Text, _>(op::eq(pattern.clone()), "name"),
            pair("name", "/^Gand.*/")
        );
        assert_eq!(
            encode::<Text, _>(op::ne(pattern.case_insensitive()), "name"),
            pair("name!", "/^Gand.*/i")
        );
    }

    #[test]
    fn test_pattern_from_compiled_regex() {
        let regex = Regex::new("foot").unwrap();
        assert_eq!(
            encode::<Text, _>(op::eq(&regex), "name"),
            pair("name", "/foot/")
        );
    }

    #[test]
    fn test_look_around_and_backreferences_are_accepted() {
        let pattern = Pattern::new("^(?!Gand).*").unwrap();
        assert_eq!(pattern.to_string(), "/^(?!Gand).*/");

        let pattern = Pattern::new(r"^(a)\1").unwrap();
        assert_eq!(pattern.source(), r"^(a)\1");
    }

    #[test]
    fn test_slashes_in_source_are_escaped() {
        assert_eq!(Pattern::new("a/b").unwrap().to_string(), r"/a\/b/");
        assert_eq!(Pattern::new(r"a\/b").unwrap().to_string(), r"/a\/b/");
        assert_eq!(Pattern::new(r"a\\/b").unwrap().to_string(), r"/a\\\/b/");
        assert_eq!(
            encode::<Text, _>(op::eq(Pattern::new("1/2").unwrap().case_insensitive()), "name"),
            pair("name", r"/1\/2/i")
        );
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        assert!(matches!(
            Pattern::new(""),
            Err(InvalidQueryError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let error = Pattern::new("(unclosed").unwrap_err();
        assert!(matches!(
            error,
            InvalidQueryError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"
        ));
    }

    #[test]
    fn test_ids_accept_owned_and_borrowed_strings() {
        let id = String::from("5cd95395de30eff6ebccde5b");
        assert_eq!(
            encode::<Id, _>(op::eq(id.clone()), "movie"),
            pair("movie", "5cd95395de30eff6ebccde5b")
        );
        assert_eq!(
            encode::<Id, _>(op::is_in([id.as_str(), "abc"]), "movie"),
            pair("movie", "5cd95395de30eff6ebccde5b,abc")
        );
    }
}
