//! GraphQL document building helpers for resource facades.
//!
//! - [`Select`]: a field selection set, rendered as `id name account { id }`
//! - [`Args`]: an ordered argument list, rendered as `(ids: [1, 2], kind: all)`
//! - [`ArgValue`]: a single argument value
//!
//! # Example
//!
//! ```rust
//! use monday_api::resources::{ArgValue, Args, Select};
//!
//! let select = Select::new(["id", "name"]).nested("account", Select::new(["id"]));
//! assert_eq!(select.format(), "id name account { id }");
//!
//! let args = Args::new()
//!     .arg("ids", vec![1, 2])
//!     .arg("kind", ArgValue::enum_value("non_guests"));
//! assert_eq!(args.format(), "(ids: [1, 2], kind: non_guests)");
//! ```

use std::fmt;

use serde_json::Value;

/// A single field in a selection set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Field {
    /// A scalar field.
    Name(String),
    /// A field with its own selection set.
    Nested(String, Select),
}

/// An ordered GraphQL selection set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Select {
    fields: Vec<Field>,
}

impl Select {
    /// Creates a selection from scalar field names.
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(|f| Field::Name(f.into())).collect(),
        }
    }

    /// Adds a scalar field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(Field::Name(name.into()));
        self
    }

    /// Adds a field with a nested selection set.
    #[must_use]
    pub fn nested(mut self, name: impl Into<String>, select: Self) -> Self {
        self.fields.push(Field::Nested(name.into(), select));
        self
    }

    /// Returns the selected fields.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns `true` if no fields are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders the selection set without surrounding braces.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match field {
                Field::Name(name) => f.write_str(name)?,
                Field::Nested(name, select) => write!(f, "{name} {{ {select} }}")?,
            }
        }
        Ok(())
    }
}

impl From<&[&str]> for Select {
    fn from(fields: &[&str]) -> Self {
        Self::new(fields.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Select {
    fn from(fields: [&str; N]) -> Self {
        Self::new(fields)
    }
}

/// A GraphQL argument value.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    /// Integer literal, e.g. `123`.
    Int(i64),
    /// Boolean literal.
    Bool(bool),
    /// Quoted string literal.
    Str(String),
    /// Bare enum value, e.g. `change_column_value`.
    Enum(String),
    /// List literal.
    List(Vec<ArgValue>),
    /// JSON value passed as a string literal, as monday expects for
    /// column values and webhook configs.
    Json(Value),
}

impl ArgValue {
    /// Creates an [`ArgValue::Enum`].
    #[must_use]
    pub fn enum_value(value: impl Into<String>) -> Self {
        Self::Enum(value.into())
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{}", Value::String(s.clone())),
            Self::Enum(e) => f.write_str(e),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Json(value) => write!(f, "{}", Value::String(value.to_string())),
        }
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for ArgValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// An ordered list of GraphQL arguments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    entries: Vec<(String, ArgValue)>,
}

impl Args {
    /// Creates an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an argument, replacing any earlier value for the same name.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Sets an argument only when `value` is `Some`.
    #[must_use]
    pub fn arg_opt<V: Into<ArgValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.arg(name, value),
            None => self,
        }
    }

    /// Appends every argument of `other`, replacing values with the same name.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        other
            .entries
            .into_iter()
            .fold(self, |args, (name, value)| args.arg(name, value))
    }

    /// Returns the value of an argument.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Returns `true` if there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the argument list with parentheses, or an empty string when
    /// there are no arguments.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Renders the arguments without parentheses.
    pub(crate) fn format_inner(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return Ok(());
        }
        write!(f, "({})", self.format_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_formats_flat_fields() {
        assert_eq!(Select::new(["id", "name", "email"]).format(), "id name email");
    }

    #[test]
    fn test_select_formats_nested_fields() {
        let select = Select::new(["id"])
            .nested(
                "column_values",
                Select::new(["id", "text"]).nested("column", Select::new(["title"])),
            )
            .field("name");
        assert_eq!(
            select.format(),
            "id column_values { id text column { title } } name"
        );
    }

    #[test]
    fn test_select_from_slice() {
        let fields: &[&str] = &["id", "board_id"];
        assert_eq!(Select::from(fields).format(), "id board_id");
        assert!(Select::default().is_empty());
    }

    #[test]
    fn test_arg_values_format() {
        assert_eq!(ArgValue::from(42).to_string(), "42");
        assert_eq!(ArgValue::from(true).to_string(), "true");
        assert_eq!(ArgValue::from("hello").to_string(), r#""hello""#);
        assert_eq!(ArgValue::enum_value("public").to_string(), "public");
        assert_eq!(ArgValue::from(vec![1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(
            ArgValue::from(vec!["a@x.com", "b@x.com"]).to_string(),
            r#"["a@x.com", "b@x.com"]"#
        );
    }

    #[test]
    fn test_string_values_are_escaped() {
        assert_eq!(
            ArgValue::from("say \"hi\"\nnow").to_string(),
            r#""say \"hi\"\nnow""#
        );
    }

    #[test]
    fn test_json_values_are_encoded_as_strings() {
        let value = ArgValue::from(json!({"columnId": "status"}));
        assert_eq!(value.to_string(), r#""{\"columnId\":\"status\"}""#);
    }

    #[test]
    fn test_args_format_in_insertion_order() {
        let args = Args::new()
            .arg("board_id", 123)
            .arg("app_webhooks_only", true);
        assert_eq!(args.format(), "(board_id: 123, app_webhooks_only: true)");
    }

    #[test]
    fn test_args_replace_existing_value() {
        let args = Args::new().arg("limit", 10).arg("limit", 20);
        assert_eq!(args.format(), "(limit: 20)");
        assert_eq!(args.get("limit"), Some(&ArgValue::Int(20)));
    }

    #[test]
    fn test_args_merge_keeps_order_and_overrides() {
        let base = Args::new()
            .arg("board_name", "Roadmap")
            .arg("board_kind", ArgValue::enum_value("public"));
        let extra = Args::new()
            .arg("workspace_id", 7)
            .arg("board_kind", ArgValue::enum_value("private"));
        assert_eq!(
            base.merge(extra).format(),
            r#"(board_name: "Roadmap", board_kind: private, workspace_id: 7)"#
        );
    }

    #[test]
    fn test_empty_args_render_nothing() {
        assert_eq!(Args::new().format(), "");
        assert!(Args::new().arg_opt::<i64>("limit", None).is_empty());
    }
}
