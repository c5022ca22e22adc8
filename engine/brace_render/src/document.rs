//! The read-only hierarchical value templates render against.
//!
//! [`Document`] is the seam between the renderer and whatever produced the
//! data: the render walk consumes this trait only, never a concrete
//! representation. The bundled implementation covers [`serde_json::Value`];
//! any other tree-shaped value can plug in the same way.

use std::borrow::Cow;
use std::fmt;

/// The kinds a document value can take.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DocumentKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Object => "object",
            DocumentKind::Array => "array",
            DocumentKind::String => "string",
            DocumentKind::Number => "number",
            DocumentKind::Bool => "bool",
            DocumentKind::Null => "null",
        };
        f.write_str(name)
    }
}

/// Read-only hierarchical data value.
///
/// Every capability degrades gracefully: asking an array for a property or
/// a string for its elements answers `None` rather than failing, which is
/// what lets absent names render as nothing.
pub trait Document {
    /// The value's kind.
    fn kind(&self) -> DocumentKind;

    /// Property lookup; `None` for non-objects and for missing keys.
    fn property(&self, name: &str) -> Option<&Self>;

    /// Elements in order; `None` for non-arrays.
    fn items(&self) -> Option<&[Self]>
    where
        Self: Sized;

    /// The boolean payload; `None` for non-booleans.
    fn as_bool(&self) -> Option<bool>;

    /// The value's textual form: strings verbatim, numbers and booleans as
    /// their source text, null as the empty string, containers as their
    /// compact serialization.
    fn as_text(&self) -> Cow<'_, str>;
}

impl Document for serde_json::Value {
    fn kind(&self) -> DocumentKind {
        match self {
            serde_json::Value::Object(_) => DocumentKind::Object,
            serde_json::Value::Array(_) => DocumentKind::Array,
            serde_json::Value::String(_) => DocumentKind::String,
            serde_json::Value::Number(_) => DocumentKind::Number,
            serde_json::Value::Bool(_) => DocumentKind::Bool,
            serde_json::Value::Null => DocumentKind::Null,
        }
    }

    fn property(&self, name: &str) -> Option<&Self> {
        match self {
            serde_json::Value::Object(map) => map.get(name),
            _ => None,
        }
    }

    fn items(&self) -> Option<&[Self]> {
        match self {
            serde_json::Value::Array(items) => Some(items),
            _ => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            serde_json::Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    fn as_text(&self) -> Cow<'_, str> {
        match self {
            serde_json::Value::Null => Cow::Borrowed(""),
            serde_json::Value::String(text) => Cow::Borrowed(text),
            other => Cow::Owned(other.to_string()),
        }
    }
}
