//! Renderer failure modes.

use crate::document::DocumentKind;

/// Errors raised by [`render`](crate::render).
///
/// Both variants are fatal to the whole call: partially rendered output is
/// discarded. Absent names are not errors; an absent variable renders as
/// the empty string and an absent section renders nothing.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// A section name resolved to a value that cannot gate a block.
    #[error("section {name:?} is bound to a {kind} value; sections gate on booleans and arrays")]
    UnsupportedSectionValue { name: String, kind: DocumentKind },
    /// The data value handed to [`render`](crate::render) is not an object.
    #[error("root data value is {kind}; templates render against an object")]
    InvalidRoot { kind: DocumentKind },
}
