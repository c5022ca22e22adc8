//! Lexer failure modes.

/// Errors raised by [`tokenize`](crate::tokenize).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexError {
    /// A matched tag has no recognized delimiter shape.
    ///
    /// The scanner only hands well-fenced tags to classification, so this
    /// cannot be reached through [`tokenize`](crate::tokenize). It exists
    /// so an unknown tag shape fails loudly instead of being dropped.
    #[error("unrecognized tag {tag:?} at byte {offset}")]
    UnrecognizedTag {
        /// Byte offset of the tag's first delimiter in the template.
        offset: usize,
        /// The raw matched tag, delimiters included.
        tag: String,
    },
}
