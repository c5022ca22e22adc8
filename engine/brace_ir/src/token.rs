//! Token types produced by the brace lexer.

use std::fmt;

/// Classification of a lexed template token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Literal text between tags, passed through verbatim.
    Content,
    /// `{{! note }}` - dropped entirely at parse time.
    Comment,
    /// `{{#name}}` - opens a section.
    SectionOpen,
    /// `{{/name}}` - closes a section.
    SectionClose,
    /// `{{^name}}` - recognized by the lexer, never materialized in the tree.
    InvertedSection,
    /// `{{name}}` - variable lookup whose output is HTML-escaped.
    EscapedVar,
    /// `{{{name}}}` or `{{&name}}` - variable lookup emitted verbatim.
    UnescapedVar,
}

impl TokenKind {
    /// Short name used in traces and error messages.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Content => "content",
            TokenKind::Comment => "comment",
            TokenKind::SectionOpen => "section open",
            TokenKind::SectionClose => "section close",
            TokenKind::InvertedSection => "inverted section",
            TokenKind::EscapedVar => "escaped variable",
            TokenKind::UnescapedVar => "unescaped variable",
        }
    }
}

/// A single lexed token: its classification plus its text.
///
/// For [`TokenKind::Content`] the text is the literal source slice. For tag
/// tokens it is the tag interior with delimiters and one sigil character
/// removed and surrounding whitespace trimmed; comment text keeps its
/// whitespace so the source form survives a rebuild.
///
/// Tokens are produced once by the lexer and consumed in document order by
/// the parser.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    #[inline]
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    /// Prints the token's canonical source form.
    ///
    /// Content is reproduced verbatim. Tags are rebuilt with canonical
    /// delimiters and sigil, so interior padding and the `{{&name}}`
    /// spelling of unescaped tags are not preserved.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = &self.text;
        match self.kind {
            TokenKind::Content => f.write_str(text),
            TokenKind::Comment => write!(f, "{{{{!{text}}}}}"), // {{!text}}
            TokenKind::SectionOpen => write!(f, "{{{{#{text}}}}}"), // {{#text}}
            TokenKind::SectionClose => write!(f, "{{{{/{text}}}}}"), // {{/text}}
            TokenKind::InvertedSection => write!(f, "{{{{^{text}}}}}"), // {{^text}}
            TokenKind::EscapedVar => write!(f, "{{{{{text}}}}}"), // {{text}}
            TokenKind::UnescapedVar => write!(f, "{{{{{{{text}}}}}}}"), // {{{text}}}
        }
    }
}
