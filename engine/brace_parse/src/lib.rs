//! Recursive-descent parser for brace templates.
//!
//! Consumes the lexer's token stream in a single forward pass and builds
//! an immutable [`Section`] tree. Parsing is total: any token sequence
//! yields a tree, so templates with stray or missing close tags still
//! parse.
//!
//! Recovery rules, in token order:
//! - comments are discarded
//! - inverted-section tokens are consumed without effect (recognized by
//!   the grammar, absent from the tree)
//! - a close tag that does not name the open section is discarded
//! - end of input closes every open section implicitly

mod cursor;

pub use cursor::TokenCursor;

use brace_ir::{Node, Section, SectionBuilder, Token, TokenKind};
use tracing::{debug, trace};

/// Parse a token stream into its tree form.
///
/// The returned root is a [`Section`] with an empty name whose children
/// span the whole template. Rendering gates every named section on data;
/// the root is the one section that is never gated.
#[must_use]
pub fn parse(tokens: &[Token]) -> Section {
    let mut cursor = TokenCursor::new(tokens);
    let root = parse_section("", &mut cursor);
    debug!(
        tokens = tokens.len(),
        top_level = root.children().len(),
        "parsed template"
    );
    root
}

/// Build one section level; recursion depth mirrors section nesting.
///
/// Returns when a close tag naming this section is consumed or the stream
/// ends. A close naming the current section ends the level even at the
/// root, so tokens after a stray `{{/}}` are unreachable.
fn parse_section(name: &str, cursor: &mut TokenCursor<'_>) -> Section {
    let mut section = SectionBuilder::new(name);
    while !cursor.is_at_end() {
        let token = cursor.advance();
        match token.kind {
            TokenKind::Content => section.push(Node::Content(token.text.clone())),
            TokenKind::EscapedVar => section.push(Node::EscapedVar(token.text.clone())),
            TokenKind::UnescapedVar => section.push(Node::UnescapedVar(token.text.clone())),
            TokenKind::SectionOpen => {
                trace!(pos = cursor.position(), name = %token.text, "section open");
                let child = parse_section(&token.text, cursor);
                section.push(Node::Section(child));
            }
            TokenKind::SectionClose if token.text == name => {
                trace!(pos = cursor.position(), name = %token.text, "section close");
                return section.freeze();
            }
            TokenKind::SectionClose => {
                trace!(
                    pos = cursor.position(),
                    open = name,
                    close = %token.text,
                    "mismatched section close dropped"
                );
            }
            TokenKind::InvertedSection | TokenKind::Comment => {}
        }
    }
    section.freeze()
}
