//! Brace IR - shared token and tree types.
//!
//! This crate contains the data structures passed between the pipeline
//! stages:
//! - [`Token`] and [`TokenKind`] for lexer output
//! - [`Node`] and [`Section`] for the parse tree
//! - [`SectionBuilder`] for tree construction during parsing
//!
//! It depends on nothing else in the workspace, so external tools can
//! consume tokens and trees without pulling in the lexer or renderer.

mod token;
mod tree;

pub use token::{Token, TokenKind};
pub use tree::{Node, Section, SectionBuilder};
