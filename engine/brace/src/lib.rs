//! Logic-less templates: `{{name}}` interpolation, `{{#section}}` blocks.
//!
//! The engine is a three-stage pipeline, one crate per stage, re-exported
//! here: [`tokenize`] splits a template into tokens, [`parse`] builds an
//! immutable [`Section`] tree, [`render`] walks the tree against a
//! [`Document`] value. [`Template`] bundles the first two stages and keeps
//! the tree for repeated rendering.
//!
//! ```
//! use brace::Template;
//!
//! let template = Template::compile("Hello {{name}}!")?;
//! let out = template.render_json(r#"{"name": "World"}"#)?;
//! assert_eq!(out, "Hello World!");
//! # Ok::<(), brace::Error>(())
//! ```

pub use brace_ir::{Node, Section, SectionBuilder, Token, TokenKind};
pub use brace_lexer::{tokenize, LexError};
pub use brace_parse::{parse, TokenCursor};
pub use brace_render::{escape_into, render, Document, DocumentKind, RenderError};

/// Any failure from the compile-or-render pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Render(#[from] RenderError),
    /// The text handed to [`Template::render_json`] is not valid JSON.
    #[error("data document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A compiled template: parse once, render many.
///
/// The tree is immutable and borrows nothing from any data value, so a
/// `Template` can be shared across threads and rendered concurrently.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Template {
    tree: Section,
}

impl Template {
    /// Tokenize and parse `source` into a reusable template.
    ///
    /// # Errors
    ///
    /// Fails only on the lexer's defensive [`LexError`]; ill-formed tags
    /// are content, not errors, so compilation is total in practice.
    pub fn compile(source: &str) -> Result<Self, Error> {
        let tokens = tokenize(source)?;
        Ok(Template {
            tree: parse(&tokens),
        })
    }

    /// The parsed tree.
    #[must_use]
    pub fn tree(&self) -> &Section {
        &self.tree
    }

    /// Render against any [`Document`] value.
    ///
    /// # Errors
    ///
    /// See [`render`].
    pub fn render<D: Document>(&self, data: &D) -> Result<String, Error> {
        Ok(render(&self.tree, data)?)
    }

    /// Parse `json` and render against it.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] when the text does not parse, otherwise as
    /// [`render`].
    pub fn render_json(&self, json: &str) -> Result<String, Error> {
        let data: serde_json::Value = serde_json::from_str(json)?;
        Ok(render(&self.tree, &data)?)
    }
}
