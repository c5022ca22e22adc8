//! Parse tree for brace templates.
//!
//! A parsed template is a [`Section`] with an empty name at the root.
//! Sections are immutable once built: construction goes through
//! [`SectionBuilder`], which is frozen exactly once. The tree owns no
//! reference to any data value, so one tree can serve concurrent render
//! calls.

/// One node of the parse tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    /// Literal text emitted verbatim.
    Content(String),
    /// Variable lookup whose textual value is HTML-escaped on output.
    EscapedVar(String),
    /// Variable lookup emitted without escaping.
    UnescapedVar(String),
    /// Named block that gates or repeats its children.
    Section(Section),
}

/// A named section and its ordered children.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Section {
    name: String,
    children: Box<[Node]>,
}

impl Section {
    /// The section name. Empty for the synthetic root.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Child nodes in document order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// Accumulates children for a section under construction.
#[derive(Debug)]
pub struct SectionBuilder {
    name: String,
    children: Vec<Node>,
}

impl SectionBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        SectionBuilder {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append a child node.
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Freeze the accumulated children into an immutable [`Section`].
    #[must_use]
    pub fn freeze(self) -> Section {
        Section {
            name: self.name,
            children: self.children.into_boxed_slice(),
        }
    }
}
