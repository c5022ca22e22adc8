//! Renderer for parsed brace templates.
//!
//! Walks a [`Section`] tree depth-first against a [`Document`] value,
//! appending to a single output buffer. Name resolution runs over a scope
//! stack seeded with the root value: variable lookups fall back outward
//! through the stack, section gating reads the innermost frame only.
//!
//! A parse tree borrows nothing from any data value, so one tree can serve
//! any number of concurrent render calls; each call owns its buffer and
//! its stack.

mod document;
mod error;
mod escape;
mod scope;

pub use document::{Document, DocumentKind};
pub use error::RenderError;
pub use escape::escape_into;

use std::borrow::Cow;

use brace_ir::{Node, Section};
use tracing::{debug, trace};

use scope::ScopeStack;

/// Render a parsed template against a data value.
///
/// `data` must be an object; that is checked before any output is
/// produced. The synthetic root section bypasses gating, so its children
/// render directly against the single-frame stack.
///
/// # Errors
///
/// [`RenderError::InvalidRoot`] when `data` is not an object, and
/// [`RenderError::UnsupportedSectionValue`] when a section name resolves
/// to a value that is neither boolean nor array.
pub fn render<D: Document>(tree: &Section, data: &D) -> Result<String, RenderError> {
    if data.kind() != DocumentKind::Object {
        return Err(RenderError::InvalidRoot { kind: data.kind() });
    }
    let mut out = String::new();
    let mut scopes = ScopeStack::new(data);
    render_children(tree, &mut out, &mut scopes)?;
    debug!(bytes = out.len(), "rendered template");
    Ok(out)
}

fn render_children<D: Document>(
    section: &Section,
    out: &mut String,
    scopes: &mut ScopeStack<'_, D>,
) -> Result<(), RenderError> {
    for node in section.children() {
        match node {
            Node::Content(text) => out.push_str(text),
            Node::EscapedVar(name) => escape_into(out, &resolve(scopes, name)),
            Node::UnescapedVar(name) => out.push_str(&resolve(scopes, name)),
            Node::Section(child) => render_section(child, out, scopes)?,
        }
    }
    Ok(())
}

/// Resolve a variable name to its textual form.
///
/// Lookup never fails: a name no frame owns renders as the empty string.
fn resolve<'a, D: Document>(scopes: &ScopeStack<'a, D>, name: &str) -> Cow<'a, str> {
    scopes
        .lookup(name)
        .map_or(Cow::Borrowed(""), Document::as_text)
}

/// Gate or repeat a section against the innermost frame.
fn render_section<D: Document>(
    section: &Section,
    out: &mut String,
    scopes: &mut ScopeStack<'_, D>,
) -> Result<(), RenderError> {
    // Sections bind to the immediately enclosing scope only; unlike
    // variables they never fall back through the stack.
    let Some(value) = scopes.top().property(section.name()) else {
        trace!(name = section.name(), "section absent, skipped");
        return Ok(());
    };
    if let Some(gate) = value.as_bool() {
        trace!(name = section.name(), gate, "section gated");
        if gate {
            // The boolean itself becomes the top frame; lookups inside the
            // block reach the enclosing object through the fallback chain.
            scopes.push(value);
            render_children(section, out, scopes)?;
            scopes.pop();
        }
        return Ok(());
    }
    if let Some(items) = value.items() {
        trace!(name = section.name(), len = items.len(), "section fan-out");
        for item in items {
            scopes.push(item);
            render_children(section, out, scopes)?;
            scopes.pop();
        }
        return Ok(());
    }
    Err(RenderError::UnsupportedSectionValue {
        name: section.name().to_string(),
        kind: value.kind(),
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
