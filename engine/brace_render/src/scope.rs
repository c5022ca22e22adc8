//! Name resolution over a stack of document frames.

use smallvec::SmallVec;

use crate::document::Document;

/// Scope stack for one render call.
///
/// The root frame is fixed; section entry pushes overlay frames above it
/// and section exit pops them, so the stack always mirrors the section
/// path from the root to the node being rendered. Frames are plain
/// references: the stack never owns data and never outlives its render
/// call.
pub(crate) struct ScopeStack<'a, D> {
    root: &'a D,
    /// Frames above the root, innermost last. Inline up to the nesting
    /// depth real templates stay within.
    overlays: SmallVec<[&'a D; 8]>,
}

impl<'a, D: Document> ScopeStack<'a, D> {
    pub(crate) fn new(root: &'a D) -> Self {
        ScopeStack {
            root,
            overlays: SmallVec::new(),
        }
    }

    pub(crate) fn push(&mut self, frame: &'a D) {
        self.overlays.push(frame);
    }

    pub(crate) fn pop(&mut self) {
        self.overlays.pop();
    }

    /// The innermost frame; the root when no overlay is active.
    pub(crate) fn top(&self) -> &'a D {
        self.overlays.last().copied().unwrap_or(self.root)
    }

    /// Resolve `name` innermost-out: the first frame owning the property
    /// supplies the value. Frames without properties (array elements that
    /// are scalars, pushed booleans) are skipped over, not dead ends.
    pub(crate) fn lookup(&self, name: &str) -> Option<&'a D> {
        self.frames_innermost_out()
            .find_map(|frame| frame.property(name))
    }

    fn frames_innermost_out(&self) -> impl Iterator<Item = &'a D> + '_ {
        self.overlays
            .iter()
            .rev()
            .chain(std::iter::once(&self.root))
            .copied()
    }
}
