//! Tag scanning over the template bytes.
//!
//! The scanner jumps between `{` candidates with `memchr`; everything not
//! covered by a matched tag becomes verbatim content. Tag matching mirrors
//! the grammar `{{ interior }}` | `{{{ interior }}}` with a non-greedy
//! interior of one or more non-brace bytes: the interior runs to the first
//! brace, which must complete the closing fence exactly, otherwise the
//! candidate fails and scanning resumes at the next `{`.

use brace_ir::{Token, TokenKind};
use memchr::{memchr, memchr2};
use tracing::trace;

use crate::LexError;

/// A matched tag: the byte range it covers and its fence width (2 or 3).
struct TagMatch {
    start: usize,
    end: usize,
    fences: usize,
}

/// Single forward pass over one template.
pub(crate) struct Scanner<'a> {
    template: &'a str,
    /// Start of the content gap that has not been emitted yet.
    gap_start: usize,
    /// Next scan offset; tag candidates are `{` bytes at or after it.
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(template: &'a str) -> Self {
        Scanner {
            template,
            gap_start: 0,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    pub(crate) fn run(mut self) -> Result<Vec<Token>, LexError> {
        let bytes = self.template.as_bytes();
        while let Some(offset) = memchr(b'{', &bytes[self.pos..]) {
            let candidate = self.pos + offset;
            debug_assert_eq!(bytes[candidate], b'{');
            match match_tag(bytes, candidate) {
                Some(tag) => {
                    self.flush_gap(tag.start);
                    self.push_tag(&tag)?;
                    self.gap_start = tag.end;
                    self.pos = tag.end;
                }
                // Not a tag. A tag may still start one byte further on:
                // `{{{x}}` holds `{{x}}` from its second brace.
                None => self.pos = candidate + 1,
            }
        }
        self.flush_gap(self.template.len());
        Ok(self.tokens)
    }

    /// Emit the content between the previous tag and `end`, if non-empty.
    fn flush_gap(&mut self, end: usize) {
        if end > self.gap_start {
            self.tokens.push(Token::new(
                TokenKind::Content,
                &self.template[self.gap_start..end],
            ));
        }
    }

    fn push_tag(&mut self, tag: &TagMatch) -> Result<(), LexError> {
        let raw = &self.template[tag.start..tag.end];
        let Some(token) = classify(raw, tag.fences) else {
            return Err(LexError::UnrecognizedTag {
                offset: tag.start,
                tag: raw.to_string(),
            });
        };
        trace!(
            offset = tag.start,
            kind = token.kind.display_name(),
            text = %token.text,
            "tag"
        );
        self.tokens.push(token);
        Ok(())
    }
}

/// Attempt both tag shapes at `start`, two-fence first.
fn match_tag(bytes: &[u8], start: usize) -> Option<TagMatch> {
    match_fenced(bytes, start, 2).or_else(|| match_fenced(bytes, start, 3))
}

/// Match `{` x `fences`, one or more non-brace bytes, `}` x `fences`.
fn match_fenced(bytes: &[u8], start: usize, fences: usize) -> Option<TagMatch> {
    let interior = start + fences;
    if bytes.len() < interior || bytes[start..interior].iter().any(|&b| b != b'{') {
        return None;
    }
    // Non-greedy interior: it runs to the first brace, which must open the
    // closing fence. An interior brace can never be absorbed instead.
    let brace = interior + memchr2(b'{', b'}', &bytes[interior..])?;
    if brace == interior {
        return None;
    }
    let end = brace + fences;
    if end > bytes.len() || bytes[brace..end].iter().any(|&b| b != b'}') {
        return None;
    }
    Some(TagMatch { start, end, fences })
}

/// Classify a matched tag by its delimiters and leading sigil.
///
/// Two-fence tags dispatch on the first interior byte; three-fence tags are
/// unescaped variables regardless of interior. Tag text is the interior
/// with one sigil stripped and surrounding whitespace trimmed, except that
/// comment text keeps its whitespace.
///
/// Returns `None` only for a raw tag that opens with no recognized
/// delimiter shape; the fence matcher cannot produce one, so the caller's
/// error path is defensive.
fn classify(raw: &str, fences: usize) -> Option<Token> {
    if fences == 3 && raw.starts_with("{{{") {
        let interior = &raw[3..raw.len() - 3];
        return Some(Token::new(TokenKind::UnescapedVar, interior.trim()));
    }
    if fences != 2 || !raw.starts_with("{{") {
        return None;
    }
    let interior = &raw[2..raw.len() - 2];
    let token = match interior.as_bytes().first().copied() {
        Some(b'#') => Token::new(TokenKind::SectionOpen, interior[1..].trim()),
        Some(b'/') => Token::new(TokenKind::SectionClose, interior[1..].trim()),
        Some(b'^') => Token::new(TokenKind::InvertedSection, interior[1..].trim()),
        Some(b'&') => Token::new(TokenKind::UnescapedVar, interior[1..].trim()),
        Some(b'!') => Token::new(TokenKind::Comment, &interior[1..]),
        _ => Token::new(TokenKind::EscapedVar, interior.trim()),
    };
    Some(token)
}
