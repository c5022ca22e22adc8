//! Tokenizer for brace templates.
//!
//! Scans a template string once, left to right, and produces an ordered
//! token stream that losslessly covers the input: every byte lands either
//! in a tag token or in a `Content` token.
//!
//! Two tag shapes are recognized, non-greedily (the first possible close
//! wins) and non-overlapping:
//! - two-fence: `{{ interior }}`
//! - three-fence: `{{{ interior }}}`
//!
//! where `interior` is one or more characters containing no brace. Text
//! that never completes a tag stays content, so stray braces pass through
//! verbatim.

mod error;
mod scan;

pub use error::LexError;

use brace_ir::Token;
use tracing::debug;

/// Tokenize a template.
///
/// Errors are defensive only: every tag shape the scanner can match is
/// classifiable, so well-formed and ill-formed templates alike tokenize
/// successfully (ill-formed tags simply remain content).
pub fn tokenize(template: &str) -> Result<Vec<Token>, LexError> {
    let tokens = scan::Scanner::new(template).run()?;
    debug!(
        bytes = template.len(),
        tokens = tokens.len(),
        "tokenized template"
    );
    Ok(tokens)
}
