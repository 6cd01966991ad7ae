//! Fatal parse failures
//!
//! The scanner tolerates almost everything: truncated constructs end the
//! scan, rogue closing tags are dropped, and unclosed ancestors are repaired
//! in place. The two conditions below are the only ones that abort a parse.

use thiserror::Error;

/// A condition that aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A script/style region whose matching closing tag never appears.
    /// Its body must not be reinterpreted as markup, so there is no safe
    /// offset to resume from.
    #[error("unable to find closing tag for {name} opened at offset {position}")]
    UnclosedSkipTag {
        /// Tag name as written in the opening tag.
        name: String,
        /// Offset of the opening tag's `<`.
        position: usize,
    },

    /// A closing tag that still matches no open node after recovery has
    /// corrected the nesting depth.
    #[error("cannot reconcile closing tag at offset {position}; {name} opened at offset {opened_at} is implicated")]
    InconsistentNesting {
        /// Offset of the closing tag's `<`.
        position: usize,
        /// Name of the recovery candidate that failed to match.
        name: String,
        /// Offset where the candidate was opened.
        opened_at: usize,
    },
}
