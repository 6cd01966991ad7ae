//! rustyhtml - Tolerant HTML scanning into a flat structural node list
//!
//! One left-to-right pass converts possibly-invalid markup into an ordered
//! list of tag nodes carrying byte positions, nesting depth, attributes,
//! and parent/child handles. The list is a flat arena in creation order;
//! callers that want a rooted tree rebuild it from the `parent`/`children`
//! indices.
//!
//! Common authoring errors recover in place instead of failing the parse:
//! - unclosed tags are implicitly self-closed when an ancestor closes,
//!   with recorded depths corrected to match
//! - rogue closing tags (no opener anywhere) are dropped
//! - a quote that never closes is re-anchored at the previous `>` when a
//!   fresh tag follows
//! - truncated comments/doctypes/tags end the scan with the nodes found
//!
//! Only two conditions are fatal (see [`ParseError`]): a script/style
//! region with no closing tag, and a closing tag the recovery procedure
//! cannot reconcile.
//!
//! Entity decoding, encoding detection, and query layers are out of scope;
//! apply them to [`Node::content`] or the source text as needed.

mod core;
mod error;
mod tree;

pub use crate::core::attributes::Attribute;
pub use crate::error::ParseError;
pub use crate::tree::kind::TagKind;
pub use crate::tree::node::{Node, NodeId, NO_NODE, UNCLOSED};

use crate::tree::builder::TreeBuilder;

/// Parse markup into the flat node list.
///
/// With `load_content` set, every closed node's [`Node::content`] carries
/// the raw substring from its opening `<` through its closing `>`
/// inclusive. Nodes self-closed by recovery have no terminated extent of
/// their own and never carry content.
///
/// # Errors
///
/// Returns [`ParseError`] only for the two fatal conditions; every other
/// malformation yields a best-effort node list.
///
/// # Examples
///
/// ```
/// let nodes = rustyhtml::parse("<div><p></p></div>", false).unwrap();
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes[0].name, "div");
/// assert_eq!(nodes[1].parent(), Some(0));
/// ```
pub fn parse(html: &str, load_content: bool) -> Result<Vec<Node>, ParseError> {
    TreeBuilder::new(html, load_content).build()
}
