//! Tree builder
//!
//! Consumes classified tags from the tokenizer and maintains the flat
//! node arena plus the running nesting depth. Closure matching works
//! against the arena by (name, depth, still-open); when that fails, the
//! recovery procedure repairs documents whose intermediate tags were never
//! explicitly closed, self-closing the phantoms and correcting the depths
//! recorded while they were still counted as open.
//!
//! Branch order matters and is part of the contract: the skip test comes
//! before the closing-tag test, so a bare `</script>` with no closer of
//! its own fails the parse instead of being dropped as a rogue closer.

use crate::core::tokenizer::{Tag, Tokenizer};
use crate::error::ParseError;

use super::kind::TagKind;
use super::node::{Node, NodeId};

/// Single-pass builder: one per parse invocation, no shared state.
pub struct TreeBuilder<'a> {
    html: &'a str,
    load_content: bool,
    nodes: Vec<Node>,
    /// Running nesting depth; dips below zero only transiently while a
    /// closing tag is being reconciled
    depth: i32,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder for one document
    pub fn new(html: &'a str, load_content: bool) -> Self {
        TreeBuilder {
            html,
            load_content,
            // Rough elements-per-byte estimate borrowed from indexing work;
            // markup-light documents just shrink on return.
            nodes: Vec::with_capacity((html.len() / 32).clamp(4, 1024)),
            depth: 0,
        }
    }

    /// Run the scan to completion and return the arena
    pub fn build(mut self) -> Result<Vec<Node>, ParseError> {
        let mut tokenizer = Tokenizer::new(self.html);
        while let Some(tag) = tokenizer.next_tag() {
            self.dispatch(&tag, &mut tokenizer)?;
        }
        Ok(self.nodes)
    }

    fn dispatch(&mut self, tag: &Tag<'_>, tokenizer: &mut Tokenizer<'a>) -> Result<(), ParseError> {
        let kind = TagKind::classify(tag.name());

        if tag.is_self_closing || kind.is_void() {
            let mut node = self.new_node(tag);
            node.self_close(tag.terminator, self.capture(tag.open_position, tag.terminator));
            self.nodes.push(node);
        } else if kind.is_skip() {
            self.skip_region(tag, tokenizer)?;
        } else if tag.is_close {
            self.close_tag(tag, tokenizer)?;
        } else {
            let node = self.new_node(tag);
            self.nodes.push(node);
            self.depth += 1;
        }
        Ok(())
    }

    /// Skip-kind tag: the body is raw text, so jump straight to the
    /// matching closer and span the node across the whole region. No
    /// closer anywhere is fatal — there is no safe offset to resume from.
    fn skip_region(&mut self, tag: &Tag<'_>, tokenizer: &mut Tokenizer<'a>) -> Result<(), ParseError> {
        let name = tag.name();
        let closer = tokenizer
            .find_matching_close(name, tag.terminator + 1)
            .ok_or_else(|| ParseError::UnclosedSkipTag {
                name: name.to_string(),
                position: tag.open_position,
            })?;
        // '>' of "</name>"
        let end = closer + name.len() + 2;

        let mut node = self.new_node(tag);
        node.close(end, Vec::new(), self.capture(tag.open_position, end));
        self.nodes.push(node);
        tokenizer.seek(end + 1);
        Ok(())
    }

    /// Closing tag: match it against the arena, recovering when the
    /// depth bookkeeping says ancestors were never closed.
    fn close_tag(&mut self, tag: &Tag<'_>, tokenizer: &mut Tokenizer<'a>) -> Result<(), ParseError> {
        let name = tag.name();
        self.depth -= 1;

        let matched = match self.find_open(name) {
            Some(idx) => Some(idx),
            None => self.recover(name, tag)?,
        };

        let Some(idx) = matched else {
            // Rogue closer: no opener anywhere in the document. Drop it,
            // restore the depth, and re-scan from just past its '<'.
            log::trace!(
                target: "rustyhtml.builder",
                "ignoring rogue closing tag </{}> at offset {}",
                name,
                tag.open_position
            );
            self.depth += 1;
            tokenizer.seek(tag.open_position + 1);
            return Ok(());
        };

        let children = self.collect_children(idx, tag.terminator);
        for &child in &children {
            self.nodes[child as usize].parent = idx;
        }
        let open = self.nodes[idx as usize].open_position;
        let content = self.capture(open, tag.terminator);
        self.nodes[idx as usize].close(tag.terminator, children, content);
        Ok(())
    }

    /// Earliest still-open node with this exact name at the current depth
    fn find_open(&self, name: &str) -> Option<NodeId> {
        if self.depth < 0 {
            return None;
        }
        let depth = self.depth as u32;
        self.nodes
            .iter()
            .position(|n| n.name == name && n.depth == depth && !n.is_closed())
            .map(|i| i as NodeId)
    }

    /// The depth bookkeeping is off: some ancestors were opened but never
    /// closed. Take the most recently opened same-name node as the real
    /// target, self-close every still-open node inside its span, and pull
    /// the recorded depths of the span's already-closed nodes down by the
    /// number of phantoms removed. Returns `Ok(None)` when there is no
    /// same-name opener at all (rogue closer).
    fn recover(&mut self, name: &str, tag: &Tag<'_>) -> Result<Option<NodeId>, ParseError> {
        let Some(candidate) = self
            .nodes
            .iter()
            .rposition(|n| n.name == name && !n.is_closed())
        else {
            return Ok(None);
        };
        let cand_depth = self.nodes[candidate].depth;
        let cand_open = self.nodes[candidate].open_position;
        let in_span =
            move |n: &Node| n.depth > cand_depth && n.open_position > cand_open;

        // Nodes that finished closing before this tag had their depths
        // computed while the phantoms still counted as open ancestors.
        // Collect them before anything mutates.
        let stale: Vec<usize> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|&(_, n)| {
                n.is_closed() && n.closed_position < tag.open_position && in_span(n)
            })
            .map(|(i, _)| i)
            .collect();

        let mut removed: u32 = 0;
        for i in 0..self.nodes.len() {
            if !self.nodes[i].is_closed() && in_span(&self.nodes[i]) {
                let end = self.nodes[i].open_tag_end();
                self.nodes[i].self_close(end, None);
                removed += 1;
            }
        }

        self.depth -= removed as i32;
        for i in stale {
            self.nodes[i].depth = self.nodes[i].depth.saturating_sub(removed);
        }

        if removed > 0 {
            log::debug!(
                target: "rustyhtml.builder",
                "recovery self-closed {} unclosed descendant(s) of <{}> opened at offset {}",
                removed,
                name,
                cand_open
            );
        }

        match self.find_open(name) {
            Some(idx) => Ok(Some(idx)),
            None => Err(ParseError::InconsistentNesting {
                position: tag.open_position,
                name: self.nodes[candidate].name.clone(),
                opened_at: cand_open,
            }),
        }
    }

    /// Children of a freshly matched node: one level deeper, opened inside
    /// its span, and either already closed before this terminator or never
    /// closed at all.
    fn collect_children(&self, parent: NodeId, terminator: usize) -> Vec<NodeId> {
        let matched = &self.nodes[parent as usize];
        let child_depth = matched.depth + 1;
        let opened_after = matched.open_position;
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| {
                n.depth == child_depth
                    && n.open_position > opened_after
                    && (!n.is_closed() || n.closed_position < terminator)
            })
            .map(|(i, _)| i as NodeId)
            .collect()
    }

    fn new_node(&self, tag: &Tag<'_>) -> Node {
        Node::new(tag.body, self.depth.max(0) as u32, tag.open_position)
    }

    fn capture(&self, open: usize, close: usize) -> Option<String> {
        self.load_content
            .then(|| self.html[open..=close].to_string())
    }
}
