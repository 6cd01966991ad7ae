//! Tag tokenizer
//!
//! Drives the scanner across the document and yields one delimited,
//! classified tag at a time. Comments, doctype declarations, and
//! processing instructions are consumed silently; a construct whose
//! terminator never appears swallows the rest of the input and ends the
//! scan without an error.
//!
//! The tree builder owns the resume policy: after a yielded tag the cursor
//! sits just past its `>`, and the builder calls [`Tokenizer::seek`] to
//! jump past skip-tag bodies or to re-scan after a rogue closer.

use super::scanner::Scanner;
use memchr::memmem;

/// One delimited open or close tag.
#[derive(Debug, Clone, Copy)]
pub struct Tag<'a> {
    /// Offset of the leading `<`.
    pub open_position: usize,
    /// Offset of the terminating `>`.
    pub terminator: usize,
    /// Interior text: everything between the markers, with the leading
    /// `<`/`</` and a trailing `/` excluded.
    pub body: &'a str,
    /// Tag begins with `</`.
    pub is_close: bool,
    /// The character before the terminator is `/`.
    pub is_self_closing: bool,
}

impl<'a> Tag<'a> {
    /// Leading whitespace-delimited token of the interior text.
    pub fn name(&self) -> &'a str {
        self.body.split_whitespace().next().unwrap_or("")
    }
}

/// Pull-style tokenizer over one document.
pub struct Tokenizer<'a> {
    html: &'a str,
    scanner: Scanner<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `html`
    pub fn new(html: &'a str) -> Self {
        Tokenizer {
            html,
            scanner: Scanner::new(html.as_bytes()),
        }
    }

    /// Reposition the read cursor (absolute byte offset)
    #[inline]
    pub fn seek(&mut self, pos: usize) {
        self.scanner.set_position(pos);
    }

    /// Find the matching closer for a raw-content region; see
    /// [`Scanner::find_matching_close`]
    #[inline]
    pub fn find_matching_close(&self, name: &str, from: usize) -> Option<usize> {
        self.scanner.find_matching_close(name, from)
    }

    /// Yield the next open/close tag, or `None` when the scan is over —
    /// either the input is exhausted or a truncated construct consumed the
    /// rest of it.
    pub fn next_tag(&mut self) -> Option<Tag<'a>> {
        loop {
            let open = self.scanner.find_tag_start()?;

            // A '<' as the very last character carries nothing.
            if open + 1 >= self.scanner.len() {
                return None;
            }

            match self.scanner.byte_at(open + 1) {
                Some(b'!') => {
                    self.skip_bang(open)?;
                    continue;
                }
                Some(b'?') => {
                    self.skip_processing_instruction(open)?;
                    continue;
                }
                _ => {}
            }

            let is_close = self.scanner.byte_at(open + 1) == Some(b'/');
            let terminator = self.scanner.find_tag_end(open)?;
            let is_self_closing = self.scanner.byte_at(terminator - 1) == Some(b'/');

            let body_start = if is_close { open + 2 } else { open + 1 };
            let body_end = if is_self_closing { terminator - 1 } else { terminator };
            let body = if body_start < body_end {
                &self.html[body_start..body_end]
            } else {
                ""
            };

            self.scanner.set_position(terminator + 1);
            return Some(Tag {
                open_position: open,
                terminator,
                body,
                is_close,
                is_self_closing,
            });
        }
    }

    /// Skip a `<!` construct: a doctype runs to the next `>`, anything else
    /// is taken for a comment and runs to the first `-->`. `None` means the
    /// terminator never appeared and the scan is over.
    fn skip_bang(&mut self, open: usize) -> Option<()> {
        let bytes = self.html.as_bytes();
        let is_doctype = bytes.len() >= open + 9
            && bytes[open + 2..open + 9].eq_ignore_ascii_case(b"DOCTYPE");

        if is_doctype {
            let from = open + 9;
            let gt = memchr::memchr(b'>', bytes.get(from..)?)?;
            self.scanner.set_position(from + gt + 1);
        } else {
            let end = memmem::find(&bytes[open..], b"-->")?;
            self.scanner.set_position(open + end + 3);
        }
        Some(())
    }

    /// Skip a `<?...?>` region; `None` when `?>` never appears.
    fn skip_processing_instruction(&mut self, open: usize) -> Option<()> {
        let bytes = self.html.as_bytes();
        let end = memmem::find(&bytes[open + 1..], b"?>")?;
        self.scanner.set_position(open + 1 + end + 2);
        Some(())
    }
}
