use memchr::memchr;
use tracing::trace;

use super::tracker::FragmentTracker;

/// Split HTML into fragments of at most `max_len` bytes, closing open tags
/// at each boundary and re-opening them (raw attribute text included) at the
/// start of the next fragment.
///
/// Tags and text runs are kept whole: a single tag or run larger than the
/// whole budget becomes one oversized fragment rather than being cut. A
/// trailing `<` with no matching `>` is discarded. Empty input or a zero
/// budget yields nothing.
pub fn split_html_content(source: &str, max_len: usize) -> HtmlFragments<'_> {
    let done = source.is_empty() || max_len == 0;
    HtmlFragments {
        source,
        pos: 0,
        tracker: FragmentTracker::new(max_len),
        done,
    }
}

/// Lazy iterator over the fragments of an HTML source.
///
/// Each `next` call scans only as far as the next finished fragment, so
/// dropping the iterator early does no further work.
#[derive(Debug)]
pub struct HtmlFragments<'a> {
    source: &'a str,
    /// Byte offset of the scan cursor, always on a char boundary
    pos: usize,
    tracker: FragmentTracker,
    done: bool,
}

impl HtmlFragments<'_> {
    /// Flush and reseed if appending `piece` would overflow a non-empty
    /// buffer. The finished fragment is handed back to the scan loop, which
    /// returns it after applying the pending piece to the fresh buffer.
    fn take_if_overflowing(&mut self, piece: &str) -> Option<String> {
        if self.tracker.would_exceed(piece) && !self.tracker.is_empty() {
            let fragment = self.tracker.flush();
            self.tracker.start_fragment();
            trace!(bytes = fragment.len(), "flushed html fragment");
            Some(fragment)
        } else {
            None
        }
    }

    /// Apply one raw tag: update the open-tag state by tag class, then
    /// append the raw text itself.
    fn apply_tag(&mut self, raw: &str) {
        let inner = &raw[1..raw.len() - 1];
        if inner.starts_with('/') {
            // First token minus the slash; `</ div>` yields "" and no pop
            let name = inner
                .split_whitespace()
                .next()
                .map(|token| &token[1..])
                .unwrap_or("");
            self.tracker.on_closing_tag(name);
        } else if !inner.ends_with('/') {
            if let Some(name) = inner.split_whitespace().next() {
                self.tracker.on_opening_tag(raw, name);
            }
        }
        self.tracker.add_content(raw);
    }
}

impl Iterator for HtmlFragments<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let source = self.source;
        let bytes = source.as_bytes();
        while self.pos < bytes.len() {
            if bytes[self.pos] == b'<' {
                let Some(rel) = memchr(b'>', &bytes[self.pos..]) else {
                    // Truncated trailing tag, nothing more to scan
                    break;
                };
                let end = self.pos + rel + 1;
                let raw = &source[self.pos..end];
                self.pos = end;
                let finished = self.take_if_overflowing(raw);
                self.apply_tag(raw);
                if let Some(fragment) = finished {
                    return Some(fragment);
                }
            } else {
                let end = memchr(b'<', &bytes[self.pos..])
                    .map(|rel| self.pos + rel)
                    .unwrap_or(bytes.len());
                debug_assert!(source.is_char_boundary(end));
                let text = &source[self.pos..end];
                self.pos = end;
                // Runs of pure whitespace between tags are dropped
                if !text.trim().is_empty() {
                    let finished = self.take_if_overflowing(text);
                    self.tracker.add_content(text);
                    if let Some(fragment) = finished {
                        return Some(fragment);
                    }
                }
            }
        }
        self.done = true;
        let last = self.tracker.flush();
        if last.is_empty() {
            None
        } else {
            Some(last)
        }
    }
}
