use std::str::SplitWhitespace;

use tracing::trace;

use super::sentences::Sentences;

/// Split plain text into fragments of at most `max_len` bytes.
///
/// Sentences are packed greedily, joined by single spaces. A sentence larger
/// than the whole budget is split into words and packed the same way; a
/// single word larger than the budget is emitted alone as an oversized
/// fragment. Empty input or a zero budget yields nothing.
pub fn split_text_content(source: &str, max_len: usize) -> TextFragments<'_> {
    let done = source.is_empty() || max_len == 0;
    TextFragments {
        sentences: Sentences::new(source),
        max_len,
        fragment: String::new(),
        words: None,
        word_buf: String::new(),
        done,
    }
}

/// Lazy iterator over the fragments of a plain-text source.
///
/// Fragments come out in source order; the iterator reads ahead only as far
/// as the next finished fragment.
#[derive(Debug)]
pub struct TextFragments<'a> {
    sentences: Sentences<'a>,
    max_len: usize,
    /// Running fragment of whole sentences, joined by single spaces
    fragment: String,
    /// Words remaining in an oversized sentence currently being drained
    words: Option<SplitWhitespace<'a>>,
    /// Words packed so far toward the next sub-fragment
    word_buf: String,
    done: bool,
}

impl TextFragments<'_> {
    /// Pack words from the oversized sentence being drained until a
    /// sub-fragment fills or the sentence runs out. A word's accounted size
    /// is its byte length plus one separator.
    fn next_word_fragment(&mut self) -> Option<String> {
        let words = self.words.as_mut()?;
        for word in words.by_ref() {
            if self.word_buf.is_empty() {
                self.word_buf.push_str(word);
            } else if self.word_buf.len() + word.len() + 2 > self.max_len {
                return Some(std::mem::replace(&mut self.word_buf, word.to_string()));
            } else {
                self.word_buf.push(' ');
                self.word_buf.push_str(word);
            }
        }
        // Sentence drained; whatever is packed goes out as the last piece
        self.words = None;
        if self.word_buf.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.word_buf))
        }
    }
}

impl Iterator for TextFragments<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        loop {
            if self.words.is_some() {
                if let Some(fragment) = self.next_word_fragment() {
                    trace!(bytes = fragment.len(), "flushed text fragment");
                    return Some(fragment);
                }
            }
            let Some(sentence) = self.sentences.next() else {
                self.done = true;
                if self.fragment.is_empty() {
                    return None;
                }
                return Some(std::mem::take(&mut self.fragment));
            };
            if sentence.len() > self.max_len {
                // Too big to keep whole: drain it word by word, emitting the
                // running fragment first so output stays in source order
                self.words = Some(sentence.split_whitespace());
                if !self.fragment.is_empty() {
                    return Some(std::mem::take(&mut self.fragment));
                }
            } else if self.fragment.is_empty() {
                self.fragment.push_str(sentence);
            } else if self.fragment.len() + 1 + sentence.len() > self.max_len {
                let full = std::mem::replace(&mut self.fragment, sentence.to_string());
                trace!(bytes = full.len(), "flushed text fragment");
                return Some(full);
            } else {
                self.fragment.push(' ');
                self.fragment.push_str(sentence);
            }
        }
    }
}
