/// Iterator over the sentences of a plain-text source.
///
/// A sentence ends where boundary punctuation (`.`, `!`, `?`) is immediately
/// followed by whitespace; the whitespace run between sentences is consumed.
/// Every yielded sentence is trimmed and non-empty. Text with no boundary at
/// all comes back as one sentence.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    rest: &'a str,
}

impl<'a> Sentences<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { rest: source }
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while !self.rest.is_empty() {
            let (piece, rest) = match boundary_at(self.rest) {
                Some(end) => (&self.rest[..end], self.rest[end..].trim_start()),
                None => (self.rest, ""),
            };
            self.rest = rest;
            let piece = piece.trim();
            if !piece.is_empty() {
                return Some(piece);
            }
        }
        None
    }
}

/// Byte offset just past the first sentence-ending punctuation, or None when
/// no boundary remains. Punctuation at the very end of the text is not a
/// boundary; it stays with the final sentence.
fn boundary_at(text: &str) -> Option<usize> {
    for (i, byte) in text.bytes().enumerate() {
        if matches!(byte, b'.' | b'!' | b'?')
            && text[i + 1..].chars().next().is_some_and(char::is_whitespace)
        {
            return Some(i + 1);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(source: &str) -> Vec<&str> {
        Sentences::new(source).collect()
    }

    #[test]
    fn test_splits_on_terminal_punctuation() {
        assert_eq!(
            sentences("First one. Second one! Third one? Fourth"),
            vec!["First one.", "Second one!", "Third one?", "Fourth"]
        );
    }

    #[test]
    fn test_no_boundary_yields_whole_text() {
        assert_eq!(sentences("no punctuation at all"), vec!["no punctuation at all"]);
    }

    #[test]
    fn test_period_without_space_is_not_a_boundary() {
        assert_eq!(sentences("version 2.5 shipped. Done."), vec!["version 2.5 shipped.", "Done."]);
    }

    #[test]
    fn test_whitespace_runs_are_consumed() {
        assert_eq!(sentences("One.\n\n   Two."), vec!["One.", "Two."]);
    }

    #[test]
    fn test_pieces_are_trimmed_and_empties_dropped() {
        assert_eq!(sentences("   Padded.   "), vec!["Padded."]);
        assert!(sentences("").is_empty());
        assert!(sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_multibyte_text_is_kept_intact() {
        assert_eq!(
            sentences("Unicode 🦀 works. Éléphant too."),
            vec!["Unicode 🦀 works.", "Éléphant too."]
        );
    }
}
