use memchr::memchr;

/// Detected content category, used to route a split and to name output files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Text,
}

impl ContentKind {
    /// Classify a source string by probing it for HTML elements
    pub fn of(source: &str) -> Self {
        if contains_html_element(source) {
            ContentKind::Html
        } else {
            ContentKind::Text
        }
    }

    /// Short label used in output file names
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Html => "html",
            ContentKind::Text => "text",
        }
    }

    /// File extension for fragments of this kind
    pub fn extension(&self) -> &'static str {
        match self {
            ContentKind::Html => "html",
            ContentKind::Text => "txt",
        }
    }
}

/// Check whether the source contains at least one recognizable HTML element.
///
/// Deliberately permissive: a `<`, an optional `/`, an ASCII-alphabetic name
/// start, and a `>` somewhere after it count as an element. Comments,
/// doctypes, and stray `<` followed by non-letters do not. This never parses
/// the document; it only decides which splitter runs.
pub fn contains_html_element(source: &str) -> bool {
    let bytes = source.as_bytes();
    let mut pos = 0;
    while let Some(rel) = memchr(b'<', &bytes[pos..]) {
        let open = pos + rel;
        let mut name = open + 1;
        if bytes.get(name) == Some(&b'/') {
            name += 1;
        }
        if bytes.get(name).is_some_and(|b| b.is_ascii_alphabetic())
            && memchr(b'>', &bytes[name..]).is_some()
        {
            return true;
        }
        pos = open + 1;
    }
    false
}
