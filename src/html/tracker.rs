/// One tag currently open in the source being scanned
#[derive(Debug, Clone)]
struct OpenTag {
    /// Raw opening markup exactly as it appeared, attributes included
    raw: String,
    /// Tag name, matched against closing tags
    name: String,
}

/// Tracks open tags and the fragment under construction during an HTML split.
///
/// Budget projections always include the closing markup for everything still
/// open, so a finished fragment is well nested on its own.
#[derive(Debug)]
pub struct FragmentTracker {
    /// Fragment budget in bytes
    max_len: usize,
    /// Tags currently open, outermost first
    open_tags: Vec<OpenTag>,
    /// Content accumulated for the current fragment; `len()` is the running
    /// byte count
    fragment: String,
}

impl FragmentTracker {
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len,
            open_tags: Vec::new(),
            fragment: String::new(),
        }
    }

    /// Markup reconstructing the current nesting: raw opening tags outermost
    /// first, and the matching closing tags innermost first.
    pub fn tag_hierarchy(&self) -> (String, String) {
        let opening = self
            .open_tags
            .iter()
            .map(|tag| tag.raw.as_str())
            .collect();
        let closing = self
            .open_tags
            .iter()
            .rev()
            .map(|tag| format!("</{}>", tag.name))
            .collect();
        (opening, closing)
    }

    /// Bytes the closing markup would add if the fragment ended now
    fn closing_len(&self) -> usize {
        self.open_tags.iter().map(|tag| tag.name.len() + 3).sum()
    }

    /// Whether appending `content` and then closing all open tags would push
    /// the fragment past its budget
    pub fn would_exceed(&self, content: &str) -> bool {
        self.fragment.len() + content.len() + self.closing_len() > self.max_len
    }

    /// Finish the current fragment: append closing tags for everything still
    /// open and hand the result out, leaving the buffer empty. An empty
    /// buffer yields an empty string.
    pub fn flush(&mut self) -> String {
        if self.fragment.is_empty() {
            return String::new();
        }
        let mut finished = std::mem::take(&mut self.fragment);
        for tag in self.open_tags.iter().rev() {
            finished.push_str("</");
            finished.push_str(&tag.name);
            finished.push('>');
        }
        finished
    }

    /// Begin a new fragment seeded with the raw opening markup of every tag
    /// still open
    pub fn start_fragment(&mut self) {
        self.fragment.clear();
        for tag in &self.open_tags {
            self.fragment.push_str(&tag.raw);
        }
    }

    /// Append text to the current fragment verbatim
    pub fn add_content(&mut self, content: &str) {
        self.fragment.push_str(content);
    }

    /// Record an opening tag. Must not be called for self-closing tags;
    /// those leave the hierarchy untouched.
    pub fn on_opening_tag(&mut self, raw: &str, name: &str) {
        self.open_tags.push(OpenTag {
            raw: raw.to_string(),
            name: name.to_string(),
        });
    }

    /// Record a closing tag. Pops only when the name matches the innermost
    /// open tag exactly; any other closing tag is ignored.
    pub fn on_closing_tag(&mut self, name: &str) {
        if self.open_tags.last().is_some_and(|top| top.name == name) {
            self.open_tags.pop();
        }
    }

    /// True while nothing has been accumulated for the current fragment
    pub fn is_empty(&self) -> bool {
        self.fragment.is_empty()
    }

    /// Number of tags currently open
    pub fn depth(&self) -> usize {
        self.open_tags.len()
    }
}
