// Public API exports
pub mod classify;
pub mod html;
pub mod split;
pub mod text;

// Re-export main types for convenience
pub use classify::{ContentKind, contains_html_element};

pub use split::{
    DEFAULT_MAX_FRAGMENT_BYTES, Fragments, SplitError, split_content, split_content_bytes,
    split_content_value,
};

pub use html::{FragmentTracker, HtmlFragments, split_html_content};

pub use text::{Sentences, TextFragments, split_text_content};
