mod sentences;
mod splitter;


pub use sentences::Sentences;
pub use splitter::{TextFragments, split_text_content};
