mod splitter;
mod tracker;


pub use splitter::{HtmlFragments, split_html_content};
pub use tracker::FragmentTracker;
