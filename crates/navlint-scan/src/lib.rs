//! Documentation source tree discovery.
//!
//! Walks a docs directory and returns the set of source files a navigation
//! manifest may reference, with titles extracted from the first H1 heading
//! of markdown files. Hidden (`.`-prefixed) and partial (`_`-prefixed)
//! entries are skipped, matching the conventions of documentation-site
//! generators.

mod title;
mod tree;

pub use title::extract_title;
pub use tree::{DocFile, DocTree, ScanError};
