//! Navigation entry data.

use serde::Serialize;

/// A single navigation entry as written in the manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Display title shown in the generated menu.
    pub title: String,
    /// Link target, relative to the docs root. `None` for bare section
    /// labels that only group their children.
    pub target: Option<String>,
    /// 1-based line in the manifest source where this entry was written.
    pub line: usize,
}

impl NavEntry {
    /// True if this entry carries a link target.
    #[must_use]
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }
}
