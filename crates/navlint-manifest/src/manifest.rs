//! Parsed manifest tree.
//!
//! Entries are stored in a flat `Vec<NavEntry>` with parent/children
//! relationships tracked by indices. This keeps document order trivially
//! available (the vec order is the file order) while still providing cheap
//! tree traversal for rendering and validation.

use serde::Serialize;

use crate::entry::NavEntry;
use crate::parser;
use crate::parser::ParseError;

/// Spaces per nesting level in canonical rendering.
const RENDER_INDENT: usize = 4;

/// Nested navigation item for serialized output.
///
/// The flat index representation of [`Manifest`] is an implementation
/// detail; machine consumers get the natural nested shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Link target path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// A parsed navigation manifest.
///
/// Holds the ordered entry list plus the nesting structure. The order of
/// [`entries`](Self::entries), of each children list, and of every traversal
/// matches the order entries were written in the source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<NavEntry>,
    children: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
    roots: Vec<usize>,
}

impl Manifest {
    /// Parse manifest outline text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] for malformed bullets, broken link syntax,
    /// inconsistent indentation, or linkless entries without children.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parser::parse(text)
    }

    /// All entries in document order.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Entry by index.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&NavEntry> {
        self.entries.get(idx)
    }

    /// Indices of top-level entries, in document order.
    #[must_use]
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Child indices of an entry, in document order.
    #[must_use]
    pub fn children(&self, idx: usize) -> &[usize] {
        self.children.get(idx).map_or(&[], Vec::as_slice)
    }

    /// Parent index of an entry, `None` for top-level entries.
    #[must_use]
    pub fn parent(&self, idx: usize) -> Option<usize> {
        self.parents.get(idx).copied().flatten()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the manifest has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Depth-first traversal in document order.
    ///
    /// Yields `(depth, index, entry)` with `depth` 0 for top-level entries.
    pub fn walk(&self) -> impl Iterator<Item = (usize, usize, &NavEntry)> {
        let mut stack: Vec<(usize, usize)> = self
            .roots
            .iter()
            .rev()
            .map(|&idx| (0, idx))
            .collect();

        std::iter::from_fn(move || {
            let (depth, idx) = stack.pop()?;
            for &child in self.children[idx].iter().rev() {
                stack.push((depth + 1, child));
            }
            Some((depth, idx, &self.entries[idx]))
        })
    }

    /// Render the manifest in canonical outline form.
    ///
    /// `-` bullets, four spaces per nesting level, entries in document
    /// order. Parsing the rendered text yields an equal manifest.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (depth, _, entry) in self.walk() {
            for _ in 0..depth * RENDER_INDENT {
                out.push(' ');
            }
            out.push_str("- ");
            match &entry.target {
                Some(target) => {
                    out.push('[');
                    out.push_str(&entry.title);
                    out.push_str("](");
                    out.push_str(target);
                    out.push(')');
                }
                None => out.push_str(&entry.title),
            }
            out.push('\n');
        }
        out
    }

    /// Convert to nested [`NavItem`]s for serialization.
    #[must_use]
    pub fn nav_items(&self) -> Vec<NavItem> {
        self.roots.iter().map(|&idx| self.build_item(idx)).collect()
    }

    fn build_item(&self, idx: usize) -> NavItem {
        let entry = &self.entries[idx];
        NavItem {
            title: entry.title.clone(),
            target: entry.target.clone(),
            children: self.children[idx]
                .iter()
                .map(|&child| self.build_item(child))
                .collect(),
        }
    }
}

/// Builder used by the parser to assemble a [`Manifest`].
pub(crate) struct ManifestBuilder {
    entries: Vec<NavEntry>,
    children: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
    roots: Vec<usize>,
}

impl ManifestBuilder {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            children: Vec::new(),
            parents: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Append an entry, linking it under `parent_idx` (or as a root).
    ///
    /// Returns the index of the added entry.
    pub(crate) fn add_entry(&mut self, entry: NavEntry, parent_idx: Option<usize>) -> usize {
        let idx = self.entries.len();
        self.entries.push(entry);
        self.children.push(Vec::new());
        self.parents.push(parent_idx);

        if let Some(parent) = parent_idx {
            self.children[parent].push(idx);
        } else {
            self.roots.push(idx);
        }

        idx
    }

    pub(crate) fn entry(&self, idx: usize) -> &NavEntry {
        &self.entries[idx]
    }

    pub(crate) fn has_children(&self, idx: usize) -> bool {
        !self.children[idx].is_empty()
    }

    pub(crate) fn entry_indices(&self) -> std::ops::Range<usize> {
        0..self.entries.len()
    }

    pub(crate) fn build(self) -> Manifest {
        Manifest {
            entries: self.entries,
            children: self.children,
            parents: self.parents,
            roots: self.roots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Manifest is shared read-only between checks
    static_assertions::assert_impl_all!(Manifest: Send, Sync);

    fn entry(title: &str, target: Option<&str>, line: usize) -> NavEntry {
        NavEntry {
            title: title.to_owned(),
            target: target.map(str::to_owned),
            line,
        }
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = ManifestBuilder::new().build();

        assert!(manifest.is_empty());
        assert_eq!(manifest.len(), 0);
        assert!(manifest.roots().is_empty());
        assert_eq!(manifest.render(), "");
    }

    #[test]
    fn test_add_entry_links_parent_and_children() {
        let mut builder = ManifestBuilder::new();
        let parent = builder.add_entry(entry("Guides", Some("guides/index.md"), 1), None);
        let child = builder.add_entry(entry("Setup", Some("guides/setup.md"), 2), Some(parent));
        let manifest = builder.build();

        assert_eq!(manifest.roots(), &[parent]);
        assert_eq!(manifest.children(parent), &[child]);
        assert_eq!(manifest.parent(child), Some(parent));
        assert_eq!(manifest.parent(parent), None);
    }

    #[test]
    fn test_walk_is_document_order() {
        let mut builder = ManifestBuilder::new();
        let a = builder.add_entry(entry("A", Some("a.md"), 1), None);
        builder.add_entry(entry("A1", Some("a/1.md"), 2), Some(a));
        builder.add_entry(entry("A2", Some("a/2.md"), 3), Some(a));
        builder.add_entry(entry("B", Some("b.md"), 4), None);
        let manifest = builder.build();

        let visited: Vec<_> = manifest
            .walk()
            .map(|(depth, _, e)| (depth, e.title.as_str()))
            .collect();

        assert_eq!(
            visited,
            vec![(0, "A"), (1, "A1"), (1, "A2"), (0, "B")]
        );
    }

    #[test]
    fn test_render_nested() {
        let mut builder = ManifestBuilder::new();
        let a = builder.add_entry(entry("A", Some("a.md"), 1), None);
        builder.add_entry(entry("A1", Some("a/1.md"), 2), Some(a));
        builder.add_entry(entry("B", None, 3), None);
        let manifest = builder.build();

        assert_eq!(manifest.render(), "- [A](a.md)\n    - [A1](a/1.md)\n- B\n");
    }

    #[test]
    fn test_nav_items_nested_shape() {
        let mut builder = ManifestBuilder::new();
        let a = builder.add_entry(entry("A", Some("a.md"), 1), None);
        builder.add_entry(entry("A1", Some("a/1.md"), 2), Some(a));
        let manifest = builder.build();

        let items = manifest.nav_items();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "A");
        assert_eq!(items[0].children.len(), 1);
        assert_eq!(items[0].children[0].title, "A1");
    }

    #[test]
    fn test_nav_item_serialization_skips_empty_fields() {
        let item = NavItem {
            title: "Home".to_owned(),
            target: Some("index.md".to_owned()),
            children: Vec::new(),
        };

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["title"], "Home");
        assert_eq!(json["target"], "index.md");
        assert!(json.get("children").is_none()); // Skipped when empty
    }

    #[test]
    fn test_nav_item_serialization_skips_none_target() {
        let item = NavItem {
            title: "Guides".to_owned(),
            target: None,
            children: vec![NavItem {
                title: "Setup".to_owned(),
                target: Some("setup.md".to_owned()),
                children: Vec::new(),
            }],
        };

        let json = serde_json::to_value(&item).unwrap();

        assert!(json.get("target").is_none()); // Skipped when None
        assert_eq!(json["children"][0]["target"], "setup.md");
    }
}
