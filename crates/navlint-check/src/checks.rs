//! The individual manifest checks.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::path::{Component, Path, PathBuf};

use navlint_manifest::{Manifest, NavEntry};
use navlint_scan::DocTree;

use crate::diagnostic::{CheckKind, Diagnostic, Severity};

/// Options controlling which soft checks run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Warn about docs files the manifest never references.
    pub orphans: bool,
    /// Warn when a manifest title differs from the document's H1.
    pub titles: bool,
    /// Manifest file location relative to the docs root, excluded from the
    /// orphan check (the manifest does not list itself).
    pub manifest_path: Option<PathBuf>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            orphans: true,
            titles: true,
            manifest_path: None,
        }
    }
}

/// Validate a manifest against a scanned docs tree.
///
/// Diagnostics are returned sorted by manifest line; findings without a
/// line (orphans) come last, sorted by path.
#[must_use]
pub fn check_manifest(
    manifest: &Manifest,
    tree: &DocTree,
    options: &CheckOptions,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut referenced: HashSet<PathBuf> = HashSet::new();

    for (_, _, entry) in manifest.walk() {
        let Some(target) = &entry.target else {
            continue;
        };
        if is_external(target) || is_self_reference(target) {
            continue;
        }

        let Some(path) = normalize_target(target) else {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                check: CheckKind::TargetOutsideTree,
                line: Some(entry.line),
                message: format!("target \"{target}\" escapes the docs directory"),
            });
            continue;
        };

        if tree.contains(&path) {
            if options.titles {
                check_title(entry, &path, tree, &mut diagnostics);
            }
        } else {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                check: CheckKind::MissingTarget,
                line: Some(entry.line),
                message: format!("target \"{target}\" does not exist"),
            });
        }

        referenced.insert(path);
    }

    check_duplicate_siblings(manifest, &mut diagnostics);

    if options.orphans {
        check_orphans(tree, &referenced, options.manifest_path.as_deref(), &mut diagnostics);
    }

    diagnostics.sort_by(|a, b| {
        let a_key = (a.line.unwrap_or(usize::MAX), a.message.as_str());
        let b_key = (b.line.unwrap_or(usize::MAX), b.message.as_str());
        a_key.cmp(&b_key)
    });
    diagnostics
}

/// Compare a manifest title against the document's H1 heading.
fn check_title(
    entry: &NavEntry,
    path: &Path,
    tree: &DocTree,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(heading) = tree.title_of(path) else {
        return;
    };
    if heading != entry.title {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            check: CheckKind::TitleMismatch,
            line: Some(entry.line),
            message: format!(
                "title \"{}\" does not match document heading \"{heading}\" ({})",
                entry.title,
                path.display()
            ),
        });
    }
}

/// Flag siblings at the same nesting level referencing the identical path.
fn check_duplicate_siblings(manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
    let sibling_groups =
        std::iter::once(manifest.roots()).chain((0..manifest.len()).map(|idx| manifest.children(idx)));

    for group in sibling_groups {
        let mut seen: HashMap<PathBuf, usize> = HashMap::new();
        for &idx in group {
            let Some(entry) = manifest.get(idx) else {
                continue;
            };
            let Some(target) = &entry.target else {
                continue;
            };
            if is_external(target) || is_self_reference(target) {
                continue;
            }
            let Some(path) = normalize_target(target) else {
                continue;
            };

            match seen.entry(path) {
                Entry::Occupied(slot) => diagnostics.push(Diagnostic {
                    severity: Severity::Error,
                    check: CheckKind::DuplicateSibling,
                    line: Some(entry.line),
                    message: format!(
                        "duplicate sibling target \"{}\" (first listed on line {})",
                        slot.key().display(),
                        slot.get()
                    ),
                }),
                Entry::Vacant(slot) => {
                    slot.insert(entry.line);
                }
            }
        }
    }
}

/// Flag markdown files the manifest never references.
fn check_orphans(
    tree: &DocTree,
    referenced: &HashSet<PathBuf>,
    manifest_path: Option<&Path>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for file in tree.files() {
        if file.rel_path.extension().is_none_or(|e| e != "md") {
            continue;
        }
        if manifest_path == Some(file.rel_path.as_path()) {
            continue;
        }
        if !referenced.contains(&file.rel_path) {
            diagnostics.push(Diagnostic {
                severity: Severity::Warning,
                check: CheckKind::Orphan,
                line: None,
                message: format!(
                    "\"{}\" is not referenced by the manifest",
                    file.rel_path.display()
                ),
            });
        }
    }
}

/// True for targets pointing outside the docs tree by design (web links).
fn is_external(target: &str) -> bool {
    target.contains("://") || target.starts_with("mailto:")
}

/// True for fragment-only targets, which link within the current page.
fn is_self_reference(target: &str) -> bool {
    target.starts_with('#')
}

/// Normalize a relative target, resolving `.` and `..` components.
///
/// Returns `None` for absolute targets and targets that climb above the
/// docs root. A trailing `#fragment` is stripped before resolution.
fn normalize_target(target: &str) -> Option<PathBuf> {
    let path_part = target.split('#').next().unwrap_or(target);

    let mut normalized = PathBuf::new();
    let mut depth = 0usize;
    for component in Path::new(path_part).components() {
        match component {
            Component::CurDir => {}
            Component::Normal(part) => {
                normalized.push(part);
                depth += 1;
            }
            Component::ParentDir => {
                if depth == 0 {
                    return None;
                }
                normalized.pop();
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(normalized)
}
