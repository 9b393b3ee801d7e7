//! Manifest validation against a documentation source tree.
//!
//! [`check_manifest`] combines a parsed [`Manifest`](navlint_manifest::Manifest)
//! with a scanned [`DocTree`](navlint_scan::DocTree) and produces
//! [`Diagnostic`]s: hard errors (broken references, duplicate siblings,
//! targets escaping the docs root) and warnings (unlisted pages, titles
//! disagreeing with the document's H1). Syntax problems never reach this
//! layer; they are reported by the parser with their line numbers.

mod checks;
mod diagnostic;

pub use checks::{CheckOptions, check_manifest};
pub use diagnostic::{CheckKind, Diagnostic, Severity};
