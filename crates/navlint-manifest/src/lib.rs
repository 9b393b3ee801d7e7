//! Navigation manifest parsing and rendering.
//!
//! A navigation manifest is a nested bulleted outline that tells a
//! documentation-site generator how to render its sidebar. Each bullet is
//! either a leaf (`[Title](path)`) or a section: a title, with or without a
//! link, followed by a strictly deeper-indented sub-list.
//!
//! ```text
//! - [Home](index.md)
//! - [How-to guides](how-to-guides/index.md)
//!     - [How to get citations](how-to-guides/get-citations.md)
//! ```
//!
//! [`Manifest::parse`] turns outline text into a [`Manifest`];
//! [`Manifest::render`] produces the canonical text form. Entry order is
//! semantically meaningful (it is the menu order) and is preserved exactly
//! through a parse/render round-trip.

mod entry;
mod manifest;
mod parser;

pub use entry::NavEntry;
pub use manifest::{Manifest, NavItem};
pub use parser::ParseError;
