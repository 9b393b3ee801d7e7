//! Line-oriented outline parser.
//!
//! The manifest grammar is deliberately small: every non-blank line is a
//! `-` or `*` bullet whose payload is an inline link `[Title](path)` or a
//! bare title. Leading whitespace expresses nesting. The parser tracks a
//! stack of open indent columns so that every dedent must return to a column
//! that is actually open; anything else is reported with its line number
//! rather than silently reinterpreted.

use crate::entry::NavEntry;
use crate::manifest::{Manifest, ManifestBuilder};

/// Tab stops for indentation, in columns.
const TAB_WIDTH: usize = 4;

/// Manifest syntax error.
///
/// All variants carry the 1-based source line of the offending entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A non-blank line that is not a bullet.
    #[error("line {line}: expected a '-' or '*' bullet entry")]
    MalformedLine {
        /// Offending line.
        line: usize,
    },
    /// A link payload that is not `[Title](path)`.
    #[error("line {line}: malformed link, expected [Title](path)")]
    MalformedLink {
        /// Offending line.
        line: usize,
    },
    /// A bullet with no title text.
    #[error("line {line}: entry has no title")]
    EmptyTitle {
        /// Offending line.
        line: usize,
    },
    /// A dedent to an indent column that is not open.
    #[error("line {line}: indent column {column} does not match any open level")]
    InconsistentIndent {
        /// Offending line.
        line: usize,
        /// Computed indent column of the bullet.
        column: usize,
    },
    /// A bare label with no link and no children; such an entry would
    /// render a menu item that leads nowhere.
    #[error("line {line}: \"{title}\" has no link and no children")]
    EmptyGroup {
        /// Offending line.
        line: usize,
        /// Entry title.
        title: String,
    },
}

/// Parse manifest outline text into a [`Manifest`].
pub(crate) fn parse(text: &str) -> Result<Manifest, ParseError> {
    let mut builder = ManifestBuilder::new();

    // Open nesting levels: (indent column, parent entry of that level).
    let mut levels: Vec<(usize, Option<usize>)> = Vec::new();
    let mut last_idx: Option<usize> = None;

    for (lineno, raw) in text.lines().enumerate() {
        let line = lineno + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let (indent, rest) = split_indent(raw);
        let (title, target) = parse_bullet(rest, line)?;

        // Close levels deeper than this bullet.
        let mut closed_levels = false;
        while levels.last().is_some_and(|&(col, _)| col > indent) {
            levels.pop();
            closed_levels = true;
        }

        let parent = match levels.last().copied() {
            // Sibling of the innermost open level.
            Some((col, parent)) if col == indent => parent,
            // Strictly deeper than the previous bullet: child of it. The
            // stack top is always the previous bullet's column, so this
            // only holds when nothing was just closed.
            Some(_) if !closed_levels => {
                let parent = last_idx;
                levels.push((indent, parent));
                parent
            }
            // Dedented between open columns.
            Some(_) => {
                return Err(ParseError::InconsistentIndent {
                    line,
                    column: indent,
                });
            }
            None => {
                if last_idx.is_some() {
                    // Dedented below the base indent.
                    return Err(ParseError::InconsistentIndent {
                        line,
                        column: indent,
                    });
                }
                // First bullet establishes the base indent.
                levels.push((indent, None));
                None
            }
        };

        let idx = builder.add_entry(
            NavEntry {
                title,
                target,
                line,
            },
            parent,
        );
        last_idx = Some(idx);
    }

    // A bare label without children labels nothing.
    for idx in builder.entry_indices() {
        let entry = builder.entry(idx);
        if entry.target.is_none() && !builder.has_children(idx) {
            return Err(ParseError::EmptyGroup {
                line: entry.line,
                title: entry.title.clone(),
            });
        }
    }

    Ok(builder.build())
}

/// Split leading whitespace off a line, returning (indent column, payload).
///
/// Tabs advance to the next multiple of [`TAB_WIDTH`].
fn split_indent(line: &str) -> (usize, &str) {
    let mut column = 0;
    for (byte_pos, ch) in line.char_indices() {
        match ch {
            ' ' => column += 1,
            '\t' => column = (column / TAB_WIDTH + 1) * TAB_WIDTH,
            _ => return (column, &line[byte_pos..]),
        }
    }
    (column, "")
}

/// Parse a bullet payload into (title, optional target).
fn parse_bullet(rest: &str, line: usize) -> Result<(String, Option<String>), ParseError> {
    let payload = match rest.split_at_checked(1) {
        Some(("-" | "*", tail)) if tail.is_empty() || tail.starts_with(' ') => tail.trim(),
        _ => return Err(ParseError::MalformedLine { line }),
    };

    if payload.is_empty() {
        return Err(ParseError::EmptyTitle { line });
    }

    if let Some(link) = payload.strip_prefix('[') {
        // Inline link: first "](" delimits title and target.
        let Some((title, after)) = link.split_once("](") else {
            return Err(ParseError::MalformedLink { line });
        };
        let Some((target, trailing)) = after.split_once(')') else {
            return Err(ParseError::MalformedLink { line });
        };
        if !trailing.trim().is_empty() || target.trim().is_empty() {
            return Err(ParseError::MalformedLink { line });
        }
        let title = title.trim();
        if title.is_empty() {
            return Err(ParseError::EmptyTitle { line });
        }
        return Ok((title.to_owned(), Some(target.trim().to_owned())));
    }

    // Bare title. A stray "](" means the opening bracket went missing.
    if payload.contains("](") {
        return Err(ParseError::MalformedLink { line });
    }

    Ok((payload.to_owned(), None))
}
