// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source positions and line-offset lookups.

use serde::{Deserialize, Serialize};

/// A 1-based byte offset into the source text.
///
/// `Pos::NONE` (offset zero) marks an absent position, such as the missing
/// `;` of a statement that ended at a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Pos(pub usize);

impl Pos {
    pub const NONE: Pos = Pos(0);

    /// Build a position from a 0-based byte cursor.
    #[inline]
    pub(crate) fn from_offset(npos: usize) -> Self {
        Pos(npos + 1)
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// The 0-based byte offset, for slicing into the source.
    ///
    /// Must not be called on `Pos::NONE`.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        debug_assert!(self.0 > 0, "offset of Pos::NONE");
        self.0 - 1
    }
}

/// A resolved position: byte offset plus 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// 1-based byte offset, same value as the [`Pos`] it was derived from.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in bytes from the line start.
    pub column: usize,
}

/// Resolve a position against a line table of 0-based line-start offsets.
///
/// The table always holds at least one entry (offset 0) and is strictly
/// increasing; a newline at offset `i` puts `i + 1` in the table.
pub(crate) fn lookup(lines: &[usize], pos: Pos) -> Position {
    let off = pos.offset();
    let line = match lines.binary_search(&off) {
        Ok(i) => i + 1,
        Err(i) => i,
    };
    Position { offset: pos.0, line, column: off - lines[line - 1] + 1 }
}

#[cfg(test)]
#[path = "pos_tests.rs"]
mod tests;
