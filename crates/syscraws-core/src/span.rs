//! Source location tracking for diagnostics.
//!
//! Every AST node carries a [`Span`]. Translation never inspects it beyond
//! copying it into errors, so it stays a plain value type.

use std::fmt;

/// A line/column position in a source file (both 1-indexed).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed, byte-based).
    pub col: u32,
}

impl Position {
    #[inline]
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// A half-open range of source text, `start..end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// First position covered by the span.
    pub start: Position,
    /// Position just past the end of the span.
    pub end: Position,
}

impl Span {
    /// Create a span from explicit start and end positions.
    #[inline]
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span covering `len` columns on a single line.
    #[inline]
    pub fn on_line(line: u32, col: u32, len: u32) -> Self {
        Self {
            start: Position::new(line, col),
            end: Position::new(line, col + len),
        }
    }

    /// Create a zero-length span at a position.
    #[inline]
    pub fn point(line: u32, col: u32) -> Self {
        let pos = Position::new(line, col);
        Self { start: pos, end: pos }
    }

    /// Whether this span covers no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{}", self.start)
        } else if self.start.line == self.end.line {
            write!(f, "{}-{}", self.start, self.end.col)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
