use crate::SrcId;
use std::fmt;

/// A line/column position in an input file, both 1-based.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// The source region an AST node was read from.
///
/// Every node carries one of these for diagnostics. Locations are plain
/// values and are deliberately excluded from node equality: two nodes
/// that differ only in where they were written compare equal.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SrcLoc {
    src: SrcId,
    start: Position,
    end: Position,
}

impl SrcLoc {
    pub fn new(src: SrcId, start: Position, end: Position) -> Self {
        assert!(start <= end, "source region must not be inverted");
        Self { src, start, end }
    }

    /// Location for nodes synthesised by a pass rather than parsed.
    pub fn unknown() -> Self {
        Self {
            src: SrcId::empty(),
            start: Position::new(1, 1),
            end: Position::new(1, 1),
        }
    }

    pub fn src(&self) -> SrcId {
        self.src
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// The smallest region covering both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        assert_eq!(self.src, other.src, "location source ids must match");
        Self {
            src: self.src,
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for SrcLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}-{}]", self.src, self.start, self.end)
    }
}

impl fmt::Debug for SrcLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
