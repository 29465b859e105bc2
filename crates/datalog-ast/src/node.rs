//! The uniform node protocol
//!
//! Every node in the IR tree supports the same five operations:
//!
//! - **clone**: `Clone` gives a deep, independently owned copy (every
//!   subtree field is an owned `Box` or `Vec`, so no aliasing can arise);
//! - **equal**: `PartialEq` compares variant and semantic fields and
//!   ignores source locations;
//! - **children**: [`AstNode::children`] enumerates borrowed direct
//!   subtrees in declaration order;
//! - **print**: [`AstNode::fmt_with`] emits parse-compatible surface
//!   syntax, resolving string constants through the symbol table;
//! - **rewrite**: an inherent `rewrite(self, &mut mapper)` per node
//!   family replaces each direct child slot with the mapper's output.
//!
//! # Rewrite protocol
//!
//! A [`NodeMapper`] is handed each direct child by value, exactly once
//! per slot, in declaration order, and returns the owned replacement.
//! Nodes only visit their immediate slots; a mapper that wants to
//! transform a whole tree recurses itself:
//!
//! ```ignore
//! impl NodeMapper for RenameVariables {
//!     fn map_argument(&mut self, arg: Argument) -> Argument {
//!         let arg = self.rename(arg);       // pre-order transform
//!         arg.rewrite(self)                 // then descend
//!     }
//! }
//! ```
//!
//! Because `rewrite` consumes the node, a panicking mapper unwinds with
//! the whole subtree: later passes can never observe a half-rewritten
//! tree.

use crate::{Argument, Atom, Clause, Literal, SrcLoc, SymbolTable};
use std::fmt;

/// Borrowed reference to a direct child node, for generic visitors.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Argument(&'a Argument),
    Atom(&'a Atom),
    Literal(&'a Literal),
    Clause(&'a Clause),
}

/// Behaviour shared by every node in the IR tree.
pub trait AstNode {
    /// The source region this node was read from.
    fn loc(&self) -> SrcLoc;

    fn set_loc(&mut self, loc: SrcLoc);

    /// Direct subtrees in declaration order. Locations and other
    /// non-node fields are not enumerated.
    fn children(&self) -> Vec<NodeRef<'_>>;

    /// Print this node in parse-compatible surface syntax.
    fn fmt_with(&self, symbols: &SymbolTable, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Adapter implementing [`fmt::Display`] against a symbol table.
    fn display<'a>(&'a self, symbols: &'a SymbolTable) -> NodeDisplay<'a, Self>
    where
        Self: Sized,
    {
        NodeDisplay {
            node: self,
            symbols,
        }
    }
}

/// [`fmt::Display`] adapter returned by [`AstNode::display`].
pub struct NodeDisplay<'a, T> {
    node: &'a T,
    symbols: &'a SymbolTable,
}

impl<T: AstNode> fmt::Display for NodeDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node.fmt_with(self.symbols, f)
    }
}

/// A tree-rewriting callback, applied per child slot by `rewrite`.
///
/// Each hook takes ownership of the old child and returns the
/// replacement; the defaults leave the child untouched. Mappers need
/// not be idempotent; composition is by applying mappers one after the
/// other over the tree root.
pub trait NodeMapper {
    fn map_argument(&mut self, arg: Argument) -> Argument {
        arg
    }

    fn map_atom(&mut self, atom: Atom) -> Atom {
        atom
    }

    fn map_literal(&mut self, lit: Literal) -> Literal {
        lit
    }
}

/// The identity mapper; `rewrite` with it is a structural no-op.
#[derive(Debug, Default)]
pub struct IdentityMapper;

impl NodeMapper for IdentityMapper {}
