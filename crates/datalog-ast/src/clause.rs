//! Clause nodes
//!
//! A clause is a head atom and a conjunction of body literals:
//! `reachable(X, Z) :- reachable(X, Y), edge(Y, Z).`
//! Body order is semantically irrelevant to evaluation but preserved
//! exactly as authored.

use crate::node::{AstNode, NodeMapper, NodeRef};
use crate::{Atom, Literal, SrcLoc, SymbolTable};
use std::fmt;

/// A deduction rule; a fact is a clause with an empty body.
#[derive(Debug, Clone)]
pub struct Clause {
    pub head: Atom,
    pub body: Vec<Literal>,
    pub loc: SrcLoc,
}

impl Clause {
    pub fn new(head: Atom, body: Vec<Literal>, loc: SrcLoc) -> Self {
        Self { head, body, loc }
    }

    pub fn fact(head: Atom, loc: SrcLoc) -> Self {
        Self::new(head, Vec::new(), loc)
    }

    pub fn is_fact(&self) -> bool {
        self.body.is_empty()
    }

    /// Apply `mapper` to the head slot and then each body slot.
    pub fn rewrite<M: NodeMapper>(self, mapper: &mut M) -> Self {
        Self {
            head: mapper.map_atom(self.head),
            body: self
                .body
                .into_iter()
                .map(|l| mapper.map_literal(l))
                .collect(),
            loc: self.loc,
        }
    }
}

impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head && self.body == other.body
    }
}

impl Eq for Clause {}

impl AstNode for Clause {
    fn loc(&self) -> SrcLoc {
        self.loc
    }

    fn set_loc(&mut self, loc: SrcLoc) {
        self.loc = loc;
    }

    fn children(&self) -> Vec<NodeRef<'_>> {
        let mut children = vec![NodeRef::Atom(&self.head)];
        children.extend(self.body.iter().map(NodeRef::Literal));
        children
    }

    fn fmt_with(&self, symbols: &SymbolTable, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.head.fmt_with(symbols, f)?;
        if !self.body.is_empty() {
            write!(f, " :- ")?;
            for (i, lit) in self.body.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                lit.fmt_with(symbols, f)?;
            }
        }
        write!(f, ".")
    }
}
