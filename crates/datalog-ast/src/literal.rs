//! Literal nodes
//!
//! Atoms, negated atoms, binary constraints, and boolean constraints:
//! the conjuncts a clause body is made of.

use crate::argument::fmt_args;
use crate::node::{AstNode, NodeMapper, NodeRef};
use crate::{Argument, QualifiedName, SrcLoc, SymbolTable};
use std::fmt;

/// A predicate applied to arguments: `edge(X, Y)`.
#[derive(Debug, Clone)]
pub struct Atom {
    pub name: QualifiedName,
    pub args: Vec<Argument>,
    pub loc: SrcLoc,
}

impl Atom {
    pub fn new(name: impl Into<QualifiedName>, args: Vec<Argument>, loc: SrcLoc) -> Self {
        Self {
            name: name.into(),
            args,
            loc,
        }
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Apply `mapper` to each argument slot, in order.
    pub fn rewrite<M: NodeMapper>(self, mapper: &mut M) -> Self {
        Self {
            name: self.name,
            args: self
                .args
                .into_iter()
                .map(|a| mapper.map_argument(a))
                .collect(),
            loc: self.loc,
        }
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.args == other.args
    }
}

impl Eq for Atom {}

impl AstNode for Atom {
    fn loc(&self) -> SrcLoc {
        self.loc
    }

    fn set_loc(&mut self, loc: SrcLoc) {
        self.loc = loc;
    }

    fn children(&self) -> Vec<NodeRef<'_>> {
        self.args.iter().map(NodeRef::Argument).collect()
    }

    fn fmt_with(&self, symbols: &SymbolTable, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        fmt_args(&self.args, symbols, f)?;
        write!(f, ")")
    }
}

/// Comparison operators for binary constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl ComparisonOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Equal => "=",
            ComparisonOp::NotEqual => "!=",
            ComparisonOp::LessThan => "<",
            ComparisonOp::LessOrEqual => "<=",
            ComparisonOp::GreaterThan => ">",
            ComparisonOp::GreaterOrEqual => ">=",
        }
    }

    /// The operator with operands swapped: `a op b` iff `b converse(op) a`.
    pub fn converse(self) -> Self {
        match self {
            ComparisonOp::Equal => ComparisonOp::Equal,
            ComparisonOp::NotEqual => ComparisonOp::NotEqual,
            ComparisonOp::LessThan => ComparisonOp::GreaterThan,
            ComparisonOp::LessOrEqual => ComparisonOp::GreaterOrEqual,
            ComparisonOp::GreaterThan => ComparisonOp::LessThan,
            ComparisonOp::GreaterOrEqual => ComparisonOp::LessOrEqual,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A body conjunct.
#[derive(Debug, Clone)]
pub enum Literal {
    /// Positive atom: `edge(X, Y)`
    Atom(Atom),
    /// Negated atom: `!edge(X, Y)`
    Negation { atom: Atom, loc: SrcLoc },
    /// Comparison between two arguments: `X < Y`
    BinaryConstraint {
        op: ComparisonOp,
        lhs: Box<Argument>,
        rhs: Box<Argument>,
        loc: SrcLoc,
    },
    /// Constant truth value: `true` / `false`
    BooleanConstraint { value: bool, loc: SrcLoc },
}

impl Literal {
    /// The underlying atom of a positive or negated literal.
    pub fn atom(&self) -> Option<&Atom> {
        match self {
            Literal::Atom(atom) | Literal::Negation { atom, .. } => Some(atom),
            _ => None,
        }
    }

    pub fn is_negation(&self) -> bool {
        matches!(self, Literal::Negation { .. })
    }

    /// Apply `mapper` to each direct child slot, in declaration order.
    pub fn rewrite<M: NodeMapper>(self, mapper: &mut M) -> Self {
        match self {
            Literal::Atom(atom) => Literal::Atom(mapper.map_atom(atom)),
            Literal::Negation { atom, loc } => Literal::Negation {
                atom: mapper.map_atom(atom),
                loc,
            },
            Literal::BinaryConstraint { op, lhs, rhs, loc } => Literal::BinaryConstraint {
                op,
                lhs: Box::new(mapper.map_argument(*lhs)),
                rhs: Box::new(mapper.map_argument(*rhs)),
                loc,
            },
            constant @ Literal::BooleanConstraint { .. } => constant,
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        use Literal::*;
        match (self, other) {
            (Atom(a), Atom(b)) => a == b,
            (Negation { atom: a, .. }, Negation { atom: b, .. }) => a == b,
            (
                BinaryConstraint {
                    op: a,
                    lhs: al,
                    rhs: ar,
                    ..
                },
                BinaryConstraint {
                    op: b,
                    lhs: bl,
                    rhs: br,
                    ..
                },
            ) => a == b && al == bl && ar == br,
            (BooleanConstraint { value: a, .. }, BooleanConstraint { value: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for Literal {}

impl AstNode for Literal {
    fn loc(&self) -> SrcLoc {
        match self {
            Literal::Atom(atom) => atom.loc,
            Literal::Negation { loc, .. }
            | Literal::BinaryConstraint { loc, .. }
            | Literal::BooleanConstraint { loc, .. } => *loc,
        }
    }

    fn set_loc(&mut self, new: SrcLoc) {
        match self {
            Literal::Atom(atom) => atom.loc = new,
            Literal::Negation { loc, .. }
            | Literal::BinaryConstraint { loc, .. }
            | Literal::BooleanConstraint { loc, .. } => *loc = new,
        }
    }

    fn children(&self) -> Vec<NodeRef<'_>> {
        match self {
            Literal::Atom(atom) | Literal::Negation { atom, .. } => vec![NodeRef::Atom(atom)],
            Literal::BinaryConstraint { lhs, rhs, .. } => {
                vec![NodeRef::Argument(lhs), NodeRef::Argument(rhs)]
            }
            Literal::BooleanConstraint { .. } => Vec::new(),
        }
    }

    fn fmt_with(&self, symbols: &SymbolTable, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Atom(atom) => atom.fmt_with(symbols, f),
            Literal::Negation { atom, .. } => {
                write!(f, "!")?;
                atom.fmt_with(symbols, f)
            }
            Literal::BinaryConstraint { op, lhs, rhs, .. } => {
                lhs.fmt_with(symbols, f)?;
                write!(f, " {} ", op)?;
                rhs.fmt_with(symbols, f)
            }
            Literal::BooleanConstraint { value, .. } => write!(f, "{}", value),
        }
    }
}
