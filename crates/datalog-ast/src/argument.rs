//! Argument expression nodes
//!
//! The closed family of expression nodes that may appear as arguments
//! of atoms, constraints, and functors: variables, constants, functor
//! applications, records, type casts, aggregates, and subroutine
//! arguments.
//!
//! Each variant carries its own [`SrcLoc`]; locations never participate
//! in equality. Subtrees are exclusively owned, so `Clone` is a deep
//! copy with fresh ownership.

use crate::node::{AstNode, NodeMapper, NodeRef};
use crate::{FunctorOp, Literal, QualifiedName, SrcLoc, Symbol, SymbolTable};
use internment::Intern;
use std::fmt;

/// Aggregation operators over a sub-query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateOp {
    Min,
    Max,
    Count,
    Sum,
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AggregateOp::Min => "min",
            AggregateOp::Max => "max",
            AggregateOp::Count => "count",
            AggregateOp::Sum => "sum",
        };
        write!(f, "{}", text)
    }
}

/// An argument expression.
#[derive(Debug, Clone)]
pub enum Argument {
    /// Named variable: `X`
    Variable { name: Symbol, loc: SrcLoc },
    /// Anonymous wildcard: `_`
    UnnamedVariable { loc: SrcLoc },
    /// Projection counter: `$`
    Counter { loc: SrcLoc },
    /// String constant, stored as its symbol-table id
    StringConstant { index: usize, loc: SrcLoc },
    /// Numeric constant
    NumericConstant { value: i64, loc: SrcLoc },
    /// The record null value: `-`
    NilConstant { loc: SrcLoc },
    /// Built-in operator applied to operands; arity fixed by the operator
    IntrinsicFunctor {
        op: FunctorOp,
        args: Vec<Argument>,
        loc: SrcLoc,
    },
    /// User-defined functor: `@name(args)`
    UserFunctor {
        name: Symbol,
        args: Vec<Argument>,
        loc: SrcLoc,
    },
    /// Record constructor: `[a, b]`
    RecordInit { args: Vec<Argument>, loc: SrcLoc },
    /// Type ascription: `value as Type`; the name is resolved by a
    /// later type pass
    TypeCast {
        value: Box<Argument>,
        target_type: QualifiedName,
        loc: SrcLoc,
    },
    /// Aggregate over a sub-query; the body opens its own variable
    /// scope, and `target` is absent for `count`
    Aggregator {
        op: AggregateOp,
        target: Option<Box<Argument>>,
        body: Vec<Literal>,
        loc: SrcLoc,
    },
    /// Value taken from an argument of a generated subroutine
    SubroutineArg { index: usize, loc: SrcLoc },
}

impl Argument {
    pub fn variable(name: impl Into<String>, loc: SrcLoc) -> Self {
        Argument::Variable {
            name: Intern::new(name.into()),
            loc,
        }
    }

    /// Build an intrinsic functor application.
    ///
    /// Panics unless `args` matches the operator's arity; a mismatch is
    /// a compiler bug.
    pub fn intrinsic(op: FunctorOp, args: Vec<Argument>, loc: SrcLoc) -> Self {
        assert_eq!(
            args.len(),
            op.arity(),
            "functor {} expects {} arguments, got {}",
            op,
            op.arity(),
            args.len()
        );
        Argument::IntrinsicFunctor { op, args, loc }
    }

    /// Apply `mapper` to every direct child slot, in declaration order.
    ///
    /// Leaf variants have no slots and are returned unchanged.
    /// Recursion into grandchildren is the mapper's responsibility.
    pub fn rewrite<M: NodeMapper>(self, mapper: &mut M) -> Self {
        match self {
            Argument::IntrinsicFunctor { op, args, loc } => Argument::IntrinsicFunctor {
                op,
                args: args.into_iter().map(|a| mapper.map_argument(a)).collect(),
                loc,
            },
            Argument::UserFunctor { name, args, loc } => Argument::UserFunctor {
                name,
                args: args.into_iter().map(|a| mapper.map_argument(a)).collect(),
                loc,
            },
            Argument::RecordInit { args, loc } => Argument::RecordInit {
                args: args.into_iter().map(|a| mapper.map_argument(a)).collect(),
                loc,
            },
            Argument::TypeCast {
                value,
                target_type,
                loc,
            } => Argument::TypeCast {
                value: Box::new(mapper.map_argument(*value)),
                target_type,
                loc,
            },
            Argument::Aggregator {
                op,
                target,
                body,
                loc,
            } => Argument::Aggregator {
                op,
                target: target.map(|t| Box::new(mapper.map_argument(*t))),
                body: body.into_iter().map(|l| mapper.map_literal(l)).collect(),
                loc,
            },
            leaf => leaf,
        }
    }
}

// Locations are excluded from equality: only the variant and its
// semantic fields count.
impl PartialEq for Argument {
    fn eq(&self, other: &Self) -> bool {
        use Argument::*;
        match (self, other) {
            (Variable { name: a, .. }, Variable { name: b, .. }) => a == b,
            (UnnamedVariable { .. }, UnnamedVariable { .. }) => true,
            (Counter { .. }, Counter { .. }) => true,
            (StringConstant { index: a, .. }, StringConstant { index: b, .. }) => a == b,
            (NumericConstant { value: a, .. }, NumericConstant { value: b, .. }) => a == b,
            (NilConstant { .. }, NilConstant { .. }) => true,
            (
                IntrinsicFunctor {
                    op: a, args: xs, ..
                },
                IntrinsicFunctor {
                    op: b, args: ys, ..
                },
            ) => a == b && xs == ys,
            (
                UserFunctor {
                    name: a, args: xs, ..
                },
                UserFunctor {
                    name: b, args: ys, ..
                },
            ) => a == b && xs == ys,
            (RecordInit { args: xs, .. }, RecordInit { args: ys, .. }) => xs == ys,
            (
                TypeCast {
                    value: a,
                    target_type: t,
                    ..
                },
                TypeCast {
                    value: b,
                    target_type: u,
                    ..
                },
            ) => t == u && a == b,
            (
                Aggregator {
                    op: a,
                    target: s,
                    body: xs,
                    ..
                },
                Aggregator {
                    op: b,
                    target: t,
                    body: ys,
                    ..
                },
            ) => a == b && s == t && xs == ys,
            (SubroutineArg { index: a, .. }, SubroutineArg { index: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for Argument {}

impl AstNode for Argument {
    fn loc(&self) -> SrcLoc {
        use Argument::*;
        match self {
            Variable { loc, .. }
            | UnnamedVariable { loc }
            | Counter { loc }
            | StringConstant { loc, .. }
            | NumericConstant { loc, .. }
            | NilConstant { loc }
            | IntrinsicFunctor { loc, .. }
            | UserFunctor { loc, .. }
            | RecordInit { loc, .. }
            | TypeCast { loc, .. }
            | Aggregator { loc, .. }
            | SubroutineArg { loc, .. } => *loc,
        }
    }

    fn set_loc(&mut self, new: SrcLoc) {
        use Argument::*;
        match self {
            Variable { loc, .. }
            | UnnamedVariable { loc }
            | Counter { loc }
            | StringConstant { loc, .. }
            | NumericConstant { loc, .. }
            | NilConstant { loc }
            | IntrinsicFunctor { loc, .. }
            | UserFunctor { loc, .. }
            | RecordInit { loc, .. }
            | TypeCast { loc, .. }
            | Aggregator { loc, .. }
            | SubroutineArg { loc, .. } => *loc = new,
        }
    }

    fn children(&self) -> Vec<NodeRef<'_>> {
        use Argument::*;
        match self {
            IntrinsicFunctor { args, .. } | UserFunctor { args, .. } | RecordInit { args, .. } => {
                args.iter().map(NodeRef::Argument).collect()
            }
            TypeCast { value, .. } => vec![NodeRef::Argument(value)],
            Aggregator { target, body, .. } => {
                let mut children: Vec<NodeRef<'_>> = Vec::new();
                if let Some(target) = target {
                    children.push(NodeRef::Argument(target));
                }
                children.extend(body.iter().map(NodeRef::Literal));
                children
            }
            _ => Vec::new(),
        }
    }

    fn fmt_with(&self, symbols: &SymbolTable, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Argument::*;
        match self {
            Variable { name, .. } => write!(f, "{}", name),
            UnnamedVariable { .. } => write!(f, "_"),
            Counter { .. } => write!(f, "$"),
            StringConstant { index, .. } => write!(f, "\"{}\"", symbols.resolve(*index)),
            NumericConstant { value, .. } => write!(f, "{}", value),
            NilConstant { .. } => write!(f, "-"),
            IntrinsicFunctor { op, args, .. } => {
                if op.is_infix() {
                    write!(f, "(")?;
                    args[0].fmt_with(symbols, f)?;
                    write!(f, "{}", op.symbol())?;
                    args[1].fmt_with(symbols, f)?;
                    write!(f, ")")
                } else {
                    write!(f, "{}(", op.symbol())?;
                    fmt_args(args, symbols, f)?;
                    write!(f, ")")
                }
            }
            UserFunctor { name, args, .. } => {
                write!(f, "@{}(", name)?;
                fmt_args(args, symbols, f)?;
                write!(f, ")")
            }
            RecordInit { args, .. } => {
                write!(f, "[")?;
                fmt_args(args, symbols, f)?;
                write!(f, "]")
            }
            TypeCast {
                value, target_type, ..
            } => {
                value.fmt_with(symbols, f)?;
                write!(f, " as {}", target_type)
            }
            Aggregator {
                op, target, body, ..
            } => {
                write!(f, "{}", op)?;
                if let Some(target) = target {
                    write!(f, " ")?;
                    target.fmt_with(symbols, f)?;
                }
                write!(f, " : {{ ")?;
                for (i, lit) in body.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    lit.fmt_with(symbols, f)?;
                }
                write!(f, " }}")
            }
            SubroutineArg { index, .. } => write!(f, "arg_{}", index),
        }
    }
}

/// Comma-joined argument list, shared with atom printing.
pub(crate) fn fmt_args(
    args: &[Argument],
    symbols: &SymbolTable,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        arg.fmt_with(symbols, f)?;
    }
    Ok(())
}
