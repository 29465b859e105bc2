//! AST for the Datalog compiler front end
//!
//! This crate defines the tree every front-end pass works on: argument
//! expressions, literals, clauses, declarations, and the translation
//! unit that owns them, together with the uniform node protocol
//! (clone / equal / children / print / rewrite) the passes rely on.
//!
//! # Key Components
//!
//! - **Argument**: expression nodes (variables, constants, functors,
//!   records, casts, aggregates)
//! - **Literal**: body conjuncts (atoms, negations, constraints)
//! - **Clause**: a head atom plus body literals
//! - **Program / TranslationUnit**: the parsed unit and its symbol table
//! - **AstNode / NodeMapper**: the traversal and in-place rewrite protocol
//!
//! # Ownership
//!
//! Every subtree has exactly one owner; `Clone` is a deep copy and the
//! rewrite protocol moves subtrees in and out of their slots, so passes
//! never alias nodes. Source locations are plain values and never
//! participate in equality.
//!
//! # Example
//!
//! ```ignore
//! use datalog_ast::{Argument, Atom, Clause, Literal, SrcLoc};
//!
//! // reachable(X, Y) :- edge(X, Y).
//! let loc = SrcLoc::unknown();
//! let clause = Clause::new(
//!     Atom::new("reachable", vec![Argument::variable("X", loc), Argument::variable("Y", loc)], loc),
//!     vec![Literal::Atom(Atom::new("edge", vec![Argument::variable("X", loc), Argument::variable("Y", loc)], loc))],
//!     loc,
//! );
//! ```

mod argument;
mod clause;
mod functor;
mod literal;
mod name;
mod node;
mod program;
mod span;
mod src;
mod symbols;

pub use argument::{AggregateOp, Argument};
pub use clause::Clause;
pub use functor::{FunctorOp, Sort};
pub use literal::{Atom, ComparisonOp, Literal};
pub use name::QualifiedName;
pub use node::{AstNode, IdentityMapper, NodeDisplay, NodeMapper, NodeRef};
pub use program::{ClauseId, Program, RelationDecl, TranslationUnit, TypeDecl, TypeDeclKind};
pub use span::{Position, SrcLoc};
pub use src::SrcId;
pub use symbols::SymbolTable;

use internment::Intern;

/// Interned string for identifier components.
pub type Symbol = Intern<String>;
