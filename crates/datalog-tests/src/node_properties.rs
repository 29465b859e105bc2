//! Property-based tests for the node-protocol laws
//!
//! Random argument trees and clauses are generated with proptest and
//! checked against the contracts every node variant must honour:
//! clones are structurally equal and independent, equality ignores
//! source locations, the identity rewrite is a structural no-op, and
//! normalisation is deterministic.

use datalog_analysis::NormalisedClause;
use datalog_ast::{
    Argument, AstNode, Atom, Clause, FunctorOp, IdentityMapper, Literal, NodeMapper, Position,
    QualifiedName, SrcId, SrcLoc, SymbolTable,
};
use proptest::prelude::*;

fn loc() -> SrcLoc {
    SrcLoc::new(SrcId::repl(), Position::new(1, 1), Position::new(1, 10))
}

fn other_loc() -> SrcLoc {
    SrcLoc::new(
        SrcId::from_path("elsewhere.dl"),
        Position::new(42, 1),
        Position::new(42, 10),
    )
}

/// Variable names the generator draws from.
fn variable_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-z0-9]{0,3}").unwrap()
}

fn leaf_argument_strategy() -> impl Strategy<Value = Argument> {
    prop_oneof![
        variable_name_strategy().prop_map(|name| Argument::variable(name, loc())),
        Just(Argument::UnnamedVariable { loc: loc() }),
        Just(Argument::NilConstant { loc: loc() }),
        (-1000i64..1000).prop_map(|value| Argument::NumericConstant { value, loc: loc() }),
        (0usize..4).prop_map(|index| Argument::SubroutineArg { index, loc: loc() }),
    ]
}

fn argument_strategy() -> impl Strategy<Value = Argument> {
    leaf_argument_strategy().prop_recursive(3, 24, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 2).prop_map(|args| Argument::intrinsic(
                FunctorOp::Add,
                args,
                loc()
            )),
            prop::collection::vec(inner.clone(), 1).prop_map(|args| Argument::intrinsic(
                FunctorOp::Neg,
                args,
                loc()
            )),
            prop::collection::vec(inner.clone(), 0..3)
                .prop_map(|args| Argument::RecordInit { args, loc: loc() }),
            inner.clone().prop_map(|value| Argument::TypeCast {
                value: Box::new(value),
                target_type: QualifiedName::new("T"),
                loc: loc(),
            }),
        ]
    })
}

/// Atoms over named variables and numbers only, for the reordering
/// property: wildcard tokens depend on visit order by design.
fn plain_atom_strategy() -> impl Strategy<Value = Atom> {
    (
        prop::string::string_regex("[a-z][a-z0-9]{0,3}").unwrap(),
        prop::collection::vec(
            prop_oneof![
                variable_name_strategy().prop_map(|name| Argument::variable(name, loc())),
                (-10i64..10).prop_map(|value| Argument::NumericConstant { value, loc: loc() }),
            ],
            0..3,
        ),
    )
        .prop_map(|(name, args)| Atom::new(name, args, loc()))
}

fn clause_strategy() -> impl Strategy<Value = Clause> {
    (
        plain_atom_strategy(),
        prop::collection::vec(plain_atom_strategy().prop_map(Literal::Atom), 0..4),
    )
        .prop_map(|(head, body)| Clause::new(head, body, loc()))
}

/// Stamps every node it visits with a different location.
struct Relocate;

impl NodeMapper for Relocate {
    fn map_argument(&mut self, mut arg: Argument) -> Argument {
        arg.set_loc(other_loc());
        arg.rewrite(self)
    }
    fn map_atom(&mut self, mut atom: Atom) -> Atom {
        atom.set_loc(other_loc());
        atom.rewrite(self)
    }
    fn map_literal(&mut self, mut lit: Literal) -> Literal {
        lit.set_loc(other_loc());
        lit.rewrite(self)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn clone_is_structurally_equal(arg in argument_strategy()) {
        prop_assert_eq!(arg.clone(), arg);
    }

    #[test]
    fn equality_is_reflexive(arg in argument_strategy()) {
        prop_assert!(arg == arg);
    }

    #[test]
    fn equality_ignores_locations(arg in argument_strategy()) {
        let mut moved = arg.clone();
        moved.set_loc(other_loc());
        let moved = moved.rewrite(&mut Relocate);
        prop_assert_eq!(moved, arg);
    }

    #[test]
    fn identity_rewrite_is_a_noop(arg in argument_strategy()) {
        prop_assert_eq!(arg.clone().rewrite(&mut IdentityMapper), arg);
    }

    #[test]
    fn clause_identity_rewrite_is_a_noop(clause in clause_strategy()) {
        prop_assert_eq!(clause.clone().rewrite(&mut IdentityMapper), clause);
    }

    #[test]
    fn children_never_outnumber_subtree(arg in argument_strategy()) {
        // direct children only: at most the declared slots
        let children = arg.children();
        match &arg {
            Argument::IntrinsicFunctor { args, .. }
            | Argument::UserFunctor { args, .. }
            | Argument::RecordInit { args, .. } => prop_assert_eq!(children.len(), args.len()),
            Argument::TypeCast { .. } => prop_assert_eq!(children.len(), 1),
            _ => prop_assert!(children.is_empty()),
        }
    }

    #[test]
    fn normalisation_is_deterministic(clause in clause_strategy()) {
        let symbols = SymbolTable::new();
        let a = NormalisedClause::new(&clause, &symbols);
        let b = NormalisedClause::new(&clause, &symbols);
        prop_assert_eq!(a.elements(), b.elements());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn body_reversal_preserves_element_multiset(clause in clause_strategy()) {
        let symbols = SymbolTable::new();
        let forward = NormalisedClause::new(&clause, &symbols);

        let mut reversed = clause.clone();
        reversed.body.reverse();
        let backward = NormalisedClause::new(&reversed, &symbols);

        prop_assert_eq!(&forward.elements()[0], &backward.elements()[0]);
        let mut xs = forward.elements().to_vec();
        let mut ys = backward.elements().to_vec();
        xs.sort();
        ys.sort();
        prop_assert_eq!(xs, ys);
        prop_assert_eq!(forward.variables(), backward.variables());
        prop_assert_eq!(forward.constants(), backward.constants());
    }

    #[test]
    fn printing_never_panics(arg in argument_strategy()) {
        let symbols = SymbolTable::new();
        let _ = arg.display(&symbols).to_string();
    }
}
