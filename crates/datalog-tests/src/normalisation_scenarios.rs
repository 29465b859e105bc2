//! End-to-end clause-normalisation scenarios
//!
//! Each test builds a clause the way the parser would and checks the
//! exact flat form the normaliser produces for it.

use datalog_analysis::{NormalisedClause, NormalisedElement};
use datalog_ast::{
    AggregateOp, Argument, Atom, Clause, ComparisonOp, Literal, NodeMapper, Position,
    QualifiedName, SrcId, SrcLoc, SymbolTable,
};

fn loc() -> SrcLoc {
    SrcLoc::new(SrcId::repl(), Position::new(1, 1), Position::new(1, 30))
}

fn var(name: &str) -> Argument {
    Argument::variable(name, loc())
}

fn num(value: i64) -> Argument {
    Argument::NumericConstant { value, loc: loc() }
}

fn unnamed() -> Argument {
    Argument::UnnamedVariable { loc: loc() }
}

fn atom(name: &str, args: Vec<Argument>) -> Atom {
    Atom::new(name, args, loc())
}

fn element(parts: &[&str], params: &[&str]) -> NormalisedElement {
    NormalisedElement {
        name: QualifiedName::from_parts(parts.iter().copied()),
        params: params.iter().map(|p| p.to_string()).collect(),
    }
}

#[test]
fn scenario_single_body_atom() {
    // R(X) :- S(X).
    let clause = Clause::new(
        atom("R", vec![var("X")]),
        vec![Literal::Atom(atom("S", vec![var("X")]))],
        loc(),
    );
    let norm = NormalisedClause::new(&clause, &SymbolTable::new());

    assert_eq!(
        norm.elements(),
        &[
            element(&["@min:head"], &["X"]),
            element(&["@min:atom", "S"], &["@min:scope:0", "X"]),
        ]
    );
    assert!(norm.constants().is_empty());
    assert_eq!(
        norm.variables().iter().cloned().collect::<Vec<_>>(),
        vec!["X".to_string()]
    );
    assert!(norm.fully_normalised());
}

#[test]
fn scenario_constants_are_tagged_by_sort() {
    // R(1) :- S("a"), X = 2.
    let mut symbols = SymbolTable::new();
    let a = symbols.intern("a");
    let clause = Clause::new(
        atom("R", vec![num(1)]),
        vec![
            Literal::Atom(atom(
                "S",
                vec![Argument::StringConstant {
                    index: a,
                    loc: loc(),
                }],
            )),
            Literal::BinaryConstraint {
                op: ComparisonOp::Equal,
                lhs: Box::new(var("X")),
                rhs: Box::new(num(2)),
                loc: loc(),
            },
        ],
        loc(),
    );
    let norm = NormalisedClause::new(&clause, &symbols);

    assert_eq!(
        norm.elements(),
        &[
            element(&["@min:head"], &["@min:cst:num:1"]),
            element(
                &["@min:atom", "S"],
                &["@min:scope:0", "@min:cst:str\"a\""]
            ),
            element(
                &["@min:operator", "="],
                &["@min:scope:0", "X", "@min:cst:num:2"]
            ),
        ]
    );
    assert!(norm.constants().contains("@min:cst:num:1"));
    assert!(norm.constants().contains("@min:cst:str\"a\""));
    assert!(norm.constants().contains("@min:cst:num:2"));
    assert_eq!(norm.constants().len(), 3);
    assert_eq!(
        norm.variables().iter().cloned().collect::<Vec<_>>(),
        vec!["X".to_string()]
    );
}

#[test]
fn scenario_negation_gets_neg_prefix() {
    // R(X) :- !S(X).
    let clause = Clause::new(
        atom("R", vec![var("X")]),
        vec![Literal::Negation {
            atom: atom("S", vec![var("X")]),
            loc: loc(),
        }],
        loc(),
    );
    let norm = NormalisedClause::new(&clause, &SymbolTable::new());
    assert_eq!(
        norm.elements()[1],
        element(&["@min:neg", "S"], &["@min:scope:0", "X"])
    );
}

#[test]
fn scenario_unnamed_tokens_restart_per_clause() {
    // R(_) :- S(_).
    let clause = Clause::new(
        atom("R", vec![unnamed()]),
        vec![Literal::Atom(atom("S", vec![unnamed()]))],
        loc(),
    );

    let symbols = SymbolTable::new();
    let norm = NormalisedClause::new(&clause, &symbols);
    assert!(norm.variables().contains("@min:unnamed:0"));
    assert!(norm.variables().contains("@min:unnamed:1"));
    assert_eq!(norm.variables().len(), 2);

    // normalising the same clause afresh restarts the counter
    let again = NormalisedClause::new(&clause, &symbols);
    assert_eq!(again, norm);
}

#[test]
fn scenario_aggregate_opens_fresh_scope() {
    // R(Y) :- Y = count : { S(X) }.
    let clause = Clause::new(
        atom("R", vec![var("Y")]),
        vec![Literal::BinaryConstraint {
            op: ComparisonOp::Equal,
            lhs: Box::new(var("Y")),
            rhs: Box::new(Argument::Aggregator {
                op: AggregateOp::Count,
                target: None,
                body: vec![Literal::Atom(atom("S", vec![var("X")]))],
                loc: loc(),
            }),
            loc: loc(),
        }],
        loc(),
    );
    let norm = NormalisedClause::new(&clause, &SymbolTable::new());

    assert_eq!(
        norm.elements(),
        &[
            element(&["@min:head"], &["Y"]),
            element(&["@min:aggrtype:count"], &["@min:scope:1"]),
            element(&["@min:atom", "S"], &["@min:scope:1", "X"]),
            element(
                &["@min:operator", "="],
                &["@min:scope:0", "Y", "@min:scope:1"]
            ),
        ]
    );
    assert!(norm.variables().contains("@min:scope:1"));
    assert!(norm.variables().contains("X"));
    assert!(norm.variables().contains("Y"));
    assert!(norm.fully_normalised());
}

#[test]
fn scenario_nested_aggregates_get_distinct_scopes() {
    // R(Y) :- Y = sum Z : { T(Z), Z = count : { S(X) } }.
    let inner = Argument::Aggregator {
        op: AggregateOp::Count,
        target: None,
        body: vec![Literal::Atom(atom("S", vec![var("X")]))],
        loc: loc(),
    };
    let outer = Argument::Aggregator {
        op: AggregateOp::Sum,
        target: Some(Box::new(var("Z"))),
        body: vec![
            Literal::Atom(atom("T", vec![var("Z")])),
            Literal::BinaryConstraint {
                op: ComparisonOp::Equal,
                lhs: Box::new(var("Z")),
                rhs: Box::new(inner),
                loc: loc(),
            },
        ],
        loc: loc(),
    };
    let clause = Clause::new(
        atom("R", vec![var("Y")]),
        vec![Literal::BinaryConstraint {
            op: ComparisonOp::Equal,
            lhs: Box::new(var("Y")),
            rhs: Box::new(outer),
            loc: loc(),
        }],
        loc(),
    );
    let norm = NormalisedClause::new(&clause, &SymbolTable::new());

    // outer aggregate is scope 1, nested one scope 2
    assert!(norm.variables().contains("@min:scope:1"));
    assert!(norm.variables().contains("@min:scope:2"));
    assert_eq!(
        norm.elements()[1],
        element(&["@min:aggrtype:sum"], &["@min:scope:1", "Z"])
    );
    let nested_atom = element(&["@min:atom", "S"], &["@min:scope:2", "X"]);
    assert!(norm.elements().contains(&nested_atom));
}

#[test]
fn scenario_body_reorder_same_element_multiset() {
    // R(X) :- S(X), T(X, 1). versus R(X) :- T(X, 1), S(X).
    let s = Literal::Atom(atom("S", vec![var("X")]));
    let t = Literal::Atom(atom("T", vec![var("X"), num(1)]));
    let forward = Clause::new(atom("R", vec![var("X")]), vec![s.clone(), t.clone()], loc());
    let backward = Clause::new(atom("R", vec![var("X")]), vec![t, s], loc());

    let symbols = SymbolTable::new();
    let a = NormalisedClause::new(&forward, &symbols);
    let b = NormalisedClause::new(&backward, &symbols);

    // head element keeps position 0 in both
    assert_eq!(a.elements()[0], b.elements()[0]);

    let mut xs = a.elements().to_vec();
    let mut ys = b.elements().to_vec();
    xs.sort();
    ys.sort();
    assert_eq!(xs, ys);
    assert_eq!(a.constants(), b.constants());
    assert_eq!(a.variables(), b.variables());
}

#[test]
fn scenario_clone_then_rewrite_leaves_original_intact() {
    // build R(@f(X, Y)), clone, swap X and Y in the clone only
    struct SwapXY;
    impl NodeMapper for SwapXY {
        fn map_argument(&mut self, arg: Argument) -> Argument {
            let arg = match arg {
                Argument::Variable { name, loc } if name.as_ref().as_str() == "X" => {
                    Argument::variable("Y", loc)
                }
                Argument::Variable { name, loc } if name.as_ref().as_str() == "Y" => {
                    Argument::variable("X", loc)
                }
                other => other,
            };
            arg.rewrite(self)
        }
        fn map_atom(&mut self, atom: Atom) -> Atom {
            atom.rewrite(self)
        }
        fn map_literal(&mut self, lit: Literal) -> Literal {
            lit.rewrite(self)
        }
    }

    let functor = |a: &str, b: &str| Argument::UserFunctor {
        name: datalog_ast::Symbol::new("f".to_string()),
        args: vec![var(a), var(b)],
        loc: loc(),
    };
    let original = Clause::fact(atom("R", vec![functor("X", "Y")]), loc());
    let swapped = original.clone().rewrite(&mut SwapXY);

    assert_eq!(original, Clause::fact(atom("R", vec![functor("X", "Y")]), loc()));
    assert_eq!(swapped, Clause::fact(atom("R", vec![functor("Y", "X")]), loc()));
}

#[test]
fn scenario_print_round_trip_of_normal_form() {
    use datalog_analysis::{AnalysisRegistry, ClauseNormalisationAnalysis};
    use datalog_ast::{Program, TranslationUnit};

    let mut symbols = SymbolTable::new();
    let a = symbols.intern("a");
    let mut program = Program::new();
    program.add_clause(Clause::new(
        atom("R", vec![var("X")]),
        vec![Literal::Atom(atom(
            "S",
            vec![
                var("X"),
                Argument::StringConstant {
                    index: a,
                    loc: loc(),
                },
            ],
        ))],
        loc(),
    ));
    let tu = TranslationUnit::new(program, symbols);

    let mut registry = AnalysisRegistry::new();
    registry.register(Box::new(ClauseNormalisationAnalysis::new()));
    registry.run(&tu);
    assert_eq!(
        registry.results_display(&tu).to_string(),
        "Normalise(R(X) :- S(X,\"a\").) = \
         {@min:head:[X], @min:atom.S:[@min:scope:0,X,@min:cst:str\"a\"]}\n"
    );
}
