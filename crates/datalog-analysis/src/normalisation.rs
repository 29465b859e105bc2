//! Clause normalisation
//!
//! Converts a clause into a canonical flat form that is invariant under
//! body-literal reordering and stable under variable renaming, for the
//! equivalence checks of the later minimisation pass.
//!
//! # Shape of the normal form
//!
//! A [`NormalisedClause`] is an ordered list of elements, one per head /
//! body literal / aggregate signature, each tagged with the scope it
//! occurred in. Concrete values are abstracted behind tokens (`@min:cst:…`
//! for constants, scope ids for aggregates, fresh `@min:unnamed:…` tokens
//! for wildcards), so two clauses that differ only in variable names or
//! body order produce the same multiset of elements. Each aggregate opens
//! a fresh scope, keeping its variables apart from the enclosing clause.
//!
//! Literal or argument kinds the normaliser does not understand never
//! abort the analysis: they emit a placeholder token and clear the
//! `fully_normalised` flag, and downstream consumers treat such clauses
//! pessimistically.
//!
//! Token counters live on the builder, so clauses normalise
//! independently: normalising the same clause twice yields identical
//! tokens.

use crate::registry::Analysis;
use datalog_ast::{
    Argument, AstNode, Atom, Clause, ClauseId, Literal, QualifiedName, SymbolTable,
    TranslationUnit,
};
use std::any::Any;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// One entry of the flat clause representation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalisedElement {
    pub name: QualifiedName,
    pub params: Vec<String>,
}

impl fmt::Display for NormalisedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:[", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, "]")
    }
}

/// Canonical flat representation of one clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalisedClause {
    elements: Vec<NormalisedElement>,
    constants: BTreeSet<String>,
    variables: BTreeSet<String>,
    fully_normalised: bool,
    unnamed_count: usize,
    aggr_scope_count: usize,
}

impl NormalisedClause {
    /// Normalise `clause`, resolving string constants through `symbols`.
    pub fn new(clause: &Clause, symbols: &SymbolTable) -> Self {
        let mut norm = Self {
            elements: Vec::new(),
            constants: BTreeSet::new(),
            variables: BTreeSet::new(),
            fully_normalised: true,
            unnamed_count: 0,
            aggr_scope_count: 0,
        };

        // Head arguments are normalised before the head element is
        // pushed, so an aggregate in the head emits its elements first.
        let params: Vec<String> = clause
            .head
            .args
            .iter()
            .map(|arg| norm.normalise_argument(arg, symbols))
            .collect();
        norm.elements.push(NormalisedElement {
            name: QualifiedName::new("@min:head"),
            params,
        });

        for lit in &clause.body {
            norm.add_body_literal("@min:scope:0", lit, symbols);
        }
        norm
    }

    /// Elements in insertion order; order is significant.
    pub fn elements(&self) -> &[NormalisedElement] {
        &self.elements
    }

    /// Constant tokens; set semantics, insertion order irrelevant.
    pub fn constants(&self) -> &BTreeSet<String> {
        &self.constants
    }

    /// Variable tokens, including scope ids and wildcard tokens.
    pub fn variables(&self) -> &BTreeSet<String> {
        &self.variables
    }

    /// False iff some literal or argument kind was not understood.
    pub fn fully_normalised(&self) -> bool {
        self.fully_normalised
    }

    fn add_atom(&mut self, qualifier: &str, scope: &str, atom: &Atom, symbols: &SymbolTable) {
        let mut name = atom.name.clone();
        name.prepend(qualifier);

        let mut params = vec![scope.to_string()];
        for arg in &atom.args {
            params.push(self.normalise_argument(arg, symbols));
        }
        self.elements.push(NormalisedElement { name, params });
    }

    fn add_body_literal(&mut self, scope: &str, lit: &Literal, symbols: &SymbolTable) {
        match lit {
            Literal::Atom(atom) => self.add_atom("@min:atom", scope, atom, symbols),
            Literal::Negation { atom, .. } => self.add_atom("@min:neg", scope, atom, symbols),
            Literal::BinaryConstraint { op, lhs, rhs, .. } => {
                let mut name = QualifiedName::new(op.symbol());
                name.prepend("@min:operator");
                let params = vec![
                    scope.to_string(),
                    self.normalise_argument(lhs, symbols),
                    self.normalise_argument(rhs, symbols),
                ];
                self.elements.push(NormalisedElement { name, params });
            }
            other => {
                self.fully_normalised = false;
                let mut name = QualifiedName::new(other.display(symbols).to_string());
                name.prepend(format!("@min:unhandled:lit:{}", scope));
                self.elements.push(NormalisedElement {
                    name,
                    params: Vec::new(),
                });
            }
        }
    }

    fn normalise_argument(&mut self, arg: &Argument, symbols: &SymbolTable) -> String {
        match arg {
            Argument::StringConstant { index, .. } => {
                let token = format!("@min:cst:str\"{}\"", symbols.resolve(*index));
                self.constants.insert(token.clone());
                token
            }
            Argument::NumericConstant { value, .. } => {
                let token = format!("@min:cst:num:{}", value);
                self.constants.insert(token.clone());
                token
            }
            Argument::NilConstant { .. } => {
                self.constants.insert("@min:cst:nil".to_string());
                "@min:cst:nil".to_string()
            }
            Argument::Variable { name, .. } => {
                let token = name.to_string();
                self.variables.insert(token.clone());
                token
            }
            Argument::UnnamedVariable { .. } => {
                let token = format!("@min:unnamed:{}", self.unnamed_count);
                self.unnamed_count += 1;
                self.variables.insert(token.clone());
                token
            }
            Argument::Aggregator {
                op, target, body, ..
            } => {
                // Fresh scope identifying this aggregate; remappable
                // like a variable.
                self.aggr_scope_count += 1;
                let scope = format!("@min:scope:{}", self.aggr_scope_count);
                self.variables.insert(scope.clone());

                // The target is normalised before the signature element
                // is pushed, so a nested aggregate in the target emits
                // its own elements first.
                let target_token = target
                    .as_deref()
                    .map(|t| self.normalise_argument(t, symbols));

                let mut params = vec![scope.clone()];
                params.extend(target_token);
                self.elements.push(NormalisedElement {
                    name: QualifiedName::new(format!("@min:aggrtype:{}", op)),
                    params,
                });

                for lit in body {
                    self.add_body_literal(&scope, lit, symbols);
                }
                scope
            }
            _ => {
                self.fully_normalised = false;
                "@min:unhandled:arg".to_string()
            }
        }
    }
}

impl fmt::Display for NormalisedClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "}}")
    }
}

/// Name the clause-normalisation analysis registers under.
pub const CLAUSE_NORMALISATION: &str = "clause-normalisation";

/// Caches one [`NormalisedClause`] per clause of the translation unit.
#[derive(Debug, Default)]
pub struct ClauseNormalisationAnalysis {
    normalisations: HashMap<ClauseId, NormalisedClause>,
}

impl ClauseNormalisationAnalysis {
    pub fn new() -> Self {
        Self::default()
    }

    /// The normal form of `id`; panics for ids of a program this
    /// analysis was not run on.
    pub fn get(&self, id: ClauseId) -> &NormalisedClause {
        match self.normalisations.get(&id) {
            Some(norm) => norm,
            None => panic!("clause {} has not been normalised", id),
        }
    }
}

impl Analysis for ClauseNormalisationAnalysis {
    fn name(&self) -> &'static str {
        CLAUSE_NORMALISATION
    }

    fn run(&mut self, tu: &TranslationUnit) {
        for (id, clause) in tu.program().clauses_with_ids() {
            assert!(
                !self.normalisations.contains_key(&id),
                "clause {} already processed",
                id
            );
            self.normalisations
                .insert(id, NormalisedClause::new(clause, tu.symbols()));
        }
    }

    fn fmt_results(&self, tu: &TranslationUnit, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, clause) in tu.program().clauses_with_ids() {
            writeln!(
                f,
                "Normalise({}) = {}",
                clause.display(tu.symbols()),
                self.normalisations[&id]
            )?;
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
