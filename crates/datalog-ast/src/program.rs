//! Programs and translation units
//!
//! A [`Program`] owns the declarations and clauses the parser produced;
//! a [`TranslationUnit`] pairs it with the symbol table its string
//! constants were interned in. Passes mutate the program in place;
//! analyses read the translation unit and cache results keyed by
//! [`ClauseId`].

use crate::node::AstNode;
use crate::{Clause, QualifiedName, SrcLoc, Symbol, SymbolTable};
use std::fmt;

/// Kinds of user type declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDeclKind {
    Number,
    Symbol,
    /// Record type with named, typed fields
    Record(Vec<(Symbol, QualifiedName)>),
    /// Union of previously declared types
    Union(Vec<QualifiedName>),
}

/// A `.type` / `.number_type` / `.symbol_type` declaration.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub name: QualifiedName,
    pub kind: TypeDeclKind,
    pub loc: SrcLoc,
}

impl PartialEq for TypeDecl {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}

impl Eq for TypeDecl {}

impl fmt::Display for TypeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeDeclKind::Number => write!(f, ".number_type {}", self.name),
            TypeDeclKind::Symbol => write!(f, ".symbol_type {}", self.name),
            TypeDeclKind::Record(fields) => {
                write!(f, ".type {} = [", self.name)?;
                for (i, (field, ty)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}:{}", field, ty)?;
                }
                write!(f, "]")
            }
            TypeDeclKind::Union(members) => {
                write!(f, ".type {} = ", self.name)?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", member)?;
                }
                Ok(())
            }
        }
    }
}

/// A `.decl` relation declaration.
#[derive(Debug, Clone)]
pub struct RelationDecl {
    pub name: QualifiedName,
    /// Attribute name and type, in declaration order
    pub attributes: Vec<(Symbol, QualifiedName)>,
    pub loc: SrcLoc,
}

impl RelationDecl {
    pub fn arity(&self) -> usize {
        self.attributes.len()
    }
}

impl PartialEq for RelationDecl {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.attributes == other.attributes
    }
}

impl Eq for RelationDecl {}

impl fmt::Display for RelationDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".decl {}(", self.name)?;
        for (i, (attr, ty)) in self.attributes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}:{}", attr, ty)?;
        }
        write!(f, ")")
    }
}

/// Identity of a clause within its program.
///
/// Positional and stable while passes rewrite clauses in place; adding
/// or removing clauses invalidates ids handed out earlier, so analyses
/// must be re-created (not re-run) after structural edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClauseId(pub usize);

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A parsed program: declarations plus clauses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    types: Vec<TypeDecl>,
    relations: Vec<RelationDecl>,
    clauses: Vec<Clause>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_type(&mut self, decl: TypeDecl) {
        self.types.push(decl);
    }

    pub fn add_relation(&mut self, decl: RelationDecl) {
        self.relations.push(decl);
    }

    pub fn add_clause(&mut self, clause: Clause) -> ClauseId {
        self.clauses.push(clause);
        ClauseId(self.clauses.len() - 1)
    }

    pub fn types(&self) -> &[TypeDecl] {
        &self.types
    }

    pub fn relations(&self) -> &[RelationDecl] {
        &self.relations
    }

    pub fn relation(&self, name: &QualifiedName) -> Option<&RelationDecl> {
        self.relations.iter().find(|r| &r.name == name)
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Mutable clause access for in-place rewriting passes.
    pub fn clauses_mut(&mut self) -> &mut [Clause] {
        &mut self.clauses
    }

    /// The clause behind `id`; panics on an id this program never
    /// produced.
    pub fn clause(&self, id: ClauseId) -> &Clause {
        match self.clauses.get(id.0) {
            Some(clause) => clause,
            None => panic!("unknown clause id {}", id),
        }
    }

    pub fn clauses_with_ids(&self) -> impl Iterator<Item = (ClauseId, &Clause)> {
        self.clauses
            .iter()
            .enumerate()
            .map(|(i, c)| (ClauseId(i), c))
    }

    pub fn fmt_with(&self, symbols: &SymbolTable, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decl in &self.types {
            writeln!(f, "{}", decl)?;
        }
        for decl in &self.relations {
            writeln!(f, "{}", decl)?;
        }
        for clause in &self.clauses {
            writeln!(f, "{}", clause.display(symbols))?;
        }
        Ok(())
    }
}

/// A program together with the symbol table it interns into.
///
/// The table outlives every string-constant id minted from it: both are
/// owned here and dropped together.
#[derive(Debug, Default)]
pub struct TranslationUnit {
    program: Program,
    symbols: SymbolTable,
}

impl TranslationUnit {
    pub fn new(program: Program, symbols: SymbolTable) -> Self {
        Self { program, symbols }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn program_mut(&mut self) -> &mut Program {
        &mut self.program
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }
}

impl fmt::Display for TranslationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.program.fmt_with(&self.symbols, f)
    }
}
