use crate::Symbol;
use internment::Intern;
use std::fmt;

/// A possibly dotted identifier, e.g. `net.reachable`.
///
/// Stored as its ordered identifier components. Equality and ordering
/// are plain sequence equality/ordering over the components.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedName {
    parts: Vec<Symbol>,
}

impl QualifiedName {
    /// A name with a single component.
    pub fn new(part: impl Into<String>) -> Self {
        Self {
            parts: vec![Intern::new(part.into())],
        }
    }

    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts: Vec<Symbol> = parts.into_iter().map(|p| Intern::new(p.into())).collect();
        assert!(!parts.is_empty(), "qualified name must have a component");
        Self { parts }
    }

    /// Add a leading component.
    pub fn prepend(&mut self, part: impl Into<String>) {
        self.parts.insert(0, Intern::new(part.into()));
    }

    /// Add a trailing component.
    pub fn append(&mut self, part: impl Into<String>) {
        self.parts.push(Intern::new(part.into()));
    }

    pub fn parts(&self) -> &[Symbol] {
        &self.parts
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl From<&str> for QualifiedName {
    fn from(name: &str) -> Self {
        QualifiedName::new(name)
    }
}

impl From<String> for QualifiedName {
    fn from(name: String) -> Self {
        QualifiedName::new(name)
    }
}
