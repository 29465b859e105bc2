//! Analysis registry
//!
//! Analyses are named, run at most once per translation unit, and keep
//! immutable results for later passes to query. The registry owns them,
//! runs them in registration order, and hands back typed references.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = AnalysisRegistry::new();
//! registry.register(Box::new(ClauseNormalisationAnalysis::new()));
//! registry.run(&tu);
//! let norm: &ClauseNormalisationAnalysis =
//!     registry.get(CLAUSE_NORMALISATION).expect("registered above");
//! ```

use datalog_ast::TranslationUnit;
use std::any::Any;
use std::fmt;

/// A named analysis over a translation unit.
pub trait Analysis: Any {
    /// Stable name the analysis is registered and queried under.
    fn name(&self) -> &'static str;

    /// Compute results for `tu`. Called exactly once by the registry.
    fn run(&mut self, tu: &TranslationUnit);

    /// Render the computed results for diagnostics.
    fn fmt_results(&self, tu: &TranslationUnit, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Upcast for typed retrieval via [`AnalysisRegistry::get`].
    fn as_any(&self) -> &dyn Any;
}

/// Owns the analyses of one translation unit.
#[derive(Default)]
pub struct AnalysisRegistry {
    analyses: Vec<Box<dyn Analysis>>,
    ran: bool,
}

impl AnalysisRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an analysis. Registering two analyses under one name, or
    /// registering after [`run`](Self::run), is a programming error.
    pub fn register(&mut self, analysis: Box<dyn Analysis>) {
        assert!(!self.ran, "cannot register analyses after running them");
        assert!(
            self.analyses.iter().all(|a| a.name() != analysis.name()),
            "analysis {:?} registered twice",
            analysis.name()
        );
        self.analyses.push(analysis);
    }

    /// Run every registered analysis, in registration order.
    ///
    /// Running a registry twice on a translation unit is a programming
    /// error; build a fresh registry after structural program edits.
    pub fn run(&mut self, tu: &TranslationUnit) {
        assert!(!self.ran, "analyses already run for this translation unit");
        self.ran = true;
        for analysis in &mut self.analyses {
            analysis.run(tu);
        }
    }

    pub fn has_run(&self) -> bool {
        self.ran
    }

    /// Typed access to a registered analysis, by name.
    pub fn get<A: Analysis>(&self, name: &str) -> Option<&A> {
        self.analyses
            .iter()
            .find(|a| a.name() == name)
            .and_then(|a| a.as_any().downcast_ref::<A>())
    }

    /// [`fmt::Display`] adapter rendering every analysis' results.
    pub fn results_display<'a>(&'a self, tu: &'a TranslationUnit) -> RegistryResults<'a> {
        RegistryResults { registry: self, tu }
    }
}

/// Adapter returned by [`AnalysisRegistry::results_display`].
pub struct RegistryResults<'a> {
    registry: &'a AnalysisRegistry,
    tu: &'a TranslationUnit,
}

impl fmt::Display for RegistryResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for analysis in &self.registry.analyses {
            analysis.fmt_results(self.tu, f)?;
        }
        Ok(())
    }
}
