//! Front-end analyses for the Datalog compiler
//!
//! This crate hosts analyses that read a parsed translation unit and
//! cache immutable results for downstream passes:
//!
//! - **Clause normalisation**: a canonical, variable-renaming-invariant
//!   flat form per clause, consumed by the clause-equivalence and
//!   minimisation machinery
//! - **Analysis registry**: runs registered analyses once per
//!   translation unit and serves typed access to their results
//!
//! # Example
//!
//! ```ignore
//! use datalog_analysis::{AnalysisRegistry, ClauseNormalisationAnalysis, CLAUSE_NORMALISATION};
//!
//! let mut registry = AnalysisRegistry::new();
//! registry.register(Box::new(ClauseNormalisationAnalysis::new()));
//! registry.run(&tu);
//! let norm: &ClauseNormalisationAnalysis = registry.get(CLAUSE_NORMALISATION).unwrap();
//! ```

mod normalisation;
mod registry;

pub use normalisation::{
    ClauseNormalisationAnalysis, NormalisedClause, NormalisedElement, CLAUSE_NORMALISATION,
};
pub use registry::{Analysis, AnalysisRegistry, RegistryResults};
