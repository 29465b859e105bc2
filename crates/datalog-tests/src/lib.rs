//! Scenario and property-based tests for the Datalog front end
//!
//! End-to-end normalisation scenarios over the public API of
//! `datalog-ast` and `datalog-analysis`, plus property-based tests of
//! the node-protocol laws (clone, equality, rewrite) and of
//! normalisation determinism.

#[cfg(test)]
mod normalisation_scenarios;

#[cfg(test)]
mod node_properties;
