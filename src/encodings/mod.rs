//! Boolean encodings of the gadget graph search problem.
//!
//! The encodings build [`Formula`](crate::formula::Formula) constraints over
//! variables declared in a [`VarStore`](crate::formula::VarStore); the
//! [`CnfEncoder`] lowers them to clauses for the SAT backends.

pub mod assembler;

mod cnf;
pub use cnf::CnfEncoder;

pub mod graph_constraints;

pub mod isomorphism;

pub mod permutation_constraints;
