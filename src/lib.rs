//! Antler is a SAT-based enumerator of antenna gadget graphs.
//!
//! The crate searches for simple, undirected, k-regular graphs on n nodes in
//! which c designated antenna nodes, grouped into fixed pairs, satisfy an
//! automorphism pairing property: swapping a single antenna pair must not be
//! realizable by a graph automorphism, while jointly swapping any two
//! distinct pairs must be.
//!
//! The search is encoded as a boolean formula handed to an off-the-shelf SAT
//! backend; solutions are enumerated with blocking clauses.

#![warn(missing_docs)]

pub mod encodings;

pub mod formula;

pub mod graphs;

pub mod io;

pub mod sat;

pub mod solvers;
