//! The solving layer: the formula-level driver handling quantified
//! constraints on top of plain SAT backends, and the enumeration engine
//! listing all solutions of a problem.

mod enumeration;
pub use enumeration::GadgetGraphEnumerator;

mod formula_solver;
pub use formula_solver::FormulaCheck;
pub use formula_solver::FormulaSolver;
pub use formula_solver::Interpretation;
