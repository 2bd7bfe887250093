//! The engine enumerating all the gadget graphs of a problem.

use super::{FormulaCheck, FormulaSolver};
use crate::{
    encodings::assembler::{self, AssembledConstraints},
    formula::VarStore,
    graphs::{AdjacencyMatrix, GadgetProblem},
    sat::{DefaultSatSolverFactory, SatSolverFactory},
};
use anyhow::{anyhow, Result};
use log::info;
use std::time::Instant;

/// An enumerator of the gadget graphs of a problem.
///
/// The constraints are assembled once at construction time; each call to
/// [`GadgetGraphEnumerator::enumerate`] runs a fresh solving session over
/// them.
pub struct GadgetGraphEnumerator {
    store: VarStore,
    assembled: AssembledConstraints,
    factory: Box<dyn SatSolverFactory>,
}

impl GadgetGraphEnumerator {
    /// Builds an enumerator for the given problem, relying on the default SAT
    /// backend.
    pub fn new(problem: &GadgetProblem) -> Self {
        Self::new_with_sat_solver_factory(problem, Box::new(DefaultSatSolverFactory))
    }

    /// Builds an enumerator for the given problem, taking SAT backends from
    /// the given factory.
    pub fn new_with_sat_solver_factory(
        problem: &GadgetProblem,
        factory: Box<dyn SatSolverFactory>,
    ) -> Self {
        let mut store = VarStore::new();
        let assembled = assembler::assemble(problem, &mut store);
        Self {
            store,
            assembled,
            factory,
        }
    }

    /// Returns the variable registry of the assembled instance.
    pub fn var_store(&self) -> &VarStore {
        &self.store
    }

    /// Returns the assembled instance.
    pub fn assembled(&self) -> &AssembledConstraints {
        &self.assembled
    }

    /// Enumerates all the solutions of the problem, reporting each to the
    /// given callback with its 1-based index.
    ///
    /// Each reported solution is then excluded by its adjacency valuation and
    /// the search goes on, until the constraints become unsatisfiable. The
    /// number of solutions found is returned. An error raised by the callback
    /// aborts the enumeration.
    pub fn enumerate(
        &self,
        on_solution: &mut dyn FnMut(usize, &AdjacencyMatrix) -> Result<()>,
    ) -> Result<usize> {
        let mut solver =
            FormulaSolver::new_with_sat_solver_factory(self.store.len(), self.factory.as_ref());
        self.assembled
            .constraints()
            .iter()
            .for_each(|f| solver.assert(f));
        let start = Instant::now();
        let mut n_solutions = 0;
        loop {
            match solver.check() {
                FormulaCheck::Satisfiable(interpretation) => {
                    n_solutions += 1;
                    info!(
                        "solution {} found after {:.3}s",
                        n_solutions,
                        start.elapsed().as_secs_f64()
                    );
                    let matrix = self
                        .assembled
                        .graph()
                        .decode(|v| interpretation.value_of(v));
                    on_solution(n_solutions, &matrix)?;
                    solver.exclude(self.assembled.graph().vars(), &interpretation);
                }
                FormulaCheck::Unsatisfiable => {
                    info!(
                        "no more solutions after {} solution(s); search took {:.3}s",
                        n_solutions,
                        start.elapsed().as_secs_f64()
                    );
                    return Ok(n_solutions);
                }
                FormulaCheck::Unknown => {
                    return Err(anyhow!("the SAT backend gave up without an answer"))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_solutions(problem: &GadgetProblem) -> Vec<AdjacencyMatrix> {
        let enumerator = GadgetGraphEnumerator::new(problem);
        let mut solutions = Vec::new();
        let n = enumerator
            .enumerate(&mut |_, matrix| {
                solutions.push(matrix.clone());
                Ok(())
            })
            .unwrap();
        assert_eq!(n, solutions.len());
        solutions
    }

    #[test]
    fn test_enumerate_two_pair_matchings() {
        // of the three perfect matchings on four antennas, the two crossing
        // ones survive the lone-swap ban
        let problem = GadgetProblem::new(4, 2, 4).unwrap();
        let solutions = all_solutions(&problem);
        assert_eq!(2, solutions.len());
        let expected_a = AdjacencyMatrix::from_edges(4, &[(0, 2), (1, 3)]);
        let expected_b = AdjacencyMatrix::from_edges(4, &[(0, 3), (1, 2)]);
        assert!(solutions.contains(&expected_a));
        assert!(solutions.contains(&expected_b));
        assert_ne!(solutions[0], solutions[1]);
    }

    #[test]
    fn test_enumerate_none_when_swap_is_unavoidable() {
        // with a single antenna pair of degree 0, the swap fixing the rest is
        // always an automorphism
        let problem = GadgetProblem::new(4, 1, 2).unwrap();
        assert!(all_solutions(&problem).is_empty());
    }

    #[test]
    fn test_enumerate_none_on_paths() {
        // a degree-1 antenna pair joined by a path always admits the
        // end-swapping reversal
        let problem = GadgetProblem::new(6, 2, 2).unwrap();
        assert!(all_solutions(&problem).is_empty());
    }

    #[test]
    fn test_solutions_match_degree_targets() {
        let problem = GadgetProblem::new(4, 2, 4).unwrap();
        for matrix in all_solutions(&problem) {
            assert!(matrix.is_simple());
            for i in 0..4 {
                assert_eq!(problem.degree_target(i), matrix.degree_of(i));
            }
        }
    }
}
