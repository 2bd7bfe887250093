//! The structural constraints making the adjacency matrix a valid gadget
//! graph: symmetry, zero diagonal and per-node degree targets.

use crate::{
    formula::{Formula, FormulaRef, VarId, VarKey, VarStore},
    graphs::{AdjacencyMatrix, GadgetProblem},
};

/// The adjacency variable grid of a problem.
///
/// All n² entries are materialized; the symmetry of the relation is enforced
/// by constraints, not by halving the grid.
pub struct GraphEncoding {
    n: usize,
    vars: Vec<VarId>,
}

impl GraphEncoding {
    /// Returns the number of nodes of the encoded graph.
    pub fn n_nodes(&self) -> usize {
        self.n
    }

    /// Returns the variable encoding the adjacency entry at the given
    /// position.
    pub fn var(&self, row: usize, col: usize) -> VarId {
        self.vars[row * self.n + col]
    }

    /// Returns all the adjacency variables, in row-major order.
    pub fn vars(&self) -> &[VarId] {
        &self.vars
    }

    /// Decodes a concrete adjacency matrix from a variable valuation.
    ///
    /// Unassigned variables are read as `false`.
    pub fn decode<F>(&self, value_of: F) -> AdjacencyMatrix
    where
        F: Fn(VarId) -> Option<bool>,
    {
        AdjacencyMatrix::new(
            self.n,
            self.vars
                .iter()
                .map(|&v| value_of(v).unwrap_or(false))
                .collect(),
        )
    }
}

/// Declares the adjacency variables of the given problem and builds its
/// structural constraints.
///
/// The constraints assert a zero diagonal, the symmetry of the relation
/// (each unordered pair once), and the row degree targets: `k - 1` for
/// antenna rows, `k` for interior rows.
pub fn encode(problem: &GadgetProblem, store: &mut VarStore) -> (GraphEncoding, Vec<FormulaRef>) {
    let n = problem.n_nodes();
    let vars: Vec<VarId> = (0..n)
        .flat_map(|row| (0..n).map(move |col| VarKey::Adjacency { row, col }))
        .map(|key| store.declare(key))
        .collect();
    let encoding = GraphEncoding { n, vars };
    let mut constraints = Vec::with_capacity(n + n * (n - 1) / 2 + n);
    for i in 0..n {
        constraints.push(Formula::not(Formula::var(encoding.var(i, i))));
    }
    for i in 0..n {
        for j in i + 1..n {
            constraints.push(Formula::iff(
                Formula::var(encoding.var(i, j)),
                Formula::var(encoding.var(j, i)),
            ));
        }
    }
    for i in 0..n {
        let row: Vec<VarId> = (0..n).map(|j| encoding.var(i, j)).collect();
        constraints.push(Formula::count_eq(row, problem.degree_target(i)));
    }
    (encoding, constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        encodings::CnfEncoder,
        sat::{default_solver, SatSolver},
    };

    fn solve_structural(problem: &GadgetProblem) -> Option<AdjacencyMatrix> {
        let mut store = VarStore::new();
        let (encoding, constraints) = encode(problem, &mut store);
        let mut solver = default_solver();
        solver.reserve(store.len());
        let mut encoder = CnfEncoder::new(store.len());
        constraints
            .iter()
            .for_each(|f| encoder.assert(f, solver.as_mut()));
        solver.solve().unwrap_model().map(|assignment| {
            encoding.decode(|v| assignment.value_of(CnfEncoder::literal_of_var(v).var()))
        })
    }

    #[test]
    fn test_var_count() {
        let mut store = VarStore::new();
        let problem = GadgetProblem::new(6, 2, 2).unwrap();
        let (encoding, _) = encode(&problem, &mut store);
        assert_eq!(36, store.len());
        assert_eq!(36, encoding.vars().len());
    }

    #[test]
    fn test_model_is_simple_with_degree_targets() {
        let problem = GadgetProblem::new(6, 2, 2).unwrap();
        let matrix = solve_structural(&problem).unwrap();
        assert!(matrix.is_simple());
        for i in 0..6 {
            assert_eq!(problem.degree_target(i), matrix.degree_of(i));
        }
    }

    #[test]
    fn test_unsat_structural() {
        // 3 nodes of degree 1 would need an odd edge count
        let problem = GadgetProblem::new(3, 1, 0).unwrap();
        assert!(solve_structural(&problem).is_none());
    }

    #[test]
    fn test_reencoding_is_idempotent() {
        let problem = GadgetProblem::new(8, 3, 4).unwrap();
        let mut store_1 = VarStore::new();
        let (_, constraints_1) = encode(&problem, &mut store_1);
        let mut store_2 = VarStore::new();
        let (_, constraints_2) = encode(&problem, &mut store_2);
        assert_eq!(store_1.len(), store_2.len());
        assert_eq!(constraints_1, constraints_2);
    }
}
