//! The predicate stating a graph is mapped onto itself by a permutation
//! realizing a given set of antenna transpositions.

use super::{graph_constraints::GraphEncoding, permutation_constraints};
use crate::{
    formula::{Formula, FormulaRef, VarStore},
    graphs::AntennaPair,
};

/// Builds the predicate stating the existence of an automorphism of the
/// encoded graph realizing the given antenna transpositions.
///
/// The automorphism is encoded as a fresh permutation grid constrained to
/// swap each forced pair and to fix the other antennas. The permuted
/// adjacency matrix is the boolean product `P·A·P` (the conjugation of `A`
/// by `P`; `P` transposed equals `P` inverse cancels the usual transpose),
/// computed in two stages so each mid-stage cell is shared by the `n` cells
/// of the final stage reading it. The resulting formula is the existential
/// closure over the permutation grid, leaving only adjacency variables free.
pub fn holds(
    graph: &GraphEncoding,
    n_antennas: usize,
    forced_pairs: &[AntennaPair],
    label: &str,
    store: &mut VarStore,
) -> FormulaRef {
    let n = graph.n_nodes();
    let instance = store.new_instance(label.to_string());
    let transpositions: Vec<(usize, usize)> =
        forced_pairs.iter().map(AntennaPair::as_transposition).collect();
    let (perm, mut constraints) =
        permutation_constraints::encode(n, n_antennas, &transpositions, instance, store);
    let mid: Vec<Vec<FormulaRef>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    Formula::or(
                        (0..n)
                            .map(|l| {
                                Formula::and(vec![
                                    Formula::var(perm.var(i, l)),
                                    Formula::var(graph.var(l, j)),
                                ])
                            })
                            .collect(),
                    )
                })
                .collect()
        })
        .collect();
    for i in 0..n {
        for j in 0..n {
            let permuted = Formula::or(
                (0..n)
                    .map(|l| Formula::and(vec![mid[i][l].clone(), Formula::var(perm.var(l, j))]))
                    .collect(),
            );
            constraints.push(Formula::iff(permuted, Formula::var(graph.var(i, j))));
        }
    }
    Formula::exists(perm.vars().to_vec(), Formula::and(constraints))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        encodings::{graph_constraints, CnfEncoder},
        graphs::{AdjacencyMatrix, GadgetProblem},
        sat::{default_solver, SatSolver},
    };

    fn predicate_holds_on(
        problem: &GadgetProblem,
        matrix: &AdjacencyMatrix,
        forced_pairs: &[AntennaPair],
    ) -> bool {
        let mut store = VarStore::new();
        let (graph, _) = graph_constraints::encode(problem, &mut store);
        let label = forced_pairs
            .iter()
            .map(AntennaPair::label)
            .collect::<Vec<_>>()
            .join("_");
        let predicate = holds(&graph, problem.n_antennas(), forced_pairs, &label, &mut store);
        let mut solver = default_solver();
        solver.reserve(store.len());
        let mut encoder = CnfEncoder::new(store.len());
        encoder.assert(&predicate, solver.as_mut());
        for i in 0..problem.n_nodes() {
            for j in 0..problem.n_nodes() {
                let lit = CnfEncoder::literal_of_var(graph.var(i, j));
                solver.add_clause(vec![if matrix.edge(i, j) { lit } else { lit.negate() }]);
            }
        }
        solver.solve().unwrap_model().is_some()
    }

    #[test]
    fn test_swap_realized_by_path_graph() {
        // the path 0-2-3-1 maps onto itself when its two ends are swapped
        let problem = GadgetProblem::new(4, 2, 2).unwrap();
        let matrix = AdjacencyMatrix::from_edges(4, &[(0, 2), (2, 3), (3, 1)]);
        let pairs = problem.antenna_pairs();
        assert!(predicate_holds_on(&problem, &matrix, &pairs[..1]));
    }

    #[test]
    fn test_swap_needs_equal_degrees() {
        let problem = GadgetProblem::new(4, 2, 2).unwrap();
        let matrix = AdjacencyMatrix::from_edges(4, &[(0, 2), (0, 3), (1, 2)]);
        let pairs = problem.antenna_pairs();
        assert!(!predicate_holds_on(&problem, &matrix, &pairs[..1]));
    }

    #[test]
    fn test_crossing_matching_has_no_lone_swap() {
        // the crossing matching admits the joint swap but no lone one
        let problem = GadgetProblem::new(4, 2, 4).unwrap();
        let matrix = AdjacencyMatrix::from_edges(4, &[(0, 2), (1, 3)]);
        let pairs = problem.antenna_pairs();
        assert!(!predicate_holds_on(&problem, &matrix, &pairs[..1]));
        assert!(!predicate_holds_on(&problem, &matrix, &pairs[1..]));
    }

    #[test]
    fn test_joint_swap_on_two_pairs() {
        // two disjoint edges between swapped antennas survive both swaps
        let problem = GadgetProblem::new(4, 2, 4).unwrap();
        let matrix = AdjacencyMatrix::from_edges(4, &[(0, 2), (1, 3)]);
        let pairs = problem.antenna_pairs();
        assert!(predicate_holds_on(&problem, &matrix, &pairs));
    }
}
