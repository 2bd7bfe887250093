//! The assembly of a full gadget search instance: structural constraints
//! plus the automorphism requirements on antenna pairs.

use super::{graph_constraints, graph_constraints::GraphEncoding, isomorphism};
use crate::{
    formula::{Formula, FormulaRef, VarStore},
    graphs::GadgetProblem,
};
use log::debug;

/// A fully assembled search instance.
pub struct AssembledConstraints {
    graph: GraphEncoding,
    constraints: Vec<FormulaRef>,
}

impl AssembledConstraints {
    /// Returns the adjacency encoding of the instance.
    pub fn graph(&self) -> &GraphEncoding {
        &self.graph
    }

    /// Returns the constraints of the instance.
    pub fn constraints(&self) -> &[FormulaRef] {
        &self.constraints
    }
}

/// Builds all the constraints of the given problem.
///
/// On top of the structural graph constraints, two families of automorphism
/// requirements are asserted. For each unordered combination of two antenna
/// pairs, the graph must admit an automorphism swapping both pairs at once.
/// For each single antenna pair, the graph must NOT admit an automorphism
/// swapping that pair alone while fixing every other antenna. Problems with
/// less than two antenna pairs get no joint requirement.
pub fn assemble(problem: &GadgetProblem, store: &mut VarStore) -> AssembledConstraints {
    let (graph, mut constraints) = graph_constraints::encode(problem, store);
    let pairs = problem.antenna_pairs();
    for a in 0..pairs.len() {
        for b in a + 1..pairs.len() {
            let label = format!("{}_{}", pairs[a].label(), pairs[b].label());
            debug!("requiring a joint swap automorphism for pairs {}", label);
            constraints.push(isomorphism::holds(
                &graph,
                problem.n_antennas(),
                &[pairs[a], pairs[b]],
                &label,
                store,
            ));
        }
    }
    for &pair in &pairs {
        debug!("forbidding a lone swap automorphism for pair {}", pair.label());
        constraints.push(Formula::not(isomorphism::holds(
            &graph,
            problem.n_antennas(),
            &[pair],
            &pair.label(),
            store,
        )));
    }
    AssembledConstraints { graph, constraints }
}
