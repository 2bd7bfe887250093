//! The constraints making a per-instance variable grid a valid node
//! permutation: a bijection forced to swap the given transpositions and to
//! fix every other antenna node.

use crate::formula::{Formula, FormulaRef, InstanceId, VarId, VarKey, VarStore};

/// The permutation variable grid of one isomorphism predicate instance.
///
/// The grid is owned by its instance: its variables are never shared with
/// another predicate, and they are existentially quantified away once the
/// predicate is built.
pub struct PermutationEncoding {
    n: usize,
    vars: Vec<VarId>,
}

impl PermutationEncoding {
    /// Returns the variable encoding the permutation entry at the given
    /// position.
    pub fn var(&self, row: usize, col: usize) -> VarId {
        self.vars[row * self.n + col]
    }

    /// Returns all the permutation variables, in row-major order.
    pub fn vars(&self) -> &[VarId] {
        &self.vars
    }
}

/// Declares the permutation variables of a predicate instance and builds the
/// constraints making them a permutation compatible with the forced
/// transpositions.
///
/// Each row and each column holds exactly one true entry (the grid encodes a
/// bijection on node indices). For each forced transposition `(a, b)`, the
/// permutation maps `a` to `b` and `b` to `a`. Every antenna node involved in
/// no transposition is fixed. Interior nodes (indices `>= n_antennas`) are
/// left free: which interior relabeling makes the graphs equal is for the
/// solver to find.
pub fn encode(
    n: usize,
    n_antennas: usize,
    forced_transpositions: &[(usize, usize)],
    instance: InstanceId,
    store: &mut VarStore,
) -> (PermutationEncoding, Vec<FormulaRef>) {
    let vars: Vec<VarId> = (0..n)
        .flat_map(|row| (0..n).map(move |col| VarKey::Permutation { instance, row, col }))
        .map(|key| store.declare(key))
        .collect();
    let encoding = PermutationEncoding { n, vars };
    let mut constraints = Vec::new();
    for i in 0..n {
        let row: Vec<VarId> = (0..n).map(|j| encoding.var(i, j)).collect();
        constraints.push(Formula::count_eq(row, 1));
        let col: Vec<VarId> = (0..n).map(|j| encoding.var(j, i)).collect();
        constraints.push(Formula::count_eq(col, 1));
    }
    let mut swapped = vec![false; n_antennas];
    for &(a, b) in forced_transpositions {
        constraints.push(Formula::var(encoding.var(a, b)));
        constraints.push(Formula::var(encoding.var(b, a)));
        swapped[a] = true;
        swapped[b] = true;
    }
    for a in 0..n_antennas {
        if !swapped[a] {
            constraints.push(Formula::var(encoding.var(a, a)));
        }
    }
    (encoding, constraints)
}
