/// A concrete adjacency matrix, as decoded from a solver model.
///
/// The matrix is stored row-major. Models produced by the enumeration engine
/// always satisfy the structural constraints (symmetry, zero diagonal,
/// degree targets); the accessors of this type let callers and tests verify
/// it independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    entries: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Builds a matrix from its row-major entries.
    ///
    /// # Panics
    ///
    /// Panics if the number of entries is not `n * n`.
    pub fn new(n: usize, entries: Vec<bool>) -> Self {
        assert_eq!(n * n, entries.len(), "expected {} adjacency entries", n * n);
        Self { n, entries }
    }

    /// Builds a matrix of size `n` from its edge list.
    ///
    /// Each edge is registered in both directions.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut entries = vec![false; n * n];
        for &(a, b) in edges {
            entries[a * n + b] = true;
            entries[b * n + a] = true;
        }
        Self { n, entries }
    }

    /// Returns the number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.n
    }

    /// Returns `true` iff there is an edge between the two given nodes.
    pub fn edge(&self, i: usize, j: usize) -> bool {
        self.entries[i * self.n + j]
    }

    /// Returns the number of edges incident to the given node.
    pub fn degree_of(&self, node: usize) -> usize {
        (0..self.n).filter(|&j| self.edge(node, j)).count()
    }

    /// Returns `true` iff the matrix is symmetric with a zero diagonal.
    pub fn is_simple(&self) -> bool {
        (0..self.n).all(|i| !self.edge(i, i) && (0..i).all(|j| self.edge(i, j) == self.edge(j, i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges() {
        let m = AdjacencyMatrix::from_edges(3, &[(0, 1)]);
        assert_eq!(3, m.n_nodes());
        assert!(m.edge(0, 1));
        assert!(m.edge(1, 0));
        assert!(!m.edge(0, 2));
        assert!(m.is_simple());
    }

    #[test]
    fn test_degrees() {
        let m = AdjacencyMatrix::from_edges(4, &[(0, 1), (1, 2)]);
        assert_eq!(1, m.degree_of(0));
        assert_eq!(2, m.degree_of(1));
        assert_eq!(0, m.degree_of(3));
    }

    #[test]
    fn test_not_simple() {
        let mut entries = vec![false; 4];
        entries[0] = true;
        let m = AdjacencyMatrix::new(2, entries);
        assert!(!m.is_simple());
    }

    #[test]
    #[should_panic(expected = "expected 4 adjacency entries")]
    fn test_wrong_entry_count() {
        AdjacencyMatrix::new(2, vec![false; 3]);
    } // kcov-ignore
}
