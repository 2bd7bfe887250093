use anyhow::{anyhow, Result};

/// An unordered pair of antenna nodes that must be swapped together.
///
/// Antenna nodes are paired by construction: the pair of index `i` groups the
/// nodes `2i` and `2i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AntennaPair {
    first: usize,
    second: usize,
}

impl AntennaPair {
    /// Returns the lowest node index of the pair.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Returns the highest node index of the pair.
    pub fn second(&self) -> usize {
        self.second
    }

    /// Returns the pair as a transposition, suitable for permutation forcing.
    pub fn as_transposition(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    /// Returns a short human-readable label for the pair, e.g. `0-1`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.first, self.second)
    }
}

/// The parameters of a gadget graph search problem.
///
/// A problem is given by the number of nodes `n`, the regular degree `k` and
/// the number of antenna nodes `c`. The nodes `0..c` are the antenna nodes;
/// each of them carries an implicit external antenna edge, which is why their
/// in-matrix degree is `k - 1` instead of `k`.
///
/// Parameter validation is made once, at construction time; every other
/// method of this object is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GadgetProblem {
    n: usize,
    k: usize,
    c: usize,
}

impl GadgetProblem {
    /// Builds a new problem from its parameters, checking them beforehand.
    ///
    /// The number of nodes must be positive, the degree must fit a simple
    /// graph (`k < n`), the antenna count must be even and at most `n`, and
    /// antenna nodes must have a positive target degree (`k >= 1` when
    /// `c > 0`).
    ///
    /// An error is returned if one of the requirements does not hold; in this
    /// case, no variable or constraint has been built.
    pub fn new(n: usize, k: usize, c: usize) -> Result<Self> {
        if n == 0 {
            return Err(anyhow!("the number of nodes must be positive"));
        }
        if k >= n {
            return Err(anyhow!(
                "a simple {}-regular graph needs more than {} nodes",
                k,
                n
            ));
        }
        if c % 2 == 1 {
            return Err(anyhow!("the number of antennas must be even (got {})", c));
        }
        if c > n {
            return Err(anyhow!(
                "the number of antennas ({}) cannot exceed the number of nodes ({})",
                c,
                n
            ));
        }
        if c > 0 && k == 0 {
            return Err(anyhow!(
                "antenna nodes need a positive degree (their in-matrix degree is k - 1)"
            ));
        }
        Ok(Self { n, k, c })
    }

    /// Returns the number of nodes of the graphs under search.
    pub fn n_nodes(&self) -> usize {
        self.n
    }

    /// Returns the regular degree of the graphs under search.
    pub fn degree(&self) -> usize {
        self.k
    }

    /// Returns the number of antenna nodes.
    pub fn n_antennas(&self) -> usize {
        self.c
    }

    /// Returns `true` iff the given node is an antenna node.
    pub fn is_antenna(&self, node: usize) -> bool {
        node < self.c
    }

    /// Returns the in-matrix degree required for the given node.
    ///
    /// Antenna nodes have degree `k - 1`, the remaining edge being the
    /// implicit external antenna edge; interior nodes have degree `k`.
    pub fn degree_target(&self, node: usize) -> usize {
        if self.is_antenna(node) {
            self.k - 1
        } else {
            self.k
        }
    }

    /// Returns the antenna pairs, in index order.
    pub fn antenna_pairs(&self) -> Vec<AntennaPair> {
        (0..self.c / 2)
            .map(|i| AntennaPair {
                first: 2 * i,
                second: 2 * i + 1,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ok() {
        let p = GadgetProblem::new(30, 3, 8).unwrap();
        assert_eq!(30, p.n_nodes());
        assert_eq!(3, p.degree());
        assert_eq!(8, p.n_antennas());
    }

    #[test]
    fn test_new_no_nodes() {
        assert!(GadgetProblem::new(0, 0, 0).is_err());
    }

    #[test]
    fn test_new_degree_too_high() {
        assert!(GadgetProblem::new(4, 4, 2).is_err());
    }

    #[test]
    fn test_new_odd_antenna_count() {
        assert!(GadgetProblem::new(10, 3, 5).is_err());
    }

    #[test]
    fn test_new_more_antennas_than_nodes() {
        assert!(GadgetProblem::new(4, 3, 6).is_err());
    }

    #[test]
    fn test_new_null_degree_with_antennas() {
        assert!(GadgetProblem::new(4, 0, 2).is_err());
    }

    #[test]
    fn test_new_null_degree_without_antennas() {
        assert!(GadgetProblem::new(4, 0, 0).is_ok());
    }

    #[test]
    fn test_degree_targets() {
        let p = GadgetProblem::new(6, 2, 2).unwrap();
        assert_eq!(1, p.degree_target(0));
        assert_eq!(1, p.degree_target(1));
        assert_eq!(2, p.degree_target(2));
        assert!(p.is_antenna(1));
        assert!(!p.is_antenna(2));
    }

    #[test]
    fn test_antenna_pairs() {
        let p = GadgetProblem::new(10, 3, 6).unwrap();
        let pairs = p.antenna_pairs();
        assert_eq!(3, pairs.len());
        assert_eq!((0, 1), pairs[0].as_transposition());
        assert_eq!((2, 3), pairs[1].as_transposition());
        assert_eq!((4, 5), pairs[2].as_transposition());
        assert_eq!("2-3", pairs[1].label());
    }

    #[test]
    fn test_no_antenna_pairs() {
        let p = GadgetProblem::new(4, 1, 0).unwrap();
        assert!(p.antenna_pairs().is_empty());
    }
}
