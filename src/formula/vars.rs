/// The identifier of a boolean variable.
///
/// Identifiers form a dense zero-based integer space, assigned by the
/// [`VarStore`] that declared the variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(usize);

impl VarId {
    /// Returns the position of this variable in its store's dense id space.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The identifier of an isomorphism predicate instance.
///
/// Each predicate instance owns its permutation variable grid; keying the
/// permutation variables by instance guarantees grids built for different
/// predicates cannot be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(usize);

/// The structured identity of a boolean variable.
///
/// Variables are identified by their role and matrix position instead of a
/// formatted name, avoiding the collision and parsing hazards of
/// name-concatenation schemes. Display names are derived from keys when
/// writing the DIMACS mapping file or the SMT-LIB dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarKey {
    /// An entry of the adjacency matrix under search.
    Adjacency {
        /// The row of the entry.
        row: usize,
        /// The column of the entry.
        col: usize,
    },
    /// An entry of the permutation matrix of a predicate instance.
    Permutation {
        /// The owning predicate instance.
        instance: InstanceId,
        /// The row of the entry.
        row: usize,
        /// The column of the entry.
        col: usize,
    },
}

/// The registry of declared variables and predicate instances.
///
/// The store maps structured [`VarKey`]s to dense [`VarId`]s, and keeps a
/// label per predicate instance for display purposes.
#[derive(Debug, Default)]
pub struct VarStore {
    keys: Vec<VarKey>,
    instance_labels: Vec<String>,
}

impl VarStore {
    /// Builds a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a new variable and returns its identifier.
    pub fn declare(&mut self, key: VarKey) -> VarId {
        self.keys.push(key);
        VarId(self.keys.len() - 1)
    }

    /// Registers a new predicate instance with the given display label.
    pub fn new_instance(&mut self, label: String) -> InstanceId {
        self.instance_labels.push(label);
        InstanceId(self.instance_labels.len() - 1)
    }

    /// Returns the number of declared variables.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` iff no variable has been declared yet.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the structured key of a variable.
    pub fn key_of(&self, v: VarId) -> VarKey {
        self.keys[v.0]
    }

    /// Returns the display name of a variable.
    ///
    /// Matrix positions are rendered 1-based: the adjacency entry (0, 1) is
    /// named `x_1_2`, and the permutation entry (0, 1) of an instance
    /// labelled `2-3` is named `2-3_1_2`.
    pub fn name_of(&self, v: VarId) -> String {
        match self.keys[v.0] {
            VarKey::Adjacency { row, col } => format!("x_{}_{}", row + 1, col + 1),
            VarKey::Permutation { instance, row, col } => format!(
                "{}_{}_{}",
                self.instance_labels[instance.0],
                row + 1,
                col + 1
            ),
        }
    }

    /// Iterates over the declared variables in id order.
    pub fn iter(&self) -> impl Iterator<Item = VarId> {
        (0..self.keys.len()).map(VarId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_is_dense() {
        let mut store = VarStore::new();
        let v0 = store.declare(VarKey::Adjacency { row: 0, col: 0 });
        let v1 = store.declare(VarKey::Adjacency { row: 0, col: 1 });
        assert_eq!(0, v0.index());
        assert_eq!(1, v1.index());
        assert_eq!(2, store.len());
    }

    #[test]
    fn test_adjacency_name() {
        let mut store = VarStore::new();
        let v = store.declare(VarKey::Adjacency { row: 0, col: 1 });
        assert_eq!("x_1_2", store.name_of(v));
    }

    #[test]
    fn test_permutation_name() {
        let mut store = VarStore::new();
        let instance = store.new_instance("0-1".to_string());
        let v = store.declare(VarKey::Permutation {
            instance,
            row: 2,
            col: 0,
        });
        assert_eq!("0-1_3_1", store.name_of(v));
    }

    #[test]
    fn test_instances_do_not_collide() {
        let mut store = VarStore::new();
        let i0 = store.new_instance("0-1".to_string());
        let i1 = store.new_instance("2-3".to_string());
        let v0 = store.declare(VarKey::Permutation {
            instance: i0,
            row: 0,
            col: 0,
        });
        let v1 = store.declare(VarKey::Permutation {
            instance: i1,
            row: 0,
            col: 0,
        });
        assert_ne!(v0, v1);
        assert_ne!(store.key_of(v0), store.key_of(v1));
    }
}
