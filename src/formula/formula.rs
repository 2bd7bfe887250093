use super::VarId;
use std::{collections::HashSet, rc::Rc};

/// A reference-counted handle to a formula node.
///
/// Sub-formulas are shared, not cloned: the isomorphism predicate reuses each
/// of its mid-stage matrix cells n times, and sharing keeps the formula
/// proportional to the DAG instead of the expansion tree.
pub type FormulaRef = Rc<Formula>;

/// A boolean formula over declared variables.
///
/// The connectives are the ones required by the solving interface:
/// conjunction, disjunction, negation, equality, boolean cardinality
/// (the `Sum(if x then 1 else 0) == k` idiom) and existential quantification
/// over an explicit variable range.
#[derive(Debug, PartialEq, Eq)]
pub enum Formula {
    /// A variable.
    Var(VarId),
    /// The negation of a formula.
    Not(FormulaRef),
    /// The conjunction of a set of formulas.
    And(Vec<FormulaRef>),
    /// The disjunction of a set of formulas.
    Or(Vec<FormulaRef>),
    /// The equality of two formulas.
    Iff(FormulaRef, FormulaRef),
    /// The constraint that exactly `count` of the variables are true.
    CountEq(Vec<VarId>, usize),
    /// The existential quantification of a formula over a set of variables.
    Exists(Vec<VarId>, FormulaRef),
}

impl Formula {
    /// Builds a variable formula.
    pub fn var(v: VarId) -> FormulaRef {
        Rc::new(Formula::Var(v))
    }

    /// Builds the negation of a formula.
    pub fn not(f: FormulaRef) -> FormulaRef {
        Rc::new(Formula::Not(f))
    }

    /// Builds the conjunction of the given formulas.
    pub fn and(children: Vec<FormulaRef>) -> FormulaRef {
        Rc::new(Formula::And(children))
    }

    /// Builds the disjunction of the given formulas.
    pub fn or(children: Vec<FormulaRef>) -> FormulaRef {
        Rc::new(Formula::Or(children))
    }

    /// Builds the equality of the two given formulas.
    pub fn iff(lhs: FormulaRef, rhs: FormulaRef) -> FormulaRef {
        Rc::new(Formula::Iff(lhs, rhs))
    }

    /// Builds the constraint that exactly `count` of the variables are true.
    pub fn count_eq(vars: Vec<VarId>, count: usize) -> FormulaRef {
        Rc::new(Formula::CountEq(vars, count))
    }

    /// Builds the existential quantification of `body` over `vars`.
    pub fn exists(vars: Vec<VarId>, body: FormulaRef) -> FormulaRef {
        Rc::new(Formula::Exists(vars, body))
    }

    /// Returns the set of variables occurring in this formula.
    ///
    /// Quantified variables are included; shared sub-formulas are visited
    /// once.
    pub fn variables(&self) -> HashSet<VarId> {
        let mut result = HashSet::new();
        let mut visited = HashSet::new();
        self.collect_variables(&mut visited, &mut result);
        result
    }

    fn collect_variables(
        &self,
        visited: &mut HashSet<*const Formula>,
        result: &mut HashSet<VarId>,
    ) {
        match self {
            Formula::Var(v) => {
                result.insert(*v);
            }
            Formula::Not(f) => Self::collect_child(f, visited, result),
            Formula::And(children) | Formula::Or(children) => children
                .iter()
                .for_each(|f| Self::collect_child(f, visited, result)),
            Formula::Iff(lhs, rhs) => {
                Self::collect_child(lhs, visited, result);
                Self::collect_child(rhs, visited, result);
            }
            Formula::CountEq(vars, _) => result.extend(vars.iter().copied()),
            Formula::Exists(vars, body) => {
                result.extend(vars.iter().copied());
                Self::collect_child(body, visited, result);
            }
        }
    }

    fn collect_child(
        f: &FormulaRef,
        visited: &mut HashSet<*const Formula>,
        result: &mut HashSet<VarId>,
    ) {
        if visited.insert(Rc::as_ptr(f)) {
            f.collect_variables(visited, result);
        }
    }
}
