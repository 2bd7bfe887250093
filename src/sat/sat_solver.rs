use super::{CadicalSolver, ExternalSatSolver};
use std::{
    fmt::Display,
    num::{NonZeroIsize, NonZeroUsize},
};

/// A variable in a SAT solver.
///
/// A variable is represented by a non-null positive integer.
/// It can be obtained through the [From] trait from an integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable(NonZeroUsize);

macro_rules! impl_var_from {
    ($t: ty) => {
        impl From<$t> for Variable {
            fn from(v: $t) -> Self {
                Self(NonZeroUsize::try_from(v as usize).unwrap())
            }
        }
    };
}
impl_var_from!(usize);
impl_var_from!(u64);
impl_var_from!(u32);

macro_rules! impl_var_from_neg {
    ($t: ty) => {
        impl From<$t> for Variable {
            fn from(v: $t) -> Self {
                if v < 0 {
                    panic!("cannot build a variable from a negative integer")
                }
                Self(NonZeroUsize::try_from(v as usize).unwrap())
            }
        }
    };
}
impl_var_from_neg!(isize);
impl_var_from_neg!(i64);
impl_var_from_neg!(i32);

impl From<Variable> for usize {
    fn from(v: Variable) -> Self {
        v.0.into()
    }
}

/// A literal in a SAT solver.
///
/// A literal is represented by a non-null integer which sign gives the
/// polarity.
/// It can be obtained through the [From] trait from a signed integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal(NonZeroIsize);

impl Literal {
    /// Returns the literal of same variable and opposite polarity.
    pub fn negate(self) -> Self {
        Self::from(-self.0.get())
    }

    /// Returns the variable the literal is built on.
    pub fn var(&self) -> Variable {
        Variable(self.0.unsigned_abs())
    }

    /// Returns the literal of the given variable with the given polarity.
    pub fn of_var(v: Variable, polarity: bool) -> Self {
        let n = usize::from(v) as isize;
        Self::from(if polarity { n } else { -n })
    }
}

macro_rules! impl_lit_from {
    ($t: ty) => {
        impl From<$t> for Literal {
            fn from(l: $t) -> Self {
                Self(NonZeroIsize::try_from(l as isize).unwrap())
            }
        }
    };
}
impl_lit_from!(isize);
impl_lit_from!(i64);
impl_lit_from!(i32);

impl From<Literal> for isize {
    fn from(l: Literal) -> Self {
        l.0.into()
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Builds a clause from a list of integers.
#[macro_export]
macro_rules! clause {
    () => (
        vec![] as Vec<Literal>
    );
    ($($x:expr),+ $(,)?) => (
        [$($x),+].into_iter().map(Literal::from).collect::<Vec<Literal>>()
    );
}

/// An assignment of a set of variables.
///
/// Inside the set of variables involved in the assignment, some may be
/// unassigned; accessing an assigned value thus returns an [Option<bool>].
#[derive(Debug, PartialEq, Eq)]
pub struct Assignment(Vec<Option<bool>>);

impl Assignment {
    pub(crate) fn new(assignment: Vec<Option<bool>>) -> Self {
        Self(assignment)
    }

    /// Returns the value potentially assigned to the variable.
    ///
    /// In case the variable is not assigned or does not belong to the
    /// assignment, [Option::None] is returned.
    pub fn value_of<T>(&self, v: T) -> Option<bool>
    where
        T: Into<Variable>,
    {
        self.0.get(usize::from(v.into()) - 1).copied().flatten()
    }

    /// Returns the number of variables involved in the assignment.
    pub fn n_vars(&self) -> usize {
        self.0.len()
    }
}

/// The result of a satisfiability query.
#[derive(Debug, PartialEq, Eq)]
pub enum SolvingResult {
    /// The query is satisfiable; a model is provided.
    Satisfiable(Assignment),
    /// The query is unsatisfiable.
    Unsatisfiable,
    /// The solver gave up without a definitive answer.
    Unknown,
}

impl SolvingResult {
    /// Returns the underlying model if it exists, or [Option::None].
    ///
    /// # Panics
    ///
    /// If the solving result is [SolvingResult::Unknown], this function
    /// panics.
    pub fn unwrap_model(self) -> Option<Assignment> {
        match self {
            SolvingResult::Satisfiable(assignment) => Some(assignment),
            SolvingResult::Unsatisfiable => None,
            SolvingResult::Unknown => {
                panic!(r#"cannot unwrap solving result when the solver returned "Unknown""#)
            }
        }
    }
}

/// A trait for objects listening to the satisfiability queries of a solver.
pub trait SolvingListener {
    /// Called before a query is issued, with the current instance size.
    fn solving_start(&self, n_vars: usize, n_clauses: usize);

    /// Called when a query returns.
    fn solving_end(&self, result: &SolvingResult);
}

/// A trait for SAT solvers.
pub trait SatSolver {
    /// Adds a clause to this solver.
    fn add_clause(&mut self, cl: Vec<Literal>);

    /// Solves the problem formed by the clauses added so far.
    fn solve(&mut self) -> SolvingResult;

    /// Solves the problem formed by the clauses added so far and the provided
    /// assumptions.
    fn solve_under_assumptions(&mut self, assumptions: &[Literal]) -> SolvingResult;

    /// Returns the number of variables involved in this solver.
    fn n_vars(&self) -> usize;

    /// Declares that variables up to the given id belong to the instance,
    /// even if no clause mentions them yet.
    fn reserve(&mut self, new_max_id: usize);

    /// Adds a listener notified of this solver's queries.
    fn add_listener(&mut self, listener: Box<dyn SolvingListener>);
}

/// A trait for factories of SAT solvers.
///
/// The solving driver needs fresh solvers for its concrete re-checks; a
/// factory lets the user select the backend (embedded or external) once for
/// the whole run.
pub trait SatSolverFactory {
    /// Builds a new solver.
    fn new_solver(&self) -> Box<dyn SatSolver>;
}

/// A factory producing instances of the default (Cadical) solver.
#[derive(Default)]
pub struct DefaultSatSolverFactory;

impl SatSolverFactory for DefaultSatSolverFactory {
    fn new_solver(&self) -> Box<dyn SatSolver> {
        Box::new(CadicalSolver::default())
    }
}

/// A factory producing external SAT solvers bound to a system command.
pub struct ExternalSatSolverFactory {
    program: String,
    options: Vec<String>,
}

impl ExternalSatSolverFactory {
    /// Builds a new factory given the solver command and its CLI options.
    pub fn new(program: String, options: Vec<String>) -> Self {
        Self { program, options }
    }
}

impl SatSolverFactory for ExternalSatSolverFactory {
    fn new_solver(&self) -> Box<dyn SatSolver> {
        Box::new(ExternalSatSolver::new(
            self.program.clone(),
            self.options.clone(),
        ))
    }
}

/// Returns an instance of the default SAT solver (Cadical).
pub fn default_solver() -> Box<dyn SatSolver> {
    Box::new(CadicalSolver::default())
}
