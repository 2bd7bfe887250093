use super::{sat_solver::SolvingResult, Assignment, Literal, SatSolver, SolvingListener};
use cadical::Solver as CadicalCSolver;

/// A wrapper around the Cadical SAT solver.
#[derive(Default)]
pub struct CadicalSolver {
    solver: CadicalCSolver,
    n_clauses: usize,
    reserved_vars: usize,
    listeners: Vec<Box<dyn SolvingListener>>,
}

impl SatSolver for CadicalSolver {
    fn add_clause(&mut self, cl: Vec<Literal>) {
        self.n_clauses += 1;
        self.solver
            .add_clause(cl.into_iter().map(|l| isize::from(l) as i32))
    }

    fn solve(&mut self) -> SolvingResult {
        self.solve_under_assumptions(&[])
    }

    fn solve_under_assumptions(&mut self, assumptions: &[Literal]) -> SolvingResult {
        self.listeners
            .iter()
            .for_each(|l| l.solving_start(self.n_vars(), self.n_clauses));
        let result = match self
            .solver
            .solve_with(assumptions.iter().map(|l| isize::from(*l) as i32))
        {
            Some(true) => {
                let mut assignment: Vec<Option<bool>> = (1..=self.solver.max_variable())
                    .map(|i| self.solver.value(i))
                    .collect();
                // reserved variables absent from the clauses stay unassigned
                assignment.resize(self.n_vars(), None);
                SolvingResult::Satisfiable(Assignment::new(assignment))
            }
            Some(false) => SolvingResult::Unsatisfiable,
            None => SolvingResult::Unknown,
        };
        self.listeners.iter().for_each(|l| l.solving_end(&result));
        result
    }

    fn n_vars(&self) -> usize {
        usize::max(self.solver.max_variable() as usize, self.reserved_vars)
    }

    fn reserve(&mut self, new_max_id: usize) {
        if new_max_id > self.reserved_vars {
            self.reserved_vars = new_max_id;
        }
    }

    fn add_listener(&mut self, listener: Box<dyn SolvingListener>) {
        self.listeners.push(listener);
    }
}
