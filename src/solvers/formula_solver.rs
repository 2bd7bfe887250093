//! A solving driver deciding formulas with negated existential constraints
//! on top of plain SAT backends.

use crate::{
    encodings::CnfEncoder,
    formula::{Formula, FormulaRef, VarId},
    sat::{Literal, SatSolver, SatSolverFactory, SolvingListener, SolvingResult},
};
use log::debug;
use std::collections::HashSet;

/// A valuation of the named variables of an instance.
///
/// Variables the backend left unassigned carry no value; readers decide how
/// to interpret them.
pub struct Interpretation(Vec<Option<bool>>);

impl Interpretation {
    /// Returns the value given to the variable, if any.
    pub fn value_of(&self, v: VarId) -> Option<bool> {
        self.0.get(v.index()).copied().flatten()
    }
}

/// The result of a formula satisfiability check.
pub enum FormulaCheck {
    /// The constraints are satisfiable; a model is provided.
    Satisfiable(Interpretation),
    /// The constraints are unsatisfiable.
    Unsatisfiable,
    /// A backend gave up without a definitive answer.
    Unknown,
}

struct Obligation {
    free_vars: Vec<VarId>,
    body: FormulaRef,
}

/// A solver deciding conjunctions of formulas which may include negated
/// existential quantifications.
///
/// Plain constraints (including positive existential ones) are clausified
/// into a persistent backend solver. A negated existential cannot be
/// clausified directly; it is kept as an obligation on the candidate models.
/// Each candidate found by the backend is checked against every obligation
/// with a fresh solver in which the obligation's free variables are fixed to
/// their candidate values; a violated obligation yields a clause refuting the
/// candidate's free-variable valuation, and the search resumes. An obligation
/// only depends on its free variables, so the refutation clause removes no
/// actual model, and the finite valuation space makes the loop terminate.
pub struct FormulaSolver<'f> {
    n_named: usize,
    factory: &'f dyn SatSolverFactory,
    main: Box<dyn SatSolver>,
    encoder: CnfEncoder,
    obligations: Vec<Obligation>,
}

impl<'f> FormulaSolver<'f> {
    /// Builds a new solver for an instance with the given number of named
    /// variables, taking backends from the given factory.
    pub fn new_with_sat_solver_factory(n_named: usize, factory: &'f dyn SatSolverFactory) -> Self {
        let mut main = factory.new_solver();
        main.reserve(n_named);
        main.add_listener(Box::new(SolvingLogger));
        Self {
            n_named,
            factory,
            main,
            encoder: CnfEncoder::new(n_named),
            obligations: Vec::new(),
        }
    }

    /// Asserts a constraint.
    pub fn assert(&mut self, f: &FormulaRef) {
        match f.as_ref() {
            Formula::And(children) => children.iter().for_each(|c| self.assert(c)),
            Formula::Not(g) => {
                if let Formula::Exists(bound, body) = g.as_ref() {
                    let bound_set: HashSet<VarId> = bound.iter().copied().collect();
                    let mut free_vars: Vec<VarId> = body
                        .variables()
                        .into_iter()
                        .filter(|v| !bound_set.contains(v))
                        .collect();
                    free_vars.sort_unstable();
                    self.obligations.push(Obligation {
                        free_vars,
                        body: body.clone(),
                    });
                } else {
                    self.encoder.assert(f, self.main.as_mut());
                }
            }
            _ => self.encoder.assert(f, self.main.as_mut()),
        }
    }

    /// Checks the satisfiability of the constraints asserted so far.
    pub fn check(&mut self) -> FormulaCheck {
        loop {
            let assignment = match self.main.solve() {
                SolvingResult::Satisfiable(assignment) => assignment,
                SolvingResult::Unsatisfiable => return FormulaCheck::Unsatisfiable,
                SolvingResult::Unknown => return FormulaCheck::Unknown,
            };
            let interpretation =
                Interpretation((1..=self.n_named).map(|i| assignment.value_of(i)).collect());
            let mut refutation = None;
            for obligation in &self.obligations {
                match self.check_obligation(obligation, &interpretation) {
                    SolvingResult::Satisfiable(_) => {
                        refutation =
                            Some(Self::exclusion_clause(&obligation.free_vars, &interpretation));
                        break;
                    }
                    SolvingResult::Unsatisfiable => {}
                    SolvingResult::Unknown => return FormulaCheck::Unknown,
                }
            }
            match refutation {
                Some(clause) => self.main.add_clause(clause),
                None => return FormulaCheck::Satisfiable(interpretation),
            }
        }
    }

    /// Adds a clause refuting the valuation of the given variables in the
    /// given model.
    ///
    /// This is the device enumeration is built on: excluding the adjacency
    /// valuation of each reported solution forces the next check to produce
    /// a new one.
    pub fn exclude(&mut self, vars: &[VarId], interpretation: &Interpretation) {
        self.main
            .add_clause(Self::exclusion_clause(vars, interpretation));
    }

    fn check_obligation(
        &self,
        obligation: &Obligation,
        interpretation: &Interpretation,
    ) -> SolvingResult {
        let mut solver = self.factory.new_solver();
        solver.reserve(self.n_named);
        let mut encoder = CnfEncoder::new(self.n_named);
        for &v in &obligation.free_vars {
            let lit = CnfEncoder::literal_of_var(v);
            solver.add_clause(vec![if interpretation.value_of(v).unwrap_or(false) {
                lit
            } else {
                lit.negate()
            }]);
        }
        encoder.assert(&obligation.body, solver.as_mut());
        solver.solve()
    }

    fn exclusion_clause(vars: &[VarId], interpretation: &Interpretation) -> Vec<Literal> {
        vars.iter()
            .map(|&v| {
                let lit = CnfEncoder::literal_of_var(v);
                if interpretation.value_of(v).unwrap_or(false) {
                    lit.negate()
                } else {
                    lit
                }
            })
            .collect()
    }
}

struct SolvingLogger;

impl SolvingListener for SolvingLogger {
    fn solving_start(&self, n_vars: usize, n_clauses: usize) {
        debug!(
            "launching the SAT backend on {} variable(s) and {} clause(s)",
            n_vars, n_clauses
        );
    }

    fn solving_end(&self, result: &SolvingResult) {
        let answer = match result {
            SolvingResult::Satisfiable(_) => "SAT",
            SolvingResult::Unsatisfiable => "UNSAT",
            SolvingResult::Unknown => "UNKNOWN",
        };
        debug!("the SAT backend answered {}", answer);
    }
}
