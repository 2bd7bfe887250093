//! A Tseitin-style clausifier turning formulas into clauses of a SAT solver.

use crate::{
    formula::{Formula, FormulaRef, VarId},
    sat::{Literal, SatSolver, Variable},
};
use std::{collections::HashMap, rc::Rc};

/// An encoder translating formulas into the clause set of a SAT solver.
///
/// Variable ids are mapped to solver variables by shifting the dense id space
/// by one, so the ids appearing in the clauses are stable across encoders.
/// Auxiliary definition variables are allocated above the named range; each
/// shared sub-formula is defined once and its definition literal reused.
pub struct CnfEncoder {
    next_free: usize,
    cache: HashMap<*const Formula, Literal>,
    pinned: Vec<FormulaRef>,
    true_lit: Option<Literal>,
}

impl CnfEncoder {
    /// Builds an encoder for an instance with the given number of named
    /// variables.
    ///
    /// Auxiliary variables are allocated starting right after the named
    /// range.
    pub fn new(n_named_vars: usize) -> Self {
        Self {
            next_free: n_named_vars + 1,
            cache: HashMap::new(),
            pinned: Vec::new(),
            true_lit: None,
        }
    }

    /// Returns the positive solver literal associated with a named variable.
    pub fn literal_of_var(v: VarId) -> Literal {
        Literal::from((v.index() + 1) as isize)
    }

    /// Returns the highest solver variable id allocated so far.
    pub fn n_vars(&self) -> usize {
        self.next_free - 1
    }

    /// Asserts a formula, adding its clauses to the solver.
    ///
    /// Top-level conjunctions are split instead of being reified, so plain
    /// constraints cost no auxiliary variable.
    pub fn assert(&mut self, f: &FormulaRef, solver: &mut dyn SatSolver) {
        match f.as_ref() {
            Formula::And(children) => children.iter().for_each(|c| self.assert(c, solver)),
            Formula::Exists(_, body) => self.assert(body, solver),
            _ => {
                let lit = self.literal(f, solver);
                solver.add_clause(vec![lit]);
            }
        }
    }

    fn literal(&mut self, f: &FormulaRef, solver: &mut dyn SatSolver) -> Literal {
        if let Some(&lit) = self.cache.get(&Rc::as_ptr(f)) {
            return lit;
        }
        let lit = match f.as_ref() {
            Formula::Var(v) => return Self::literal_of_var(*v),
            Formula::Not(g) => return self.literal(g, solver).negate(),
            Formula::Exists(_, body) => return self.literal(body, solver),
            Formula::And(children) => {
                let lits: Vec<Literal> =
                    children.iter().map(|c| self.literal(c, solver)).collect();
                self.define_and(&lits, solver)
            }
            Formula::Or(children) => {
                let lits: Vec<Literal> =
                    children.iter().map(|c| self.literal(c, solver)).collect();
                self.define_or(&lits, solver)
            }
            Formula::Iff(lhs, rhs) => {
                let l = self.literal(lhs, solver);
                let r = self.literal(rhs, solver);
                self.define_iff(l, r, solver)
            }
            Formula::CountEq(vars, count) => {
                let lits: Vec<Literal> = vars.iter().map(|&v| Self::literal_of_var(v)).collect();
                self.define_count_eq(&lits, *count, solver)
            }
        };
        self.cache.insert(Rc::as_ptr(f), lit);
        self.pinned.push(Rc::clone(f));
        lit
    }

    fn fresh(&mut self, solver: &mut dyn SatSolver) -> Literal {
        let v = Variable::from(self.next_free);
        self.next_free += 1;
        solver.reserve(self.next_free - 1);
        Literal::of_var(v, true)
    }

    fn true_literal(&mut self, solver: &mut dyn SatSolver) -> Literal {
        match self.true_lit {
            Some(lit) => lit,
            None => {
                let lit = self.fresh(solver);
                solver.add_clause(vec![lit]);
                self.true_lit = Some(lit);
                lit
            }
        }
    }

    fn define_and(&mut self, lits: &[Literal], solver: &mut dyn SatSolver) -> Literal {
        match lits.len() {
            0 => self.true_literal(solver),
            1 => lits[0],
            _ => {
                let y = self.fresh(solver);
                let mut last = Vec::with_capacity(lits.len() + 1);
                last.push(y);
                for &l in lits {
                    solver.add_clause(vec![y.negate(), l]);
                    last.push(l.negate());
                }
                solver.add_clause(last);
                y
            }
        }
    }

    fn define_or(&mut self, lits: &[Literal], solver: &mut dyn SatSolver) -> Literal {
        match lits.len() {
            0 => self.true_literal(solver).negate(),
            1 => lits[0],
            _ => {
                let y = self.fresh(solver);
                let mut last = Vec::with_capacity(lits.len() + 1);
                last.push(y.negate());
                for &l in lits {
                    solver.add_clause(vec![l.negate(), y]);
                    last.push(l);
                }
                solver.add_clause(last);
                y
            }
        }
    }

    fn define_iff(&mut self, l: Literal, r: Literal, solver: &mut dyn SatSolver) -> Literal {
        let y = self.fresh(solver);
        solver.add_clause(vec![y.negate(), l.negate(), r]);
        solver.add_clause(vec![y.negate(), l, r.negate()]);
        solver.add_clause(vec![y, l, r]);
        solver.add_clause(vec![y, l.negate(), r.negate()]);
        y
    }

    /// Defines a literal equivalent to "exactly `count` of `lits` are true"
    /// through a sequential counter.
    ///
    /// The counter rows are capped at `count + 1` true inputs, which is
    /// enough to distinguish "exactly `count`" from "more than `count`".
    fn define_count_eq(
        &mut self,
        lits: &[Literal],
        count: usize,
        solver: &mut dyn SatSolver,
    ) -> Literal {
        let m = lits.len();
        if count > m {
            return self.true_literal(solver).negate();
        }
        if m == 0 {
            return self.true_literal(solver);
        }
        if count == 0 {
            let any = self.define_or(lits, solver);
            return any.negate();
        }
        let cap = usize::min(count + 1, m);
        // prev[j - 1] holds iff at least j of the lits seen so far are true
        let mut prev: Vec<Literal> = vec![lits[0]];
        for (i, &x) in lits.iter().enumerate().skip(1) {
            let len = usize::min(i + 1, cap);
            let mut current = Vec::with_capacity(len);
            for j in 1..=len {
                let lit = if j == 1 {
                    self.define_or(&[prev[0], x], solver)
                } else if j <= prev.len() {
                    let carry = self.define_and(&[x, prev[j - 2]], solver);
                    self.define_or(&[prev[j - 1], carry], solver)
                } else {
                    self.define_and(&[x, prev[j - 2]], solver)
                };
                current.push(lit);
            }
            prev = current;
        }
        if count < m {
            self.define_and(&[prev[count - 1], prev[count].negate()], solver)
        } else {
            prev[count - 1]
        }
    }
}
