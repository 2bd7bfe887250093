use crate::{
    encodings::CnfEncoder,
    formula::{FormulaRef, VarStore},
    sat::{BufferedSatSolver, SatSolver},
};
use anyhow::Result;
use std::{
    cell::RefCell,
    io::{Read, Write},
    rc::Rc,
};

/// A writer exporting the clausification of an instance in DIMACS CNF
/// format, along with the mapping from variable names to DIMACS ids.
///
/// Negated existential constraints have no exact clausal rendering; they are
/// exported as the negation of their Tseitin definition literal, with the
/// quantified variables left free. The exported instance is thus weaker than
/// the instance solved by the enumeration engine.
#[derive(Default)]
pub struct DimacsWriter {}

impl DimacsWriter {
    /// Writes the clauses of the given constraints to `instance_writer` and
    /// the name-to-id mapping of the named variables to `mapping_writer`.
    ///
    /// Each mapping line holds a variable name and its DIMACS id; auxiliary
    /// definition variables get ids above the named range and appear in no
    /// mapping line.
    pub fn write(
        &self,
        store: &VarStore,
        constraints: &[FormulaRef],
        instance_writer: &mut dyn Write,
        mapping_writer: &mut dyn Write,
    ) -> Result<()> {
        let instance = Rc::new(RefCell::new(Vec::new()));
        let mut solver = BufferedSatSolver::new(Box::new({
            let instance_cl = Rc::clone(&instance);
            move |mut r| {
                r.read_to_end(&mut instance_cl.borrow_mut()).unwrap();
                Box::new("s UNSATISFIABLE".as_bytes())
            }
        }));
        solver.reserve(store.len());
        let mut encoder = CnfEncoder::new(store.len());
        constraints
            .iter()
            .for_each(|f| encoder.assert(f, &mut solver));
        solver.solve();
        instance_writer.write_all(&instance.borrow())?;
        instance_writer.flush()?;
        for v in store.iter() {
            writeln!(mapping_writer, "{} {}", store.name_of(v), v.index() + 1)?;
        }
        mapping_writer.flush()?;
        Ok(())
    }
}
