use crate::formula::{Formula, FormulaRef, VarKey, VarStore};
use anyhow::Result;
use std::{collections::HashMap, io::Write, rc::Rc};

/// A writer dumping an instance in SMT-LIB 2 format.
///
/// The adjacency variables are declared as constants; the permutation
/// variables only occur bound by their existential quantifier. Sub-formulas
/// shared inside a quantifier scope are rendered once through `let` bindings,
/// keeping the dump proportional to the formula DAG.
#[derive(Default)]
pub struct SmtLibWriter {}

impl SmtLibWriter {
    /// Writes the given constraints as an SMT-LIB script, ending with a
    /// `check-sat` command.
    pub fn write(
        &self,
        store: &VarStore,
        constraints: &[FormulaRef],
        writer: &mut dyn Write,
    ) -> Result<()> {
        for v in store.iter() {
            if matches!(store.key_of(v), VarKey::Adjacency { .. }) {
                writeln!(writer, "(declare-const {} Bool)", symbol(&store.name_of(v)))?;
            }
        }
        let mut binding_counter = 0;
        for f in constraints {
            writeln!(writer, "(assert {})", render_scope(store, f, &mut binding_counter))?;
        }
        writeln!(writer, "(check-sat)")?;
        writer.flush()?;
        Ok(())
    }
}

fn symbol(name: &str) -> String {
    let mut chars = name.chars();
    let simple = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if simple {
        name.to_string()
    } else {
        format!("|{}|", name)
    }
}

/// Renders a formula within its own quantifier scope.
///
/// Sub-formulas occurring more than once in the scope are bound to fresh
/// `let` names; occurrences inside a nested quantifier belong to the nested
/// scope and are not hoisted across the binder.
fn render_scope(store: &VarStore, f: &FormulaRef, binding_counter: &mut usize) -> String {
    let mut counts = HashMap::new();
    count_occurrences(f, &mut counts);
    let mut scope = Scope {
        store,
        counts,
        names: HashMap::new(),
        bindings: Vec::new(),
    };
    let mut result = scope.render(f, binding_counter);
    for (name, definition) in scope.bindings.iter().rev() {
        result = format!("(let (({} {})) {})", name, definition, result);
    }
    result
}

fn count_occurrences(f: &FormulaRef, counts: &mut HashMap<*const Formula, usize>) {
    let n = counts.entry(Rc::as_ptr(f)).or_insert(0);
    *n += 1;
    if *n > 1 {
        return;
    }
    match f.as_ref() {
        Formula::Not(g) => count_occurrences(g, counts),
        Formula::And(children) | Formula::Or(children) => {
            children.iter().for_each(|c| count_occurrences(c, counts))
        }
        Formula::Iff(lhs, rhs) => {
            count_occurrences(lhs, counts);
            count_occurrences(rhs, counts);
        }
        Formula::Var(_) | Formula::CountEq(_, _) | Formula::Exists(_, _) => {}
    }
}

struct Scope<'a> {
    store: &'a VarStore,
    counts: HashMap<*const Formula, usize>,
    names: HashMap<*const Formula, String>,
    bindings: Vec<(String, String)>,
}

impl Scope<'_> {
    fn render(&mut self, f: &FormulaRef, binding_counter: &mut usize) -> String {
        let ptr = Rc::as_ptr(f);
        let shared = self.counts.get(&ptr).copied().unwrap_or(0) > 1
            && !matches!(f.as_ref(), Formula::Var(_));
        if shared {
            if let Some(name) = self.names.get(&ptr) {
                return name.clone();
            }
        }
        let rendered = match f.as_ref() {
            Formula::Var(v) => symbol(&self.store.name_of(*v)),
            Formula::Not(g) => format!("(not {})", self.render(g, binding_counter)),
            Formula::And(children) => self.render_nary("and", "true", children, binding_counter),
            Formula::Or(children) => self.render_nary("or", "false", children, binding_counter),
            Formula::Iff(lhs, rhs) => format!(
                "(= {} {})",
                self.render(lhs, binding_counter),
                self.render(rhs, binding_counter)
            ),
            Formula::CountEq(vars, count) => {
                if vars.is_empty() {
                    format!("(= 0 {})", count)
                } else {
                    let sum = vars
                        .iter()
                        .map(|&v| format!("(ite {} 1 0)", symbol(&self.store.name_of(v))))
                        .collect::<Vec<String>>()
                        .join(" ");
                    format!("(= (+ {}) {})", sum, count)
                }
            }
            Formula::Exists(vars, body) => {
                let bound = vars
                    .iter()
                    .map(|&v| format!("({} Bool)", symbol(&self.store.name_of(v))))
                    .collect::<Vec<String>>()
                    .join(" ");
                format!(
                    "(exists ({}) {})",
                    bound,
                    render_scope(self.store, body, binding_counter)
                )
            }
        };
        if shared {
            let name = format!(".m{}", binding_counter);
            *binding_counter += 1;
            self.names.insert(ptr, name.clone());
            self.bindings.push((name.clone(), rendered));
            name
        } else {
            rendered
        }
    }

    fn render_nary(
        &mut self,
        connective: &str,
        empty: &str,
        children: &[FormulaRef],
        binding_counter: &mut usize,
    ) -> String {
        if children.is_empty() {
            return empty.to_string();
        }
        let rendered = children
            .iter()
            .map(|c| self.render(c, binding_counter))
            .collect::<Vec<String>>()
            .join(" ");
        format!("({} {})", connective, rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufWriter;

    fn write_to_string(store: &VarStore, constraints: &[FormulaRef]) -> String {
        let mut buffer = BufWriter::new(Vec::new());
        SmtLibWriter::default()
            .write(store, constraints, &mut buffer)
            .unwrap();
        String::from_utf8(buffer.into_inner().unwrap()).unwrap()
    }

    fn two_adjacency_vars() -> (VarStore, crate::formula::VarId, crate::formula::VarId) {
        let mut store = VarStore::new();
        let a = store.declare(VarKey::Adjacency { row: 0, col: 0 });
        let b = store.declare(VarKey::Adjacency { row: 0, col: 1 });
        (store, a, b)
    }

    #[test]
    fn test_write_iff() {
        let (store, a, b) = two_adjacency_vars();
        let f = Formula::iff(Formula::var(a), Formula::var(b));
        assert_eq!(
            "(declare-const x_1_1 Bool)\n(declare-const x_1_2 Bool)\n(assert (= x_1_1 x_1_2))\n(check-sat)\n",
            write_to_string(&store, &[f])
        );
    }

    #[test]
    fn test_write_count_eq() {
        let (store, a, b) = two_adjacency_vars();
        let f = Formula::count_eq(vec![a, b], 1);
        assert!(write_to_string(&store, &[f])
            .contains("(assert (= (+ (ite x_1_1 1 0) (ite x_1_2 1 0)) 1))\n"));
    }

    #[test]
    fn test_write_exists_quotes_permutation_names() {
        let (mut store, a, _) = two_adjacency_vars();
        let instance = store.new_instance("0-1".to_string());
        let p = store.declare(VarKey::Permutation {
            instance,
            row: 0,
            col: 0,
        });
        let f = Formula::exists(vec![p], Formula::or(vec![Formula::var(a), Formula::var(p)]));
        let content = write_to_string(&store, &[f]);
        assert!(content.contains("(assert (exists ((|0-1_1_1| Bool)) (or x_1_1 |0-1_1_1|)))\n"));
        assert!(!content.contains("(declare-const |0-1_1_1|"));
    }

    #[test]
    fn test_write_shared_subformula_is_let_bound() {
        let (store, a, b) = two_adjacency_vars();
        let shared = Formula::and(vec![Formula::var(a), Formula::var(b)]);
        let f = Formula::or(vec![shared.clone(), Formula::not(shared)]);
        assert!(write_to_string(&store, &[f])
            .contains("(assert (let ((.m0 (and x_1_1 x_1_2))) (or .m0 (not .m0))))\n"));
    }

    #[test]
    fn test_sharing_is_not_hoisted_across_quantifiers() {
        let (mut store, a, _) = two_adjacency_vars();
        let instance = store.new_instance("0-1".to_string());
        let p = store.declare(VarKey::Permutation {
            instance,
            row: 0,
            col: 0,
        });
        let shared = Formula::and(vec![Formula::var(a), Formula::var(p)]);
        let body = Formula::or(vec![shared.clone(), Formula::not(shared)]);
        let f = Formula::exists(vec![p], body);
        let content = write_to_string(&store, &[f]);
        // the let binding lives inside the quantifier
        assert!(content
            .contains("(exists ((|0-1_1_1| Bool)) (let ((.m0 (and x_1_1 |0-1_1_1|)))"));
    }
}
