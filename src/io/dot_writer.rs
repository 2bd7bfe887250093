use crate::graphs::{AdjacencyMatrix, GadgetProblem};
use anyhow::Result;
use std::io::Write;

/// A writer rendering a solution graph using the Graphviz DOT format.
///
/// The implicit antenna edges are materialized: each antenna node is linked
/// to a red filled marker node, making the antennas stand out when the graph
/// is rendered.
#[derive(Default)]
pub struct DotWriter {}

impl DotWriter {
    /// Writes a solution graph of the given problem to the provided writer.
    pub fn write(
        &self,
        problem: &GadgetProblem,
        matrix: &AdjacencyMatrix,
        writer: &mut dyn Write,
    ) -> Result<()> {
        writeln!(writer, "digraph {{")?;
        for i in 0..problem.n_antennas() {
            writeln!(writer, "  A{} [color=red, style=filled]", i)?;
            writeln!(writer, "  A{} -> {} [color=red, dir=none]", i, i)?;
        }
        for i in 0..matrix.n_nodes() {
            for j in i + 1..matrix.n_nodes() {
                if matrix.edge(i, j) {
                    writeln!(writer, "  {} -> {} [dir=none]", i, j)?;
                }
            }
        }
        writeln!(writer, "}}")?;
        writer.flush()?;
        Ok(())
    }
}
