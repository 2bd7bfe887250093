use crate::graphs::AdjacencyMatrix;
use anyhow::Result;
use std::io::Write;

/// A writer dumping a solution graph as its raw adjacency matrix.
///
/// The output holds one line per node, made of contiguous 0/1 characters.
#[derive(Default)]
pub struct AdjacencyTextWriter {}

impl AdjacencyTextWriter {
    /// Writes the adjacency matrix to the provided writer.
    pub fn write(&self, matrix: &AdjacencyMatrix, writer: &mut dyn Write) -> Result<()> {
        for i in 0..matrix.n_nodes() {
            let row = (0..matrix.n_nodes())
                .map(|j| if matrix.edge(i, j) { '1' } else { '0' })
                .collect::<String>();
            writeln!(writer, "{}", row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
