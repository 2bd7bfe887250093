//! Objects used to write instances and solutions to files.

mod adjacency_writer;
pub use adjacency_writer::AdjacencyTextWriter;

mod dimacs_writer;
pub use dimacs_writer::DimacsWriter;

mod dot_writer;
pub use dot_writer::DotWriter;

mod smtlib_writer;
pub use smtlib_writer::SmtLibWriter;
