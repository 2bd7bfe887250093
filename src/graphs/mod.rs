//! Problem parameters and concrete graph values.

mod adjacency;
pub use adjacency::AdjacencyMatrix;

mod problem;
pub use problem::AntennaPair;
pub use problem::GadgetProblem;
