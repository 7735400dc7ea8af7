pub mod genome;
pub mod operators;
pub mod active_set;

pub use active_set::ActiveSet;
pub use genome::{Bounds, Chromosome, GeneKind, Topology};
