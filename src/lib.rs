//! Differentiable Cartesian Genetic Programming expressions.
//!
//! An [`Expression`] encodes a parametrised mathematical expression as a
//! flat integer chromosome describing a DAG on a rows x columns grid. The
//! same dependency-ordered walk over the active part of that graph computes
//! numeric values, forward-mode derivatives (through [`Dual`]) and
//! human-readable formulas (through [`Symbol`]).
pub mod config;
pub mod engines;
pub mod error;
pub mod expression;
pub mod functions;
pub mod types;

pub use engines::evaluation::{Dual, NodeValue, Symbol};
pub use engines::generation::{Chromosome, Topology};
pub use error::{DcgpError, Result};
pub use expression::{Expression, DEFAULT_TOLERANCE};
pub use functions::{BasisFunction, FunctionRegistry, FunctionSet};
pub use types::{FitnessType, Operand};
