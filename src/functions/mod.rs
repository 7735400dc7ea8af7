pub mod traits;
pub mod primitives;
pub mod registry;

pub use registry::{FunctionRegistry, FunctionSet};
pub use traits::BasisFunction;
