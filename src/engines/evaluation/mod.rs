pub mod dual;
pub mod value;
pub mod evaluator;
pub mod fitness;

pub use dual::Dual;
pub use evaluator::Evaluator;
pub use value::{NodeValue, Symbol};
