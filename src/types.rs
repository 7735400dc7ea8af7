use serde::{Deserialize, Serialize};

/// How `Expression::fitness` turns prediction errors into a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FitnessType {
    /// Sum over every example/output pair of `1 / (1 + |err|)`
    #[default]
    ErrorBased,
    /// Number of example/output pairs with `|err| <= tol`
    HitsBased,
}

/// Which argument of a binary basis function a partial derivative is taken against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
}
