use crate::types::Operand;

/// A binary operator usable at a computation node.
///
/// Every node in the grid reads exactly two operands. Primitives that are
/// naturally unary (`sin`, `exp`, ...) act on the left operand and ignore
/// the right one, so their partial derivative with respect to the right
/// operand is zero.
pub trait BasisFunction: Send + Sync {
    /// Display name
    fn ui_name(&self) -> &'static str;

    /// Alias used in configuration files and the registry
    fn alias(&self) -> &'static str;

    /// Numeric value of the function at `(a, b)`
    fn apply(&self, a: f64, b: f64) -> f64;

    /// Partial derivative at `(a, b)` with respect to one operand
    fn derivative(&self, a: f64, b: f64, wrt: Operand) -> f64;

    /// Symbolic form composed from the operands' own symbolic forms
    fn render(&self, a: &str, b: &str) -> String;
}
