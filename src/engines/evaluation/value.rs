use crate::engines::evaluation::dual::Dual;
use crate::functions::traits::BasisFunction;
use crate::types::Operand;
use std::fmt;

/// A value domain the graph walk can run in.
///
/// The walk only ever needs one capability from its values: combining two
/// operands through a basis function. Each domain picks the matching face
/// of the function (numeric, derivative or symbolic).
pub trait NodeValue: Clone {
    fn combine(function: &dyn BasisFunction, a: &Self, b: &Self) -> Self;
}

impl NodeValue for f64 {
    fn combine(function: &dyn BasisFunction, a: &Self, b: &Self) -> Self {
        function.apply(*a, *b)
    }
}

impl NodeValue for f32 {
    fn combine(function: &dyn BasisFunction, a: &Self, b: &Self) -> Self {
        function.apply(f64::from(*a), f64::from(*b)) as f32
    }
}

impl NodeValue for Dual {
    // Chain rule over both operands. An ignored operand contributes nothing,
    // even when its own tangent is NaN.
    fn combine(function: &dyn BasisFunction, a: &Self, b: &Self) -> Self {
        let d_left = function.derivative(a.val, b.val, Operand::Left);
        let d_right = function.derivative(a.val, b.val, Operand::Right);
        Dual::new(
            function.apply(a.val, b.val),
            Dual::tangent_term(d_left, a.eps) + Dual::tangent_term(d_right, b.eps),
        )
    }
}

/// Symbolic form of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol(pub String);

impl Symbol {
    /// Canonical name of input terminal `i`
    pub fn input(i: usize) -> Self {
        Symbol(format!("x{}", i))
    }
}

impl NodeValue for Symbol {
    fn combine(function: &dyn BasisFunction, a: &Self, b: &Self) -> Self {
        Symbol(function.render(&a.0, &b.0))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::primitives::{Mul, Sin, Sum};

    #[test]
    fn test_dual_combine_applies_chain_rule() {
        // x * 5 with x seeded
        let out = Dual::combine(&Mul, &Dual::variable(3.0), &Dual::constant(5.0));
        assert_eq!(out, Dual::new(15.0, 5.0));
    }

    #[test]
    fn test_dual_combine_ignores_unused_operand() {
        let out = Dual::combine(&Sin, &Dual::constant(0.0), &Dual::variable(1.0));
        assert_eq!(out, Dual::new(0.0, 0.0));
    }

    #[test]
    fn test_dual_combine_masks_nan_in_unused_operand() {
        let out = Dual::combine(&Sin, &Dual::variable(0.0), &Dual::new(f64::NAN, f64::NAN));
        assert_eq!(out, Dual::new(0.0, 1.0));
    }

    #[test]
    fn test_symbol_combine() {
        let out = Symbol::combine(&Sum, &Symbol::input(0), &Symbol::input(1));
        assert_eq!(out.to_string(), "(x0+x1)");
    }

    #[test]
    fn test_f32_combine() {
        assert_eq!(f32::combine(&Sum, &1.5, &2.0), 3.5);
    }
}
