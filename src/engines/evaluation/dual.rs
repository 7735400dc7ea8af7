/// A forward-mode dual number: `val` carries the value and `eps` the
/// derivative with respect to the one seeded input.
///
/// Arithmetic happens in the basis functions' `derivative` face, see
/// `NodeValue for Dual`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual {
    pub val: f64,
    pub eps: f64,
}

impl Dual {
    pub fn new(val: f64, eps: f64) -> Self {
        Self { val, eps }
    }

    /// A value that does not depend on the seeded input
    pub fn constant(val: f64) -> Self {
        Self::new(val, 0.0)
    }

    /// The seeded input itself
    pub fn variable(val: f64) -> Self {
        Self::new(val, 1.0)
    }

    /// Contribution of one operand to the output derivative.
    ///
    /// A zero partial or a zero tangent contributes exactly nothing, even
    /// when the other factor is NaN or infinite.
    pub(crate) fn tangent_term(partial: f64, eps: f64) -> f64 {
        if partial == 0.0 || eps == 0.0 {
            0.0
        } else {
            partial * eps
        }
    }
}
