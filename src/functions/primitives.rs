use crate::functions::traits::BasisFunction;
use crate::types::Operand;

// --- Arithmetic ---
pub struct Sum;
impl BasisFunction for Sum {
    fn ui_name(&self) -> &'static str { "Sum" }
    fn alias(&self) -> &'static str { "sum" }
    fn apply(&self, a: f64, b: f64) -> f64 { a + b }
    fn derivative(&self, _a: f64, _b: f64, _wrt: Operand) -> f64 { 1.0 }
    fn render(&self, a: &str, b: &str) -> String {
        format!("({}+{})", a, b)
    }
}

pub struct Diff;
impl BasisFunction for Diff {
    fn ui_name(&self) -> &'static str { "Difference" }
    fn alias(&self) -> &'static str { "diff" }
    fn apply(&self, a: f64, b: f64) -> f64 { a - b }
    fn derivative(&self, _a: f64, _b: f64, wrt: Operand) -> f64 {
        match wrt {
            Operand::Left => 1.0,
            Operand::Right => -1.0,
        }
    }
    fn render(&self, a: &str, b: &str) -> String {
        format!("({}-{})", a, b)
    }
}

pub struct Mul;
impl BasisFunction for Mul {
    fn ui_name(&self) -> &'static str { "Product" }
    fn alias(&self) -> &'static str { "mul" }
    fn apply(&self, a: f64, b: f64) -> f64 { a * b }
    fn derivative(&self, a: f64, b: f64, wrt: Operand) -> f64 {
        match wrt {
            Operand::Left => b,
            Operand::Right => a,
        }
    }
    fn render(&self, a: &str, b: &str) -> String {
        format!("({}*{})", a, b)
    }
}

pub struct Div;
impl BasisFunction for Div {
    fn ui_name(&self) -> &'static str { "Quotient" }
    fn alias(&self) -> &'static str { "div" }
    // Division by zero follows IEEE 754 (inf or NaN), it is not an error.
    fn apply(&self, a: f64, b: f64) -> f64 { a / b }
    fn derivative(&self, a: f64, b: f64, wrt: Operand) -> f64 {
        match wrt {
            Operand::Left => 1.0 / b,
            Operand::Right => -a / (b * b),
        }
    }
    fn render(&self, a: &str, b: &str) -> String {
        format!("({}/{})", a, b)
    }
}

// --- Unary, acting on the left operand ---
pub struct Sin;
impl BasisFunction for Sin {
    fn ui_name(&self) -> &'static str { "Sine" }
    fn alias(&self) -> &'static str { "sin" }
    fn apply(&self, a: f64, _b: f64) -> f64 { a.sin() }
    fn derivative(&self, a: f64, _b: f64, wrt: Operand) -> f64 {
        match wrt {
            Operand::Left => a.cos(),
            Operand::Right => 0.0,
        }
    }
    fn render(&self, a: &str, _b: &str) -> String {
        format!("sin({})", a)
    }
}

pub struct Cos;
impl BasisFunction for Cos {
    fn ui_name(&self) -> &'static str { "Cosine" }
    fn alias(&self) -> &'static str { "cos" }
    fn apply(&self, a: f64, _b: f64) -> f64 { a.cos() }
    fn derivative(&self, a: f64, _b: f64, wrt: Operand) -> f64 {
        match wrt {
            Operand::Left => -a.sin(),
            Operand::Right => 0.0,
        }
    }
    fn render(&self, a: &str, _b: &str) -> String {
        format!("cos({})", a)
    }
}

pub struct Exp;
impl BasisFunction for Exp {
    fn ui_name(&self) -> &'static str { "Exponential" }
    fn alias(&self) -> &'static str { "exp" }
    fn apply(&self, a: f64, _b: f64) -> f64 { a.exp() }
    fn derivative(&self, a: f64, _b: f64, wrt: Operand) -> f64 {
        match wrt {
            Operand::Left => a.exp(),
            Operand::Right => 0.0,
        }
    }
    fn render(&self, a: &str, _b: &str) -> String {
        format!("exp({})", a)
    }
}

pub struct Log;
impl BasisFunction for Log {
    fn ui_name(&self) -> &'static str { "Natural Logarithm" }
    fn alias(&self) -> &'static str { "log" }
    fn apply(&self, a: f64, _b: f64) -> f64 { a.ln() }
    fn derivative(&self, a: f64, _b: f64, wrt: Operand) -> f64 {
        match wrt {
            Operand::Left => 1.0 / a,
            Operand::Right => 0.0,
        }
    }
    fn render(&self, a: &str, _b: &str) -> String {
        format!("log({})", a)
    }
}

pub struct Sig;
impl BasisFunction for Sig {
    fn ui_name(&self) -> &'static str { "Sigmoid" }
    fn alias(&self) -> &'static str { "sig" }
    fn apply(&self, a: f64, _b: f64) -> f64 { 1.0 / (1.0 + (-a).exp()) }
    fn derivative(&self, a: f64, b: f64, wrt: Operand) -> f64 {
        match wrt {
            Operand::Left => {
                let s = self.apply(a, b);
                s * (1.0 - s)
            }
            Operand::Right => 0.0,
        }
    }
    fn render(&self, a: &str, _b: &str) -> String {
        format!("sig({})", a)
    }
}
