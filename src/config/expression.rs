use super::traits::ConfigSection;
use crate::error::DcgpError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpressionConfig {
    pub inputs: usize,
    pub outputs: usize,
    pub rows: usize,
    pub columns: usize,
    pub levels_back: usize,
    pub tolerance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub functions: Vec<String>,
}

impl Default for ExpressionConfig {
    fn default() -> Self {
        Self {
            inputs: 2,
            outputs: 1,
            rows: 1,
            columns: 10,
            levels_back: 10,
            tolerance: 1e-12,
            seed: None,
            functions: ["sum", "diff", "mul", "div"]
                .iter()
                .map(|alias| alias.to_string())
                .collect(),
        }
    }
}

impl ConfigSection for ExpressionConfig {
    fn section_name() -> &'static str {
        "expression"
    }

    fn validate(&self) -> Result<(), DcgpError> {
        let sizes = [
            (self.inputs, "inputs"),
            (self.outputs, "outputs"),
            (self.rows, "rows"),
            (self.columns, "columns"),
            (self.levels_back, "levels_back"),
        ];
        for (value, name) in sizes {
            if value == 0 {
                return Err(DcgpError::Configuration(format!("{} must be at least 1", name)));
            }
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(DcgpError::Configuration(
                "tolerance must be a non-negative number".to_string(),
            ));
        }
        if self.functions.is_empty() {
            return Err(DcgpError::Configuration(
                "at least one basis function is required".to_string(),
            ));
        }
        Ok(())
    }
}
