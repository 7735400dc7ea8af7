use super::traits::ConfigSection;
use crate::error::DcgpError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    /// Genes resampled per mutation step
    pub genes_per_mutation: usize,
    /// Restrict mutation to the active genes
    pub active_only: bool,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            genes_per_mutation: 1,
            active_only: false,
        }
    }
}

impl ConfigSection for MutationConfig {
    fn section_name() -> &'static str {
        "mutation"
    }

    fn validate(&self) -> Result<(), DcgpError> {
        if self.genes_per_mutation == 0 {
            return Err(DcgpError::Configuration(
                "genes_per_mutation must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
