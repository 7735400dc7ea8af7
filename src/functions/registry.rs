use crate::error::{DcgpError, Result};
use crate::functions::{
    primitives::{Cos, Diff, Div, Exp, Log, Mul, Sig, Sin, Sum},
    traits::BasisFunction,
};
use std::{collections::HashMap, sync::Arc};

/// Ordered list of basis functions; a function gene indexes into it.
pub type FunctionSet = Vec<Arc<dyn BasisFunction>>;

pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn BasisFunction>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            functions: HashMap::new(),
        };
        registry.register_primitives();
        registry
    }

    pub fn get_function(&self, alias: &str) -> Option<Arc<dyn BasisFunction>> {
        self.functions.get(alias).cloned()
    }

    /// Resolve aliases into a function set, preserving their order.
    pub fn function_set<S: AsRef<str>>(&self, aliases: &[S]) -> Result<FunctionSet> {
        aliases
            .iter()
            .map(|alias| {
                let alias = alias.as_ref();
                self.get_function(alias).ok_or_else(|| {
                    DcgpError::Configuration(format!("Unknown basis function: {}", alias))
                })
            })
            .collect()
    }

    pub fn aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases
    }

    pub fn register(&mut self, function: Arc<dyn BasisFunction>) {
        log::trace!("registering basis function {} ({})", function.alias(), function.ui_name());
        self.functions.insert(function.alias().to_string(), function);
    }

    fn register_primitives(&mut self) {
        let primitives: Vec<Arc<dyn BasisFunction>> = vec![
            Arc::new(Sum),
            Arc::new(Diff),
            Arc::new(Mul),
            Arc::new(Div),
            Arc::new(Sin),
            Arc::new(Cos),
            Arc::new(Exp),
            Arc::new(Log),
            Arc::new(Sig),
        ];
        for primitive in primitives {
            self.register(primitive);
        }
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
