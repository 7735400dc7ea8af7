use crate::engines::evaluation::value::NodeValue;
use crate::engines::generation::genome::Topology;
use crate::error::{DcgpError, Result};
use crate::functions::registry::FunctionSet;

/// Walks the active part of a chromosome in dependency order.
///
/// The evaluator is stateless and borrows everything it reads, so the same
/// walk serves every `NodeValue` domain: numbers, dual numbers, symbols.
pub struct Evaluator<'a> {
    topology: &'a Topology,
    chromosome: &'a [u32],
    functions: &'a FunctionSet,
    active_nodes: &'a [usize],
}

impl<'a> Evaluator<'a> {
    pub fn new(
        topology: &'a Topology,
        chromosome: &'a [u32],
        functions: &'a FunctionSet,
        active_nodes: &'a [usize],
    ) -> Self {
        Self {
            topology,
            chromosome,
            functions,
            active_nodes,
        }
    }

    /// Evaluate every active node exactly once and collect the outputs.
    ///
    /// `active_nodes` must be ascending, as produced by `active_set::resolve`.
    pub fn run<T: NodeValue>(&self, inputs: &[T]) -> Result<Vec<T>> {
        let topology = self.topology;
        if inputs.len() != topology.inputs {
            return Err(DcgpError::InputSize(format!(
                "expected {} inputs, got {}",
                topology.inputs,
                inputs.len()
            )));
        }

        let mut values: Vec<Option<T>> = (0..topology.id_count()).map(|_| None).collect();
        for &id in self.active_nodes {
            let value = if topology.is_input(id) {
                inputs[id].clone()
            } else {
                let gene = topology.node_gene(id);
                let function = self
                    .functions
                    .get(self.chromosome[gene] as usize)
                    .ok_or_else(|| {
                        DcgpError::Validation(format!(
                            "node {} uses unknown function {}",
                            id, self.chromosome[gene]
                        ))
                    })?;
                let a = Self::lookup(&values, self.chromosome[gene + 1] as usize, id)?;
                let b = Self::lookup(&values, self.chromosome[gene + 2] as usize, id)?;
                T::combine(function.as_ref(), a, b)
            };
            values[id] = Some(value);
        }

        (0..topology.outputs)
            .map(|i| {
                let id = self.chromosome[topology.output_gene(i)] as usize;
                values
                    .get(id)
                    .and_then(Option::clone)
                    .ok_or_else(|| {
                        DcgpError::Validation(format!("output {} reads inactive node {}", i, id))
                    })
            })
            .collect()
    }

    fn lookup<T>(values: &[Option<T>], operand: usize, reader: usize) -> Result<&T> {
        values.get(operand).and_then(Option::as_ref).ok_or_else(|| {
            DcgpError::Validation(format!(
                "node {} reads node {} before it was evaluated",
                reader, operand
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::evaluation::value::Symbol;
    use crate::engines::generation::active_set::resolve;
    use crate::functions::FunctionRegistry;

    fn setup() -> (Topology, Vec<u32>, FunctionSet) {
        // node2 = x0 + x1, node3 = node2 * x1, out = node3
        let topology = Topology::new(2, 1, 1, 2, 2).unwrap();
        let functions = FunctionRegistry::new().function_set(&["sum", "mul"]).unwrap();
        (topology, vec![0, 0, 1, 1, 2, 1, 3], functions)
    }

    #[test]
    fn test_numeric_walk() {
        let (topology, x, functions) = setup();
        let active = resolve(&topology, &x);
        let evaluator = Evaluator::new(&topology, &x, &functions, &active.nodes);
        assert_eq!(evaluator.run(&[2.0, 3.0]).unwrap(), vec![15.0]);
    }

    #[test]
    fn test_symbolic_walk() {
        let (topology, x, functions) = setup();
        let active = resolve(&topology, &x);
        let evaluator = Evaluator::new(&topology, &x, &functions, &active.nodes);
        let out = evaluator.run(&[Symbol::input(0), Symbol::input(1)]).unwrap();
        assert_eq!(out, vec![Symbol("((x0+x1)*x1)".to_string())]);
    }

    #[test]
    fn test_wrong_input_size() {
        let (topology, x, functions) = setup();
        let active = resolve(&topology, &x);
        let evaluator = Evaluator::new(&topology, &x, &functions, &active.nodes);
        assert!(matches!(evaluator.run(&[1.0]), Err(DcgpError::InputSize(_))));
    }

    #[test]
    fn test_stale_active_set_is_reported() {
        let (topology, x, functions) = setup();
        // Only the output node, its operands were never evaluated.
        let evaluator = Evaluator::new(&topology, &x, &functions, &[3]);
        assert!(matches!(evaluator.run(&[1.0, 2.0]), Err(DcgpError::Validation(_))));
    }
}
