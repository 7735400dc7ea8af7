use crate::engines::generation::genome::Topology;
use std::collections::BTreeSet;

/// Nodes and genes that influence at least one output.
///
/// Derived from a chromosome by `resolve`; never edited on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSet {
    /// Reachable node ids, inputs included, ascending
    pub nodes: Vec<usize>,
    /// Genes of the active computation nodes followed by every output gene, ascending
    pub genes: Vec<usize>,
}

/// Walk back from the output genes and collect everything they depend on.
///
/// Ids come out ascending. Operands always sit in strictly earlier columns
/// than the node reading them, so ascending id order is already a valid
/// evaluation order.
pub fn resolve(topology: &Topology, chromosome: &[u32]) -> ActiveSet {
    let mut visited = BTreeSet::new();
    let mut worklist: Vec<usize> = (0..topology.outputs)
        .map(|i| chromosome[topology.output_gene(i)] as usize)
        .collect();

    while let Some(id) = worklist.pop() {
        if !visited.insert(id) || topology.is_input(id) {
            continue;
        }
        let gene = topology.node_gene(id);
        worklist.push(chromosome[gene + 1] as usize);
        worklist.push(chromosome[gene + 2] as usize);
    }

    let nodes: Vec<usize> = visited.into_iter().collect();
    let mut genes: Vec<usize> = nodes
        .iter()
        .filter(|&&id| !topology.is_input(id))
        .flat_map(|&id| {
            let gene = topology.node_gene(id);
            gene..gene + 3
        })
        .collect();
    genes.extend((0..topology.outputs).map(|i| topology.output_gene(i)));

    ActiveSet { nodes, genes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_node_chain() {
        // node2 = f(x0, x1), node3 = f(node2, x1), out = node3
        let topology = Topology::new(2, 1, 1, 2, 2).unwrap();
        let x = vec![0, 0, 1, 1, 2, 1, 3];
        let active = resolve(&topology, &x);
        assert_eq!(active.nodes, vec![0, 1, 2, 3]);
        assert_eq!(active.genes, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_unreachable_nodes_are_pruned() {
        // Output reads node 3 which only reads x1; node 2 is dead.
        let topology = Topology::new(2, 1, 1, 2, 2).unwrap();
        let x = vec![0, 0, 1, 1, 1, 1, 3];
        let active = resolve(&topology, &x);
        assert_eq!(active.nodes, vec![1, 3]);
        assert_eq!(active.genes, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_output_wired_to_input() {
        let topology = Topology::new(3, 2, 2, 2, 1).unwrap();
        let mut x = vec![0u32; topology.chromosome_len()];
        x[topology.output_gene(0)] = 2;
        x[topology.output_gene(1)] = 2;
        let active = resolve(&topology, &x);
        assert_eq!(active.nodes, vec![2]);
        assert_eq!(active.genes, vec![12, 13]);
    }

    #[test]
    fn test_shared_subgraph_is_recorded_once() {
        // node1 = f(x0, x0), node2 = f(node1, node1), outputs read node2 and node1
        let topology = Topology::new(1, 2, 1, 2, 1).unwrap();
        let x = vec![0, 0, 0, 0, 1, 1, 2, 1];
        let active = resolve(&topology, &x);
        assert_eq!(active.nodes, vec![0, 1, 2]);
        assert_eq!(active.genes, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }
}
