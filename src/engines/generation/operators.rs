use crate::engines::generation::genome::{Bounds, Chromosome, GeneKind, Topology};
use rand::Rng;

/// Draw a legal value for one gene.
///
/// Operand genes are drawn uniformly from the inputs plus the levels-back
/// window of their column, so every draw satisfies `genome::validate`.
pub fn sample_gene<R: Rng>(topology: &Topology, bounds: &Bounds, gene: usize, rng: &mut R) -> u32 {
    match topology.gene_kind(gene) {
        GeneKind::Operand { column } => {
            let window = topology.operand_window(column);
            let choice = rng.gen_range(0..topology.inputs + window.len());
            let id = if choice < topology.inputs {
                choice
            } else {
                window.start + (choice - topology.inputs)
            };
            id as u32
        }
        GeneKind::Function { .. } | GeneKind::Output { .. } => {
            rng.gen_range(bounds.lb[gene]..=bounds.ub[gene])
        }
    }
}

/// Generate a random chromosome that is valid for the grid
pub fn random_chromosome<R: Rng>(topology: &Topology, bounds: &Bounds, rng: &mut R) -> Chromosome {
    (0..topology.chromosome_len())
        .map(|gene| sample_gene(topology, bounds, gene, rng))
        .collect()
}

/// Point mutation: resample `count` genes picked uniformly from `candidates`.
///
/// A gene may be picked more than once, and a draw may return the value the
/// gene already holds. Returns the indices that were touched.
pub fn mutate<R: Rng>(
    chromosome: &mut Chromosome,
    candidates: &[usize],
    count: usize,
    topology: &Topology,
    bounds: &Bounds,
    rng: &mut R,
) -> Vec<usize> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut touched = Vec::with_capacity(count);
    for _ in 0..count {
        let gene = candidates[rng.gen_range(0..candidates.len())];
        let value = sample_gene(topology, bounds, gene, rng);
        log::trace!("gene {}: {} -> {}", gene, chromosome[gene], value);
        chromosome[gene] = value;
        touched.push(gene);
    }
    touched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::genome::validate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_chromosomes_are_valid() {
        let topology = Topology::new(3, 2, 2, 6, 2).unwrap();
        let bounds = Bounds::new(&topology, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let x = random_chromosome(&topology, &bounds, &mut rng);
            assert!(validate(&topology, &bounds, &x).is_ok());
        }
    }

    #[test]
    fn test_operand_samples_reach_inputs_and_window() {
        let topology = Topology::new(2, 1, 1, 5, 1).unwrap();
        let bounds = Bounds::new(&topology, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        // Gene 13 is the first operand of node 6, in column 4.
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(sample_gene(&topology, &bounds, 13, &mut rng));
        }
        let mut seen: Vec<u32> = seen.into_iter().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 5]);
    }

    #[test]
    fn test_mutation_only_touches_candidates() {
        let topology = Topology::new(2, 1, 2, 4, 4).unwrap();
        let bounds = Bounds::new(&topology, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut x = random_chromosome(&topology, &bounds, &mut rng);
        let before = x.clone();

        let touched = mutate(&mut x, &[0, 4, 24], 10, &topology, &bounds, &mut rng);
        assert_eq!(touched.len(), 10);
        for (gene, (&old, &new)) in before.iter().zip(&x).enumerate() {
            if ![0, 4, 24].contains(&gene) {
                assert_eq!(old, new);
            }
        }
        assert!(validate(&topology, &bounds, &x).is_ok());
    }

    #[test]
    fn test_mutation_without_candidates_is_noop() {
        let topology = Topology::new(1, 1, 1, 1, 1).unwrap();
        let bounds = Bounds::new(&topology, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let mut x = random_chromosome(&topology, &bounds, &mut rng);
        let before = x.clone();
        assert!(mutate(&mut x, &[], 3, &topology, &bounds, &mut rng).is_empty());
        assert_eq!(x, before);
    }
}
