/// Chromosome representation for Cartesian Genetic Programming
///
/// A chromosome is a flat sequence of integers encoding a directed acyclic
/// graph laid out on an `rows x columns` grid:
/// - Three genes per computation node, in address order:
///   `[function index, operand 1 node id, operand 2 node id]`
/// - One trailing gene per output, naming the node that supplies it
///
/// Node ids `0..n` are the input terminals, ids `n..n + rows * columns` are
/// computation nodes addressed as `n + row + column * rows`.
///
/// # Why a flat encoding instead of a node graph?
///
/// Operands may only name inputs or nodes in strictly earlier columns, so a
/// chromosome that respects its bounds can never describe a cycle. There is
/// no runtime cycle detection anywhere in the crate.
pub type Chromosome = Vec<u32>;

use crate::error::{DcgpError, Result};
use std::ops::Range;

/// Shape of the grid. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    pub inputs: usize,
    pub outputs: usize,
    pub rows: usize,
    pub columns: usize,
    pub levels_back: usize,
}

/// What a single gene position encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneKind {
    /// Function index of the node with the given id
    Function { node: usize },
    /// Operand reference of a node sitting in `column`
    Operand { column: usize },
    /// Node id feeding the given output
    Output { output: usize },
}

impl Topology {
    pub fn new(
        inputs: usize,
        outputs: usize,
        rows: usize,
        columns: usize,
        levels_back: usize,
    ) -> Result<Self> {
        let checks = [
            (inputs, "number of inputs"),
            (outputs, "number of outputs"),
            (rows, "number of rows"),
            (columns, "number of columns"),
            (levels_back, "levels-back"),
        ];
        for (value, name) in checks {
            if value == 0 {
                return Err(DcgpError::Configuration(format!("{} must be at least 1", name)));
            }
        }

        let topology = Self { inputs, outputs, rows, columns, levels_back };
        let chromosome_len = rows
            .checked_mul(columns)
            .and_then(|nodes| nodes.checked_mul(3))
            .and_then(|genes| genes.checked_add(outputs));
        let id_space = rows
            .checked_mul(columns)
            .and_then(|nodes| nodes.checked_add(inputs));
        match (chromosome_len, id_space) {
            (Some(_), Some(ids)) if u32::try_from(ids).is_ok() => Ok(topology),
            _ => Err(DcgpError::Configuration(format!(
                "grid {}x{} with {} inputs does not fit a u32 gene",
                rows, columns, inputs
            ))),
        }
    }

    /// Number of computation nodes
    pub fn node_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Total number of node ids, inputs included
    pub fn id_count(&self) -> usize {
        self.inputs + self.node_count()
    }

    pub fn chromosome_len(&self) -> usize {
        3 * self.node_count() + self.outputs
    }

    pub fn is_input(&self, id: usize) -> bool {
        id < self.inputs
    }

    /// Column of a computation node. Callers must not pass an input id.
    pub fn column_of(&self, id: usize) -> usize {
        (id - self.inputs) / self.rows
    }

    /// Index of the first of the three genes describing computation node `id`
    pub fn node_gene(&self, id: usize) -> usize {
        (id - self.inputs) * 3
    }

    /// Index of the gene selecting output `i`
    pub fn output_gene(&self, i: usize) -> usize {
        3 * self.node_count() + i
    }

    /// Computation node ids a node in `column` may read from. Inputs are
    /// always readable on top of this window.
    pub fn operand_window(&self, column: usize) -> Range<usize> {
        let first_column = column.saturating_sub(self.levels_back);
        (self.inputs + first_column * self.rows)..(self.inputs + column * self.rows)
    }

    pub fn gene_kind(&self, gene: usize) -> GeneKind {
        let node_genes = 3 * self.node_count();
        if gene >= node_genes {
            return GeneKind::Output { output: gene - node_genes };
        }
        let node = self.inputs + gene / 3;
        if gene % 3 == 0 {
            GeneKind::Function { node }
        } else {
            GeneKind::Operand { column: self.column_of(node) }
        }
    }
}

/// Per-gene inclusive bounds.
///
/// Operand genes get the envelope `[0, last id of the previous column]`.
/// The envelope also admits ids that fall before the levels-back window;
/// `validate` rejects those separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub lb: Vec<u32>,
    pub ub: Vec<u32>,
}

impl Bounds {
    pub fn new(topology: &Topology, function_count: usize) -> Result<Self> {
        if function_count == 0 {
            return Err(DcgpError::Configuration(
                "at least one basis function is required".to_string(),
            ));
        }
        let max_function = u32::try_from(function_count - 1).map_err(|_| {
            DcgpError::Configuration(format!("too many basis functions: {}", function_count))
        })?;

        let len = topology.chromosome_len();
        let lb = vec![0u32; len];
        let mut ub = vec![0u32; len];

        for (gene, upper) in ub.iter_mut().enumerate() {
            // Topology::new guarantees every node id fits in a u32.
            *upper = match topology.gene_kind(gene) {
                GeneKind::Function { .. } => max_function,
                GeneKind::Operand { column } => {
                    (topology.operand_window(column).end - 1) as u32
                }
                GeneKind::Output { .. } => (topology.id_count() - 1) as u32,
            };
        }

        Ok(Self { lb, ub })
    }

    pub fn contains(&self, gene: usize, value: u32) -> bool {
        value >= self.lb[gene] && value <= self.ub[gene]
    }
}

/// Check `x` against the grid's bounds and the levels-back rule.
pub fn validate(topology: &Topology, bounds: &Bounds, x: &[u32]) -> Result<()> {
    if x.len() != topology.chromosome_len() {
        return Err(DcgpError::Validation(format!(
            "chromosome length: expected {}, got {}",
            topology.chromosome_len(),
            x.len()
        )));
    }

    for (gene, &value) in x.iter().enumerate() {
        if !bounds.contains(gene, value) {
            return Err(DcgpError::Validation(format!(
                "gene {} = {} outside [{}, {}]",
                gene, value, bounds.lb[gene], bounds.ub[gene]
            )));
        }
        if let GeneKind::Operand { column } = topology.gene_kind(gene) {
            let id = value as usize;
            if !topology.is_input(id) && !topology.operand_window(column).contains(&id) {
                return Err(DcgpError::Validation(format!(
                    "gene {} references node {} beyond levels-back {} of column {}",
                    gene, id, topology.levels_back, column
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Topology {
        // 2 inputs, 1 output, 2 rows, 3 columns, levels-back 1
        Topology::new(2, 1, 2, 3, 1).unwrap()
    }

    #[test]
    fn test_rejects_zero_parameters() {
        assert!(matches!(Topology::new(2, 1, 1, 2, 0), Err(DcgpError::Configuration(_))));
        assert!(matches!(Topology::new(0, 1, 1, 2, 1), Err(DcgpError::Configuration(_))));
    }

    #[test]
    fn test_addressing() {
        let t = grid();
        assert_eq!(t.chromosome_len(), 19);
        assert_eq!(t.column_of(2), 0);
        assert_eq!(t.column_of(3), 0);
        assert_eq!(t.column_of(4), 1);
        assert_eq!(t.column_of(7), 2);
        assert_eq!(t.node_gene(4), 6);
        assert_eq!(t.output_gene(0), 18);
        assert_eq!(t.operand_window(0), 2..2);
        assert_eq!(t.operand_window(2), 4..6);
    }

    #[test]
    fn test_gene_kinds() {
        let t = grid();
        assert_eq!(t.gene_kind(0), GeneKind::Function { node: 2 });
        assert_eq!(t.gene_kind(7), GeneKind::Operand { column: 1 });
        assert_eq!(t.gene_kind(18), GeneKind::Output { output: 0 });
    }

    #[test]
    fn test_bounds() {
        let t = grid();
        let b = Bounds::new(&t, 4).unwrap();
        assert_eq!(b.ub[0], 3);
        assert_eq!(b.ub[1], 1); // column 0 reads inputs only
        assert_eq!(b.ub[13], 5); // column 2 reads up to the last node of column 1
        assert_eq!(b.ub[18], 7);
        assert!(b.lb.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_empty_function_set_is_configuration_error() {
        assert!(matches!(Bounds::new(&grid(), 0), Err(DcgpError::Configuration(_))));
    }

    #[test]
    fn test_validate_levels_back() {
        let t = grid();
        let b = Bounds::new(&t, 2).unwrap();
        let mut x: Chromosome = vec![
            0, 0, 1, 0, 1, 0, // column 0
            0, 2, 3, 0, 0, 3, // column 1
            0, 4, 5, 0, 1, 4, // column 2
            7,
        ];
        assert!(validate(&t, &b, &x).is_ok());

        // Node 6 (column 2) pointing at node 2 (column 0) skips two columns.
        x[13] = 2;
        assert!(matches!(validate(&t, &b, &x), Err(DcgpError::Validation(_))));
    }

    #[test]
    fn test_validate_length_and_bounds() {
        let t = grid();
        let b = Bounds::new(&t, 2).unwrap();
        assert!(validate(&t, &b, &[0; 5]).is_err());

        let mut x = vec![0u32; t.chromosome_len()];
        assert!(validate(&t, &b, &x).is_ok());
        x[0] = 2; // only two functions
        assert!(validate(&t, &b, &x).is_err());
    }
}
