use crate::config::{ConfigSection, ExpressionConfig};
use crate::engines::evaluation::{fitness, Dual, Evaluator, NodeValue, Symbol};
use crate::engines::generation::{
    active_set::{self, ActiveSet},
    genome::{self, Bounds, Chromosome, Topology},
    operators,
};
use crate::error::{DcgpError, Result};
use crate::functions::{FunctionRegistry, FunctionSet};
use crate::types::FitnessType;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// A mathematical expression encoded as a CGP chromosome.
///
/// The expression owns its chromosome together with the active set derived
/// from it. Every method that changes the chromosome (`set`, `mutate*`)
/// recomputes the active set before returning, so readers never observe
/// the two out of step.
#[derive(Clone)]
pub struct Expression {
    topology: Topology,
    functions: FunctionSet,
    bounds: Bounds,
    chromosome: Chromosome,
    active: ActiveSet,
    tol: f64,
    rng: StdRng,
}

impl Expression {
    /// Build an expression with a random valid chromosome.
    ///
    /// `seed = None` seeds the private random engine from entropy.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        inputs: usize,
        outputs: usize,
        rows: usize,
        columns: usize,
        levels_back: usize,
        functions: FunctionSet,
        tol: f64,
        seed: Option<u64>,
    ) -> Result<Self> {
        let topology = Topology::new(inputs, outputs, rows, columns, levels_back)?;
        let bounds = Bounds::new(&topology, functions.len())?;
        if tol.is_nan() || tol < 0.0 {
            return Err(DcgpError::Configuration(format!(
                "tolerance must be non-negative, got {}",
                tol
            )));
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let chromosome = operators::random_chromosome(&topology, &bounds, &mut rng);
        let active = active_set::resolve(&topology, &chromosome);

        log::info!(
            "expression {}x{} (n={}, m={}, l={}) over {} functions, {} active nodes",
            rows,
            columns,
            inputs,
            outputs,
            levels_back,
            functions.len(),
            active.nodes.len()
        );

        Ok(Self {
            topology,
            functions,
            bounds,
            chromosome,
            active,
            tol,
            rng,
        })
    }

    pub fn from_config(config: &ExpressionConfig, registry: &FunctionRegistry) -> Result<Self> {
        config.validate()?;
        let functions = registry.function_set(&config.functions)?;
        Self::new(
            config.inputs,
            config.outputs,
            config.rows,
            config.columns,
            config.levels_back,
            functions,
            config.tolerance,
            config.seed,
        )
    }

    /// Replace the chromosome. On error the expression is left untouched.
    pub fn set(&mut self, x: Chromosome) -> Result<()> {
        if let Err(e) = self.validate(&x) {
            log::warn!("rejected chromosome: {}", e);
            return Err(e);
        }
        self.active = active_set::resolve(&self.topology, &x);
        self.chromosome = x;
        log::debug!("chromosome replaced, {} active nodes", self.active.nodes.len());
        Ok(())
    }

    pub fn get(&self) -> &[u32] {
        &self.chromosome
    }

    pub fn active_genes(&self) -> &[usize] {
        &self.active.genes
    }

    pub fn active_nodes(&self) -> &[usize] {
        &self.active.nodes
    }

    pub fn lower_bounds(&self) -> &[u32] {
        &self.bounds.lb
    }

    pub fn upper_bounds(&self) -> &[u32] {
        &self.bounds.ub
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn functions(&self) -> &FunctionSet {
        &self.functions
    }

    pub fn tolerance(&self) -> f64 {
        self.tol
    }

    /// Explain why `x` is not a valid chromosome for this expression, if it is not.
    pub fn validate(&self, x: &[u32]) -> Result<()> {
        genome::validate(&self.topology, &self.bounds, x)
    }

    pub fn is_valid(&self, x: &[u32]) -> bool {
        self.validate(x).is_ok()
    }

    /// Resample one gene picked uniformly over the whole chromosome.
    pub fn mutate(&mut self) {
        self.mutate_n(1);
    }

    /// Resample `count` genes picked uniformly over the whole chromosome.
    pub fn mutate_n(&mut self, count: usize) {
        let candidates: Vec<usize> = (0..self.chromosome.len()).collect();
        let touched = operators::mutate(
            &mut self.chromosome,
            &candidates,
            count,
            &self.topology,
            &self.bounds,
            &mut self.rng,
        );
        log::debug!("mutated genes {:?}", touched);
        self.refresh_active();
    }

    /// Resample `count` genes picked among the active ones.
    pub fn mutate_active(&mut self, count: usize) {
        let touched = operators::mutate(
            &mut self.chromosome,
            &self.active.genes,
            count,
            &self.topology,
            &self.bounds,
            &mut self.rng,
        );
        log::debug!("mutated genes {:?}", touched);
        self.refresh_active();
    }

    /// Evaluate the expression in any value domain.
    pub fn compute<T: NodeValue>(&self, inputs: &[T]) -> Result<Vec<T>> {
        Evaluator::new(
            &self.topology,
            &self.chromosome,
            &self.functions,
            &self.active.nodes,
        )
        .run(inputs)
    }

    /// Partial derivatives of every output with respect to input `wrt`.
    pub fn compute_derivative(&self, wrt: usize, inputs: &[f64]) -> Result<Vec<f64>> {
        if wrt >= self.topology.inputs {
            return Err(DcgpError::InputSize(format!(
                "derivative requested for input {} of {}",
                wrt, self.topology.inputs
            )));
        }
        let seeded: Vec<Dual> = inputs
            .iter()
            .enumerate()
            .map(|(i, &x)| if i == wrt { Dual::variable(x) } else { Dual::constant(x) })
            .collect();
        Ok(self.compute(&seeded)?.into_iter().map(|d| d.eps).collect())
    }

    /// Symbolic form of every output, inputs rendered as `x0`, `x1`, ...
    pub fn human_readable(&self) -> Result<Vec<String>> {
        let symbols: Vec<Symbol> = (0..self.topology.inputs).map(Symbol::input).collect();
        Ok(self.compute(&symbols)?.into_iter().map(String::from).collect())
    }

    /// Score the expression on an example set; higher is better.
    pub fn fitness(
        &self,
        in_des: &[Vec<f64>],
        out_des: &[Vec<f64>],
        fitness_type: FitnessType,
    ) -> Result<f64> {
        fitness::score(
            in_des,
            out_des,
            self.topology.inputs,
            self.topology.outputs,
            fitness_type,
            self.tol,
            |input| self.compute(input),
        )
    }

    fn refresh_active(&mut self) {
        self.active = active_set::resolve(&self.topology, &self.chromosome);
        log::debug!(
            "active set refreshed: {} nodes, {} genes",
            self.active.nodes.len(),
            self.active.genes.len()
        );
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.topology;
        let aliases: Vec<&str> = self.functions.iter().map(|func| func.alias()).collect();
        writeln!(f, "CGP expression")?;
        writeln!(f, "  inputs:       {}", t.inputs)?;
        writeln!(f, "  outputs:      {}", t.outputs)?;
        writeln!(f, "  rows:         {}", t.rows)?;
        writeln!(f, "  columns:      {}", t.columns)?;
        writeln!(f, "  levels-back:  {}", t.levels_back)?;
        writeln!(f, "  functions:    {:?}", aliases)?;
        writeln!(f, "  chromosome:   {:?}", self.chromosome)?;
        writeln!(f, "  active nodes: {:?}", self.active.nodes)?;
        writeln!(f, "  active genes: {:?}", self.active.genes)?;
        match self.human_readable() {
            Ok(outputs) => write!(f, "  outputs:      {:?}", outputs),
            Err(e) => write!(f, "  outputs:      <{}>", e),
        }
    }
}
