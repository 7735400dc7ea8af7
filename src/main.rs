use anyhow::Context;
use dcgp::config::ConfigManager;
use dcgp::{Expression, FunctionRegistry};

const STEPS: usize = 5;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    if let Some(path) = std::env::args().nth(1) {
        manager
            .load_from_file(&path)
            .with_context(|| format!("loading {}", path))?;
    }
    let config = manager.get();

    let registry = FunctionRegistry::new();
    let mut expression = Expression::from_config(&config.expression, &registry)?;
    println!("{}", expression);

    let ones = vec![1.0; config.expression.inputs];
    for step in 1..=STEPS {
        if config.mutation.active_only {
            expression.mutate_active(config.mutation.genes_per_mutation);
        } else {
            expression.mutate_n(config.mutation.genes_per_mutation);
        }
        println!(
            "step {}: {:?} f(1) = {:?} df/dx0(1) = {:?}",
            step,
            expression.human_readable()?,
            expression.compute(&ones)?,
            expression.compute_derivative(0, &ones)?
        );
    }

    Ok(())
}
