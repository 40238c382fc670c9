//! Anneals a tour over the built-in six-city dataset and prints the
//! starting and final tours.

use tracing_subscriber::EnvFilter;
use u_anneal::cities::romanian_cities;
use u_anneal::sa::{SaConfig, SaRunner};
use u_anneal::{AnnealError, TspProblem};

fn main() -> Result<(), AnnealError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("u_anneal=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let problem = TspProblem::new(&romanian_cities())?;
    let result = SaRunner::run(&problem, &SaConfig::default())?;

    println!(
        "Total distance of initial solution: {} | Tour: {}",
        result.initial_cost, result.initial
    );
    println!(
        "Final solution distance: {} | Tour: {}",
        result.best_cost, result.best
    );
    Ok(())
}
