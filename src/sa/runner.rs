//! SA execution loop.
//!
//! [`AnnealState`] holds one run and advances it one iteration at a time, so
//! callers can interleave the search with their own work. [`SaRunner`] drives
//! a state to completion.
//!
//! # Iteration
//!
//! 1. Copy the current solution and perturb it into a candidate.
//! 2. Compute the Metropolis acceptance probability of the candidate against
//!    the **best-found** cost.
//! 3. Draw a uniform value in [0, 1); below the probability, the candidate
//!    becomes the current solution.
//! 4. If the current solution beats the best, copy it into best.
//! 5. Cool.
//!
//! The run is done once the temperature is no longer above the floor, or
//! the iteration budget is spent.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::SaConfig;
use super::schedule::{acceptance_probability, AnnealingSchedule};
use super::types::SaProblem;
use crate::error::Result;

/// Best cost is sampled into the history every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Whether a run has more iterations to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnealStatus {
    Running,
    Done,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SaResult<S: Clone> {
    /// The starting solution.
    pub initial: S,

    /// Cost of the starting solution.
    pub initial_cost: f64,

    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of candidates strictly better than the best-found cost at the
    /// time they were drawn.
    pub improving_moves: usize,

    /// Seed of the generator, when the runner created it.
    pub seed: Option<u64>,

    /// Best cost sampled at regular intervals for history tracking.
    pub cost_history: Vec<f64>,
}

/// In-progress state of one annealing run.
#[derive(Debug, Clone)]
pub struct AnnealState<S: Clone> {
    initial: S,
    initial_cost: f64,
    current: S,
    current_cost: f64,
    best: S,
    best_cost: f64,
    schedule: AnnealingSchedule,
    max_iterations: usize,
    iterations: usize,
    accepted_moves: usize,
    improving_moves: usize,
    cost_history: Vec<f64>,
}

impl<S: Clone> AnnealState<S> {
    /// Starts a run from `initial`, which becomes both current and best.
    ///
    /// # Errors
    ///
    /// Returns [`AnnealError::InvalidConfig`](crate::AnnealError::InvalidConfig)
    /// if `config` fails [`SaConfig::validate`].
    pub fn new<P>(problem: &P, initial: S, config: &SaConfig) -> Result<Self>
    where
        P: SaProblem<Solution = S>,
    {
        config.validate()?;
        let cost = problem.cost(&initial);
        Ok(Self {
            current: initial.clone(),
            current_cost: cost,
            best: initial.clone(),
            best_cost: cost,
            initial,
            initial_cost: cost,
            schedule: AnnealingSchedule::from_config(config),
            max_iterations: config.max_iterations,
            iterations: 0,
            accepted_moves: 0,
            improving_moves: 0,
            cost_history: vec![cost],
        })
    }

    /// Performs one iteration unless the run is already done.
    pub fn step<P, R>(&mut self, problem: &P, rng: &mut R) -> AnnealStatus
    where
        P: SaProblem<Solution = S>,
        R: Rng + ?Sized,
    {
        if self.is_done() {
            return AnnealStatus::Done;
        }

        let temperature = self.schedule.temperature();
        let candidate = problem.neighbor(&self.current, rng);
        let candidate_cost = problem.cost(&candidate);

        // Baseline is the best-found cost, not the current one.
        let probability = acceptance_probability(self.best_cost, candidate_cost, temperature);
        if candidate_cost < self.best_cost {
            self.improving_moves += 1;
        }
        if rng.random::<f64>() < probability {
            self.current = candidate;
            self.current_cost = candidate_cost;
            self.accepted_moves += 1;
        }

        if self.current_cost < self.best_cost {
            self.best = self.current.clone();
            self.best_cost = self.current_cost;
            debug!(
                iteration = self.iterations,
                temperature,
                best_cost = self.best_cost,
                "new best"
            );
        }

        self.iterations += 1;
        if self.iterations.is_multiple_of(HISTORY_INTERVAL) {
            self.cost_history.push(self.best_cost);
        }

        self.schedule.cool();

        if self.is_done() {
            AnnealStatus::Done
        } else {
            AnnealStatus::Running
        }
    }

    /// `true` once the temperature is frozen or the iteration budget is spent.
    pub fn is_done(&self) -> bool {
        self.schedule.is_frozen()
            || (self.max_iterations > 0 && self.iterations >= self.max_iterations)
    }

    pub fn current(&self) -> &S {
        &self.current
    }

    pub fn current_cost(&self) -> f64 {
        self.current_cost
    }

    pub fn best(&self) -> &S {
        &self.best
    }

    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    pub fn temperature(&self) -> f64 {
        self.schedule.temperature()
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Finishes the run and packages its outcome.
    pub fn into_result(mut self) -> SaResult<S> {
        if self
            .cost_history
            .last()
            .is_none_or(|&last| (last - self.best_cost).abs() > 1e-15)
        {
            self.cost_history.push(self.best_cost);
        }

        SaResult {
            initial: self.initial,
            initial_cost: self.initial_cost,
            best: self.best,
            best_cost: self.best_cost,
            iterations: self.iterations,
            final_temperature: self.schedule.temperature(),
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            seed: None,
            cost_history: self.cost_history,
        }
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization with a `StdRng` seeded from `config.seed`, or
    /// from a fresh random seed when none is set.
    ///
    /// # Errors
    ///
    /// Returns [`AnnealError::InvalidConfig`](crate::AnnealError::InvalidConfig)
    /// if `config` fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_anneal::cities::romanian_cities;
    /// use u_anneal::sa::{SaConfig, SaRunner};
    /// use u_anneal::TspProblem;
    ///
    /// let problem = TspProblem::new(&romanian_cities()).unwrap();
    /// let result = SaRunner::run(&problem, &SaConfig::default().with_seed(1)).unwrap();
    /// assert!(result.best_cost <= result.initial_cost);
    /// ```
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> Result<SaResult<P::Solution>> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        Self::drive(problem, config, &mut rng, Some(seed))
    }

    /// Runs SA optimization drawing every random choice from `rng`.
    pub fn run_with_rng<P, R>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>>
    where
        P: SaProblem,
        R: Rng + ?Sized,
    {
        Self::drive(problem, config, rng, None)
    }

    fn drive<P, R>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
        seed: Option<u64>,
    ) -> Result<SaResult<P::Solution>>
    where
        P: SaProblem,
        R: Rng + ?Sized,
    {
        let initial = problem.initial_solution(rng);
        let mut state = AnnealState::new(problem, initial, config)?;
        info!(
            seed,
            initial_temperature = config.initial_temperature,
            cooling_rate = config.cooling_rate,
            initial_cost = state.best_cost(),
            "annealing started"
        );

        while state.step(problem, rng) == AnnealStatus::Running {}

        let mut result = state.into_result();
        result.seed = seed;
        info!(
            iterations = result.iterations,
            final_temperature = result.final_temperature,
            best_cost = result.best_cost,
            accepted_moves = result.accepted_moves,
            improving_moves = result.improving_moves,
            "annealing finished"
        );
        Ok(result)
    }
}
