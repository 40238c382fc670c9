//! Geometric cooling and the Metropolis acceptance rule.

use super::config::SaConfig;

/// Metropolis acceptance probability for moving from a solution of cost
/// `current` to one of cost `candidate` at `temperature`.
///
/// Strict improvements return exactly `1.0`. Otherwise the result is
/// `exp((current - candidate) / temperature)`, which lies in (0, 1].
/// `temperature` must be positive.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::acceptance_probability;
///
/// assert_eq!(acceptance_probability(10.0, 8.0, 100.0), 1.0);
/// let p = acceptance_probability(10.0, 12.0, 100.0);
/// assert!(p > 0.0 && p < 1.0);
/// ```
pub fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    debug_assert!(temperature > 0.0, "temperature must be positive");
    if candidate < current {
        return 1.0;
    }
    ((current - candidate) / temperature).exp()
}

/// One geometric cooling step: `temperature * (1 - cooling_rate)`.
pub fn cool(temperature: f64, cooling_rate: f64) -> f64 {
    temperature * (1.0 - cooling_rate)
}

/// Temperature state of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingSchedule {
    temperature: f64,
    initial_temperature: f64,
    cooling_rate: f64,
    min_temperature: f64,
}

impl AnnealingSchedule {
    pub fn new(initial_temperature: f64, cooling_rate: f64, min_temperature: f64) -> Self {
        debug_assert!(
            cooling_rate > 0.0 && cooling_rate < 1.0,
            "cooling_rate must be in (0, 1)"
        );
        Self {
            temperature: initial_temperature,
            initial_temperature,
            cooling_rate,
            min_temperature,
        }
    }

    pub fn from_config(config: &SaConfig) -> Self {
        Self::new(
            config.initial_temperature,
            config.cooling_rate,
            config.min_temperature,
        )
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    pub fn cooling_rate(&self) -> f64 {
        self.cooling_rate
    }

    /// `true` once the temperature is at or below the floor.
    pub fn is_frozen(&self) -> bool {
        self.temperature <= self.min_temperature
    }

    /// Advances one step and returns the new temperature.
    pub fn cool(&mut self) -> f64 {
        self.temperature = cool(self.temperature, self.cooling_rate);
        self.temperature
    }

    /// Number of [`cool`](Self::cool) calls needed to freeze, counted from
    /// the initial temperature with the same floating-point steps the loop
    /// takes.
    pub fn steps_to_freeze(&self) -> usize {
        let mut probe = Self::new(
            self.initial_temperature,
            self.cooling_rate,
            self.min_temperature,
        );
        let mut steps = 0;
        while !probe.is_frozen() {
            probe.cool();
            steps += 1;
        }
        steps
    }
}
