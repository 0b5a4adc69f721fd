//! Annealer configuration.

/// Configuration for a simulated annealing run.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(100.0)
///     .with_total_steps(10_000)
///     .with_sensitivity(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Step budget. The run executes exactly `total_steps + 1`
    /// iterations, cooling linearly from the initial temperature to
    /// zero; no early stopping.
    pub total_steps: usize,

    /// Sensitivity constant `k` of the Metropolis acceptance rule:
    /// a worsening move is accepted with probability
    /// `exp(delta / (k * T))`. Smaller values make the rule stricter.
    pub sensitivity: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            total_steps: 5000,
            sensitivity: 0.1,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_total_steps(mut self, n: usize) -> Self {
        self.total_steps = n;
        self
    }

    pub fn with_sensitivity(mut self, k: f64) -> Self {
        self.sensitivity = k;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.sensitivity <= 0.0 {
            return Err("sensitivity must be positive".into());
        }
        Ok(())
    }
}
