//! Iterative proportional fitting configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default L1 stopping threshold.
pub const DEFAULT_EPSILON: f64 = 1e-6;
/// Default cap on full passes.
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;
/// Default tolerance for per-dimension target sums.
pub const DEFAULT_SUM_TOLERANCE: f64 = 1e-5;

/// Configuration for one raking run, from the `[ipf]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IpfConfig {
    /// Stop once the L1 error drops below this value.
    pub epsilon: f64,
    /// Maximum number of full passes.
    pub max_iterations: u32,
    /// Allowed deviation of each dimension's target sum from 1.0.
    pub sum_tolerance: f64,
    /// Rescale weights after every pass so the total equals the input total.
    pub preserve_total_weight: bool,
}

impl Default for IpfConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            sum_tolerance: DEFAULT_SUM_TOLERANCE,
            preserve_total_weight: true,
        }
    }
}

impl IpfConfig {
    /// Reject values that would make the stopping rule or validation meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "ipf.epsilon",
                reason: format!("must be finite and > 0, got {}", self.epsilon),
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ipf.max_iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.sum_tolerance.is_finite() || self.sum_tolerance <= 0.0 || self.sum_tolerance >= 0.5
        {
            return Err(ConfigError::InvalidValue {
                field: "ipf.sum_tolerance",
                reason: format!("must be in (0, 0.5), got {}", self.sum_tolerance),
            });
        }
        Ok(())
    }
}
