//! Run configuration for the stencil driver.
//!
//! Constructed via the builder pattern: [`RunConfig::builder`]. The
//! defaults are the reference configuration used to cross-check the
//! external simulation: the smoothing kernel, padding value 30, and
//! 100 passes.

use std::error::Error;
use std::fmt;

use crate::kernel::Kernel;

/// Immutable configuration for a stencil run.
///
/// # Examples
///
/// ```
/// use swelter_stencil::RunConfig;
///
/// let config = RunConfig::builder().iterations(10).build().unwrap();
/// assert_eq!(config.iterations(), 10);
/// assert_eq!(config.padding(), 30.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    kernel: Kernel,
    padding: f32,
    iterations: u32,
}

impl RunConfig {
    /// Start building a configuration from the reference defaults.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// The reference configuration: smoothing kernel, padding 30, 100 passes.
    pub fn reference() -> Self {
        Self {
            kernel: Kernel::SMOOTHING,
            padding: 30.0,
            iterations: 100,
        }
    }

    /// The 3x3 kernel applied each pass.
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    /// The value substituted for out-of-bounds neighbor reads.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Number of passes to apply.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

/// Builder for [`RunConfig`].
///
/// Every field has a reference default, so `build()` only fails when a
/// non-finite kernel weight or padding value was supplied.
#[derive(Clone, Debug)]
pub struct RunConfigBuilder {
    kernel: Kernel,
    padding: f32,
    iterations: u32,
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self {
            kernel: Kernel::SMOOTHING,
            padding: 30.0,
            iterations: 100,
        }
    }
}

impl RunConfigBuilder {
    /// Set the 3x3 kernel.
    pub fn kernel(mut self, kernel: Kernel) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set the boundary padding value.
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the pass count. Zero is legal and makes the run an identity.
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<RunConfig, ConfigError> {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if !self.kernel.weight(dr, dc).is_finite() {
                    return Err(ConfigError::NonFiniteWeight { dr, dc });
                }
            }
        }
        if !self.padding.is_finite() {
            return Err(ConfigError::NonFinitePadding {
                value: self.padding,
            });
        }
        Ok(RunConfig {
            kernel: self.kernel,
            padding: self.padding,
            iterations: self.iterations,
        })
    }
}

/// Errors from [`RunConfigBuilder::build`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A kernel weight is NaN or infinite.
    NonFiniteWeight {
        /// Row offset of the weight.
        dr: i32,
        /// Column offset of the weight.
        dc: i32,
    },
    /// The padding value is NaN or infinite.
    NonFinitePadding {
        /// The offending value.
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteWeight { dr, dc } => {
                write!(f, "kernel weight at offset ({dr}, {dc}) is not finite")
            }
            Self::NonFinitePadding { value } => {
                write!(f, "padding value {value} is not finite")
            }
        }
    }
}

impl Error for ConfigError {}
