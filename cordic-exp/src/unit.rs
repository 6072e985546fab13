//! Configuration-driven exponential unit.
//!
//! Simulation harnesses describe the unit they want to emulate once, usually
//! in YAML:
//!
//! ```yaml
//! bit_width: 16
//! variant: pipelined
//! method:
//!   kind: lookup
//!   mode: worst_case
//! ```
//!
//! and then call [`ExpUnit::exp`] on every tensor of arguments.

use log::debug;
use ndarray::{Array, ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};

use crate::engine::compute_exp;
use crate::error::{CordicError, Result};
use crate::error_model::bias;
use crate::params::{BitWidth, CordicVariant, Engine, ErrorMode};

/// How the unit's error is produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Method {
    /// Exact exponential plus the measured bias of the unit.
    Lookup { mode: ErrorMode },
    /// Run the iterative engine of the unit.
    Simulate,
}

impl Default for Method {
    fn default() -> Self {
        Method::Lookup {
            mode: ErrorMode::Average,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpUnitConfig {
    pub bit_width: BitWidth,
    pub variant: CordicVariant,
    #[serde(default)]
    pub method: Method,
    /// Bypass the emulation and return the library exponential.
    #[serde(default)]
    pub exact: bool,
}

impl Default for ExpUnitConfig {
    fn default() -> Self {
        ExpUnitConfig {
            bit_width: BitWidth::W16,
            variant: CordicVariant::Pipelined,
            method: Method::default(),
            exact: false,
        }
    }
}

impl ExpUnitConfig {
    pub fn from_yaml(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).map_err(|err| CordicError::Config(err.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|err| CordicError::Config(err.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Path {
    Bias(f64),
    Engine(Engine),
}

/// A validated unit; every parameter error surfaces in [`ExpUnit::new`].
#[derive(Debug, Clone)]
pub struct ExpUnit {
    config: ExpUnitConfig,
    path: Path,
}

impl ExpUnit {
    pub fn new(config: ExpUnitConfig) -> Result<Self> {
        let path = match config.method {
            Method::Lookup { mode } => Path::Bias(bias(mode, config.bit_width, config.variant)?),
            Method::Simulate => Path::Engine(
                config
                    .variant
                    .engine()
                    .ok_or(CordicError::NoEngine(config.variant))?,
            ),
        };
        debug!("exp unit {:?} resolved to {:?}", config, path);
        Ok(ExpUnit { config, path })
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        Self::new(ExpUnitConfig::from_yaml(source)?)
    }

    pub fn config(&self) -> &ExpUnitConfig {
        &self.config
    }

    pub fn exp<S, D>(&self, z: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        if self.config.exact {
            return z.mapv(f64::exp);
        }
        match self.path {
            Path::Bias(offset) => z.mapv(|v| v.exp() + offset),
            Path::Engine(engine) => compute_exp(z, self.config.bit_width, engine, false),
        }
    }
}
