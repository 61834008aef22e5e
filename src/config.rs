//! Parser configuration.
//!
//! The grammar puts no bound on nesting, but every nested block or
//! expression costs call stack. `ParserConfig` caps the depth so untrusted
//! input fails with a syntax error instead of overflowing the stack.

use std::env;

use thiserror::Error;

pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;
pub const MAX_DEPTH_ENV: &str = "MINILANG_MAX_DEPTH";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, found {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest nesting of blocks and expressions accepted.
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn with_max_nesting_depth(max_nesting_depth: usize) -> Self {
        ParserConfig { max_nesting_depth }
    }

    /// Reads overrides from the environment. Unset variables keep the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ParserConfig::default();

        if let Some(value) = lookup(MAX_DEPTH_ENV) {
            config.max_nesting_depth = match value.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => depth,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        name: MAX_DEPTH_ENV,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}
