use crate::error::DriverError;

pub mod config;
pub mod database;
pub mod error;

/// Reads `key` from the environment or a `.env` file, falling back to `default` when it is unset.
pub(crate) fn env_or(key: &str, default: &str) -> Result<String, DriverError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(value),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(default.to_string()),
        Err(error) => Err(DriverError::from(error)),
    }
}
