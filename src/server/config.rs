use std::str::FromStr;

use crate::{
    maze::MIN_DIMENSION,
    server::error::{config::ConfigError, AppError},
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MAX_DIMENSION: u32 = 100;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub maze_max_width: u32,
    pub maze_max_height: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            maze_max_width: dimension_var("MAZE_MAX_WIDTH")?,
            maze_max_height: dimension_var("MAZE_MAX_HEIGHT")?,
        })
    }
}

/// Reads an optional maze dimension limit, falling back to `DEFAULT_MAX_DIMENSION`.
fn dimension_var(name: &str) -> Result<u32, ConfigError> {
    match std::env::var(name) {
        Ok(value) => parse_dimension(name, &value),
        Err(_) => Ok(DEFAULT_MAX_DIMENSION),
    }
}

fn parse_dimension(name: &str, value: &str) -> Result<u32, ConfigError> {
    u32::from_str(value.trim())
        .ok()
        .filter(|v| *v >= MIN_DIMENSION)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dimension_limits() {
        assert_eq!(parse_dimension("MAZE_MAX_WIDTH", "250").unwrap(), 250);
        assert_eq!(parse_dimension("MAZE_MAX_WIDTH", " 2 ").unwrap(), 2);
    }

    #[test]
    fn rejects_unusable_dimension_limits() {
        for value in ["", "abc", "-5", "1"] {
            let result = parse_dimension("MAZE_MAX_HEIGHT", value);
            assert!(
                matches!(result, Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "MAZE_MAX_HEIGHT"),
                "accepted {value:?}"
            );
        }
    }
}
