pub mod toml_config;

use crate::core::discovery::{DEFAULT_BATCH_SIZE, DEFAULT_MAX_ATTEMPTS};
use crate::core::ConfigProvider;
use crate::utils::error::{DiscoveryError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.harvardartmuseums.org/image";

#[derive(Debug, Clone, Parser)]
#[command(name = "art-discovery")]
#[command(about = "Discover random artwork from the Harvard Art Museums collection")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    /// API key for the Harvard Art Museums API. Falls back to the
    /// HARVARD_API_KEY environment variable.
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Discovery gives up after this many batch fetches without an
    /// acceptable record.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Optional TOML configuration file; CLI flags take precedence.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolves the final configuration: explicit flags win, then file
    /// values, then defaults / environment.
    pub fn resolve(mut self) -> Result<ResolvedConfig> {
        if let Some(path) = self.config.take() {
            let file = toml_config::FileConfig::from_file(&path)?;
            self.apply_file(&file);
        }

        let api_key = match self.api_key {
            Some(key) => key,
            None => std::env::var("HARVARD_API_KEY").map_err(|_| {
                DiscoveryError::MissingConfigError {
                    field: "api_key (or HARVARD_API_KEY)".to_string(),
                }
            })?,
        };

        let resolved = ResolvedConfig {
            api_endpoint: self.api_endpoint,
            api_key,
            batch_size: self.batch_size,
            max_attempts: self.max_attempts,
        };
        resolved.validate()?;
        Ok(resolved)
    }

    fn apply_file(&mut self, file: &toml_config::FileConfig) {
        // Only fill in what the command line left at its default.
        if self.api_endpoint == DEFAULT_API_ENDPOINT {
            if let Some(endpoint) = file.api_endpoint() {
                self.api_endpoint = endpoint.to_string();
            }
        }
        if self.api_key.is_none() {
            self.api_key = file.api_key().map(str::to_string);
        }
        if self.batch_size == DEFAULT_BATCH_SIZE {
            if let Some(size) = file.batch_size() {
                self.batch_size = size;
            }
        }
        if self.max_attempts == DEFAULT_MAX_ATTEMPTS {
            if let Some(attempts) = file.max_attempts() {
                self.max_attempts = attempts;
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_endpoint: String,
    pub api_key: String,
    pub batch_size: usize,
    pub max_attempts: usize,
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_positive_number("batch_size", self.batch_size, 1)?;
        validate_positive_number("max_attempts", self.max_attempts, 1)?;
        Ok(())
    }
}

impl ConfigProvider for ResolvedConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ResolvedConfig {
        ResolvedConfig {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            api_key: "abc123".to_string(),
            batch_size: 5,
            max_attempts: 20,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn rejects_zero_batch_size() {
        let mut config = base_config();
        config.batch_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_blank_api_key() {
        let mut config = base_config();
        config.api_key = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn file_values_fill_defaults_but_flags_win() {
        let file = toml_config::FileConfig::from_toml_str(
            r#"
            [api]
            endpoint = "https://museum.example/image"
            batch_size = 10

            [discovery]
            max_attempts = 7
        "#,
        )
        .unwrap();

        let mut cli = CliConfig {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            api_key: Some("k".to_string()),
            batch_size: DEFAULT_BATCH_SIZE,
            max_attempts: 3, // explicitly set on the command line
            config: None,
            verbose: false,
        };
        cli.apply_file(&file);

        assert_eq!(cli.api_endpoint, "https://museum.example/image");
        assert_eq!(cli.batch_size, 10);
        assert_eq!(cli.max_attempts, 3);
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let mut config = base_config();
        config.api_endpoint = "ftp://museum.example".to_string();
        assert!(config.validate().is_err());
    }
}
