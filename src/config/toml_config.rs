use crate::utils::error::{DiscoveryError, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional TOML configuration file:
///
/// ```toml
/// [api]
/// endpoint = "https://api.harvardartmuseums.org/image"
/// key = "${HARVARD_API_KEY}"
/// batch_size = 5
///
/// [discovery]
/// max_attempts = 20
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    pub api: Option<ApiSection>,
    pub discovery: Option<DiscoverySection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSection {
    pub endpoint: Option<String>,
    pub key: Option<String>,
    pub batch_size: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverySection {
    pub max_attempts: Option<usize>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DiscoveryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DiscoveryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn api_endpoint(&self) -> Option<&str> {
        self.api.as_ref()?.endpoint.as_deref()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api.as_ref()?.key.as_deref()
    }

    pub fn batch_size(&self) -> Option<usize> {
        self.api.as_ref()?.batch_size
    }

    pub fn max_attempts(&self) -> Option<usize> {
        self.discovery.as_ref()?.max_attempts
    }
}

/// Replaces `${VAR_NAME}` occurrences with the environment value; unset
/// variables are left as-is so validation reports them meaningfully.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;

    let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");
    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let content = r#"
            [api]
            endpoint = "https://api.harvardartmuseums.org/image"
            key = "secret"
            batch_size = 10

            [discovery]
            max_attempts = 50
        "#;
        let config = FileConfig::from_toml_str(content).unwrap();
        assert_eq!(
            config.api_endpoint(),
            Some("https://api.harvardartmuseums.org/image")
        );
        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.batch_size(), Some(10));
        assert_eq!(config.max_attempts(), Some(50));
    }

    #[test]
    fn sections_are_optional() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert!(config.api_endpoint().is_none());
        assert!(config.api_key().is_none());
        assert!(config.max_attempts().is_none());
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("ART_DISCOVERY_TEST_KEY", "from-env");
        let content = r#"
            [api]
            key = "${ART_DISCOVERY_TEST_KEY}"
        "#;
        let config = FileConfig::from_toml_str(content).unwrap();
        assert_eq!(config.api_key(), Some("from-env"));
    }

    #[test]
    fn unset_variables_stay_verbatim() {
        let content = r#"
            [api]
            key = "${DEFINITELY_NOT_SET_ANYWHERE_12345}"
        "#;
        let config = FileConfig::from_toml_str(content).unwrap();
        assert_eq!(config.api_key(), Some("${DEFINITELY_NOT_SET_ANYWHERE_12345}"));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let result = FileConfig::from_toml_str("[api\nendpoint=");
        assert!(matches!(result, Err(DiscoveryError::ConfigError { .. })));
    }
}
