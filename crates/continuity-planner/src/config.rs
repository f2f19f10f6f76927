//! Planner configuration types and defaults

use crate::catalog::Locale;
use crate::error::{ContinuityError, ContinuityResult};
use crate::risk_engine::ScoringScheme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "BCP";

/// Planner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Score-to-rating scheme used by the risk engine
    pub scoring_scheme: ScoringScheme,
    /// Apply coastal, urban and country amplification rules
    pub location_amplification: bool,
    /// Remove repeated strategy ids from recommendations
    pub dedupe_strategies: bool,
    /// Locale when a request does not name one
    pub default_locale: Locale,
    /// Months between plan reviews
    pub review_interval_months: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            scoring_scheme: ScoringScheme::Standard,
            location_amplification: true,
            dedupe_strategies: false,
            default_locale: Locale::En,
            review_interval_months: 12,
        }
    }
}

impl PlannerConfig {
    /// Load from a `.toml` or `.json` file; missing keys take defaults
    pub fn load_from_file(path: impl AsRef<Path>) -> ContinuityResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&contents)?,
            Some("json") => serde_json::from_str(&contents)?,
            other => {
                return Err(ContinuityError::ConfigurationError {
                    message: format!(
                        "unsupported config format {:?} for {}",
                        other.unwrap_or(""),
                        path.display()
                    ),
                })
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Apply `BCP_*` environment variables on top of this configuration
    pub fn with_env_overrides(self) -> ContinuityResult<Self> {
        self.with_overrides(|key| std::env::var(format!("{ENV_PREFIX}_{key}")).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> ContinuityResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("SCORING_SCHEME") {
            self.scoring_scheme = value.parse()?;
        }
        if let Some(value) = lookup("LOCATION_AMPLIFICATION") {
            self.location_amplification = parse_bool("LOCATION_AMPLIFICATION", &value)?;
        }
        if let Some(value) = lookup("DEDUPE_STRATEGIES") {
            self.dedupe_strategies = parse_bool("DEDUPE_STRATEGIES", &value)?;
        }
        if let Some(value) = lookup("DEFAULT_LOCALE") {
            self.default_locale = value.parse()?;
        }
        if let Some(value) = lookup("REVIEW_INTERVAL_MONTHS") {
            self.review_interval_months =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ContinuityError::ConfigurationError {
                        message: format!("REVIEW_INTERVAL_MONTHS must be a number, got '{value}'"),
                    })?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Reject settings the planner cannot run with
    pub fn validate(&self) -> ContinuityResult<()> {
        if self.review_interval_months == 0 {
            return Err(ContinuityError::ConfigurationError {
                message: "review_interval_months must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> ContinuityResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ContinuityError::ConfigurationError {
            message: format!("{key} must be a boolean, got '{value}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.scoring_scheme, ScoringScheme::Standard);
        assert!(config.location_amplification);
        assert!(!config.dedupe_strategies);
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.review_interval_months, 12);
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("planner.toml");
        fs::write(
            &path,
            r#"
scoring_scheme = "dynamic"
dedupe_strategies = true
default_locale = "es"
"#,
        )
        .unwrap();

        let config = PlannerConfig::load_from_file(&path).unwrap();
        assert_eq!(config.scoring_scheme, ScoringScheme::Dynamic);
        assert!(config.dedupe_strategies);
        assert_eq!(config.default_locale, Locale::Es);
        assert!(config.location_amplification);
        assert_eq!(config.review_interval_months, 12);
    }

    #[test]
    fn test_load_from_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("planner.json");
        fs::write(
            &path,
            r#"{"scoring_scheme": "matrix", "location_amplification": false}"#,
        )
        .unwrap();

        let config = PlannerConfig::load_from_file(&path).unwrap();
        assert_eq!(config.scoring_scheme, ScoringScheme::Matrix);
        assert!(!config.location_amplification);
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("planner.ini");
        fs::write(&path, "scoring_scheme=standard").unwrap();

        let result = PlannerConfig::load_from_file(&path);
        assert!(matches!(
            result,
            Err(ContinuityError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_zero_review_interval_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("planner.toml");
        fs::write(&path, "review_interval_months = 0").unwrap();
        assert!(PlannerConfig::load_from_file(&path).is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SCORING_SCHEME", "matrix"),
            ("LOCATION_AMPLIFICATION", "off"),
            ("REVIEW_INTERVAL_MONTHS", "6"),
        ]
        .into_iter()
        .collect();

        let config = PlannerConfig::default()
            .with_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.scoring_scheme, ScoringScheme::Matrix);
        assert!(!config.location_amplification);
        assert_eq!(config.review_interval_months, 6);
    }

    #[test]
    fn test_invalid_override() {
        let result = PlannerConfig::default()
            .with_overrides(|key| (key == "DEDUPE_STRATEGIES").then(|| "maybe".to_string()));
        assert!(result.is_err());
    }
}
