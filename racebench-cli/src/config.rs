//! Configuration loading from racebench.toml
//!
//! Harness configuration can be specified in a `racebench.toml` file in the
//! project root. The configuration is automatically discovered by walking up
//! from the current directory; CLI flags override whatever it provides.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HarnessConfig {
    /// Trial-loop configuration.
    #[serde(default)]
    pub run: RunConfig,
    /// Corpus source configuration.
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Trial-loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of trials averaged over.
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Pin the harness thread to this CPU core before the first trial.
    #[serde(default)]
    pub pin_cpu: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            trials: default_trials(),
            pin_cpu: None,
        }
    }
}

fn default_trials() -> usize {
    15
}

/// Corpus source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// File read one record per line.
    #[serde(default = "default_corpus_path")]
    pub path: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
        }
    }
}

fn default_corpus_path() -> String {
    "codes.txt".to_string()
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", or "csv".
    #[serde(default = "default_format")]
    pub format: String,
    /// Report file path (stdout when unset).
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            path: None,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl HarnessConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the current
    /// directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("racebench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_the_fixed_constants() {
        let config = HarnessConfig::default();
        assert_eq!(config.run.trials, 15);
        assert_eq!(config.corpus.path, "codes.txt");
        assert_eq!(config.output.format, "human");
        assert!(config.output.path.is_none());
        assert!(config.run.pin_cpu.is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults_elsewhere() {
        let toml_str = r#"
            [run]
            trials = 3

            [corpus]
            path = "records.txt"
        "#;

        let config: HarnessConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.run.trials, 3);
        assert_eq!(config.corpus.path, "records.txt");
        // Defaults still apply
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn pin_cpu_parses() {
        let config: HarnessConfig = toml::from_str("[run]\npin_cpu = 2\n").unwrap();
        assert_eq!(config.run.pin_cpu, Some(2));
    }
}
