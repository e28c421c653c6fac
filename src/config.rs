//! Runtime configuration for the CLI surface.
//!
//! The recommender itself takes no configuration; only the binary reads the
//! environment. Variables use the `AGENT_ARCHITECT_` prefix and a `.env`
//! file is honored when present.

/// Output rendering for CLI results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log_filter: String,
    pub output_format: OutputFormat,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_filter: "agent_architect=info".to_string(),
            output_format: OutputFormat::Text,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables, with defaults for
    /// anything unset. `AGENT_ARCHITECT_FORMAT` accepts `text` or `json`;
    /// unrecognized values keep the default and are reported at startup.
    pub fn load_from_env() -> Self {
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(filter) = std::env::var("AGENT_ARCHITECT_LOG") {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        if let Ok(format) = std::env::var("AGENT_ARCHITECT_FORMAT") {
            match format.to_lowercase().as_str() {
                "text" => config.output_format = OutputFormat::Text,
                "json" => config.output_format = OutputFormat::Json,
                other => {
                    tracing::warn!(
                        "AGENT_ARCHITECT_FORMAT '{}' not recognized, keeping 'text'",
                        other
                    );
                }
            }
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.log_filter.trim().is_empty() {
            anyhow::bail!("AGENT_ARCHITECT_LOG must not be empty");
        }
        Ok(())
    }
}
