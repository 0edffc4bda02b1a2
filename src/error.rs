//! Error types and helpers for user-friendly error messages
//!
//! This module provides the error taxonomy of the bundler: configuration
//! faults, missing inspection tools, and dependency cycles. All of them are
//! fatal and propagate to the top of the run; there is no partial-success
//! mode.

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum BundleError {
    /// Configuration file or environment errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: Option<String>,
    },

    /// Inspection tool not found or not spawnable
    #[error("Missing tool: {tool}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// Topological sort could not complete because of a dependency cycle
    #[error("Cyclic dependency: {message}")]
    Cycle { message: String },
}

impl BundleError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
            hint: None,
        }
    }

    /// Create a configuration error with source and hint
    pub fn config_error_with_hint(
        message: impl Into<String>,
        source: Option<anyhow::Error>,
        hint: impl Into<String>,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source,
            hint: Some(hint.into()),
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a cycle error
    pub fn cycle(message: impl Into<String>) -> Self {
        Self::Cycle {
            message: message.into(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            BundleError::Config { hint, .. } => {
                if let Some(h) = hint {
                    eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
                }
            }
            BundleError::MissingTool { hint, required_for, .. } => {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
                eprintln!(
                    "\n{} {}",
                    style("REQUIRED FOR:").cyan().bold(),
                    required_for
                );
            }
            BundleError::Cycle { .. } => {}
        }

        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_error_is_distinguishable_from_config_error() {
        let cycle = BundleError::cycle("a -> b -> a");
        let config = BundleError::config_error("missing libdir");

        assert!(matches!(cycle, BundleError::Cycle { .. }));
        assert!(matches!(config, BundleError::Config { .. }));
        assert!(cycle.to_string().contains("Cyclic dependency"));
        assert!(config.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_missing_tool_message() {
        let err = BundleError::missing_tool("ldd", "dependency probing", "install glibc");
        assert_eq!(err.to_string(), "Missing tool: ldd");
    }
}
