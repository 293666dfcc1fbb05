//! Error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes
//! - Proper exit codes for CI/CD
//!
//! The calculations themselves never fail; errors come from loading inputs
//! and from the `--check` gates of the CLI.
//!
//! # Examples
//!
//! ```
//! use broiler_lca::inventory::BatchInventory;
//! use broiler_lca::error::LcaError;
//!
//! let batch = BatchInventory::new("BATCH-2024-154");
//! match batch.require_complete() {
//!     Err(LcaError::IncompleteBatch { missing, .. }) => assert_eq!(missing.len(), 3),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// broiler-lca errors with contextual suggestions
#[derive(Error, Debug)]
pub enum LcaError {
    /// Batch inventory file does not exist
    #[error("Batch inventory not found: {path}")]
    InventoryNotFound {
        /// Path to the inventory file
        path: PathBuf,
    },

    /// Batch inventory file is not valid TOML or has wrong field types
    #[error("Failed to parse batch inventory {path}: {message}")]
    InventoryParse {
        /// Path to the inventory file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A subsystem section is missing, so the footprint cannot be calculated
    #[error("Batch {batch_id} is incomplete: missing {}", .missing.join(", "))]
    IncompleteBatch {
        /// Batch identifier
        batch_id: String,
        /// Missing section names
        missing: Vec<String>,
    },

    /// Footprint reached the baseline threshold
    #[error("Batch {batch_id} footprint ({total:.2} kg CO2e/kg) is HIGH (baseline {baseline})")]
    FootprintHigh {
        /// Batch identifier
        batch_id: String,
        /// Calculated total
        total: f64,
        /// Baseline threshold
        baseline: f64,
    },

    /// Mitigation scenario does not reach the target
    #[error("Scenario footprint ({total:.2} kg CO2e/kg) misses target {target} by {gap:.2}")]
    TargetMissed {
        /// Projected total
        total: f64,
        /// Target threshold
        target: f64,
        /// total - target
        gap: f64,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl LcaError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use broiler_lca::error::LcaError;
    ///
    /// let error = LcaError::IncompleteBatch {
    ///     batch_id: "BATCH-2024-155".to_string(),
    ///     missing: vec!["processing".to_string()],
    /// };
    ///
    /// assert!(error.suggestion().unwrap().contains("[processing]"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InventoryNotFound { .. } => Some(
                "Check the path, or run without a file to use the reference batch".to_string(),
            ),
            Self::InventoryParse { .. } => Some(
                "Batch files use kebab-case keys under [feed], [broiler] and [processing] sections"
                    .to_string(),
            ),
            Self::IncompleteBatch { missing, .. } => Some(format!(
                "Add the {} section(s) before calculating",
                missing
                    .iter()
                    .map(|m| format!("[{}]", m))
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
            Self::FootprintHigh { .. } => Some(
                "Run 'broiler-lca hotspots' to find the largest sources, then 'broiler-lca simulate' to plan reductions"
                    .to_string(),
            ),
            Self::TargetMissed { .. } => Some(
                "Increase soybean substitution or biogas conversion; cooling alone cannot close large gaps"
                    .to_string(),
            ),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use broiler_lca::error::LcaError;
    /// use std::path::PathBuf;
    ///
    /// let missing = LcaError::InventoryNotFound { path: PathBuf::from("batch.toml") };
    /// assert_eq!(missing.exit_code(), 66);
    ///
    /// let high = LcaError::FootprintHigh {
    ///     batch_id: "BATCH-2024-152".to_string(),
    ///     total: 4.5,
    ///     baseline: 4.35,
    /// };
    /// assert_eq!(high.exit_code(), 1);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InventoryNotFound { .. } => 66, // EX_NOINPUT
            Self::InventoryParse { .. } => 65,    // EX_DATAERR
            Self::IncompleteBatch { .. } => 65,   // EX_DATAERR
            Self::FootprintHigh { .. } => 1,      // CI gate
            Self::TargetMissed { .. } => 1,       // CI gate
            Self::Io { .. } => 74,                // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(lca_error) = Self::find(error) {
            if let Some(suggestion) = lca_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, LcaError::exit_code)
    }

    /// First `LcaError` in the chain, including ones wrapped in context
    fn find(error: &anyhow::Error) -> Option<&LcaError> {
        error.chain().find_map(|e| e.downcast_ref::<LcaError>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_incomplete_batch_lists_missing_sections() {
        let err = LcaError::IncompleteBatch {
            batch_id: "BATCH-2024-154".to_string(),
            missing: vec!["broiler".to_string(), "processing".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Batch BATCH-2024-154 is incomplete: missing broiler, processing"
        );
        let suggestion = err.suggestion().unwrap();
        assert!(suggestion.contains("[broiler], [processing]"));
    }

    #[test]
    fn test_footprint_high_points_to_hotspots() {
        let err = LcaError::FootprintHigh {
            batch_id: "BATCH-2024-152".to_string(),
            total: 4.51,
            baseline: 4.35,
        };
        assert!(err.to_string().contains("4.51"));
        assert!(err.suggestion().unwrap().contains("hotspots"));
    }

    #[test]
    fn test_exit_codes_follow_conventions() {
        let parse = LcaError::InventoryParse {
            path: PathBuf::from("b.toml"),
            message: "bad".to_string(),
        };
        assert_eq!(parse.exit_code(), 65);

        let io = LcaError::Io {
            context: "writing config".to_string(),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(io.exit_code(), 74);

        let missed = LcaError::TargetMissed {
            total: 3.34,
            target: 3.3,
            gap: 0.04,
        };
        assert_eq!(missed.exit_code(), 1);
    }

    #[test]
    fn test_formatter_includes_help_and_chain() {
        let err: anyhow::Error = LcaError::InventoryNotFound {
            path: PathBuf::from("missing.toml"),
        }
        .into();
        let formatted = ErrorFormatter::format(&err);
        assert!(formatted.contains("missing.toml"));
        assert!(formatted.contains("reference batch"));
        assert_eq!(ErrorFormatter::exit_code(&err), 66);
    }

    #[test]
    fn test_formatter_finds_error_behind_context() {
        let result: Result<(), LcaError> = Err(LcaError::InventoryNotFound {
            path: PathBuf::from("b.toml"),
        });
        let err = result.context("Loading batches").unwrap_err();
        assert_eq!(ErrorFormatter::exit_code(&err), 66);
        assert!(ErrorFormatter::format(&err).contains("caused by:"));
    }

    #[test]
    fn test_formatter_generic_error_exit_code() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(ErrorFormatter::exit_code(&err), 1);
    }
}
