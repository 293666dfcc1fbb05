//! Batch inventory validation
//!
//! Validation never blocks a calculation: out-of-range values are clamped
//! when line items are built, so every issue here is advisory.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use super::batch::BatchInventory;

static BATCH_ID_RE: OnceLock<Regex> = OnceLock::new();
static FARM_ID_RE: OnceLock<Regex> = OnceLock::new();
static RPA_ID_RE: OnceLock<Regex> = OnceLock::new();

fn batch_id_re() -> &'static Regex {
    BATCH_ID_RE.get_or_init(|| Regex::new(r"^BATCH-\d{4}-\d{3}$").expect("batch id regex is valid"))
}

fn farm_id_re() -> &'static Regex {
    FARM_ID_RE.get_or_init(|| Regex::new(r"^FARM-[A-Za-z0-9]+$").expect("farm id regex is valid"))
}

fn rpa_id_re() -> &'static Regex {
    RPA_ID_RE.get_or_init(|| Regex::new(r"^RPA-[A-Za-z0-9]+$").expect("rpa id regex is valid"))
}

/// Validation severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationSeverity {
    /// Informational message
    Info,
    /// Should be addressed, value was adjusted
    Warning,
}

impl ValidationSeverity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationSeverity::Info => "INFO",
            ValidationSeverity::Warning => "WARNING",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation issue found in a batch file
///
/// # Examples
///
/// ```
/// use broiler_lca::inventory::{ValidationIssue, ValidationSeverity};
///
/// let issue = ValidationIssue::warning("processing.cooling-pct", "Cooling share above 100%")
///     .with_suggestion("Clamped to 100%");
/// assert_eq!(issue.severity, ValidationSeverity::Warning);
/// assert!(issue.suggestion.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Severity level
    pub severity: ValidationSeverity,
    /// Field path, e.g. `feed.corn-kg`
    pub field: String,
    /// Description of the issue
    pub message: String,
    /// What happens to the value, or how to fix it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation issue
    pub fn new(
        severity: ValidationSeverity,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create a warning issue
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Warning, field, message)
    }

    /// Create an info issue
    pub fn info(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Info, field, message)
    }
}

/// Issues found in one batch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Issues in discovery order
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Add an issue
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// No issues at all
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Get only warnings
    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Warning)
            .collect()
    }
}

/// Checks a batch for values that will be adjusted or look mistyped
pub struct InventoryValidator;

impl InventoryValidator {
    /// Validate every section present in the batch
    pub fn validate(batch: &BatchInventory) -> ValidationResult {
        let mut result = ValidationResult::default();

        if !batch_id_re().is_match(&batch.batch_id) {
            result.add_issue(
                ValidationIssue::info(
                    "batch-id",
                    format!("'{}' does not follow BATCH-YYYY-NNN", batch.batch_id),
                )
                .with_suggestion("Use identifiers like BATCH-2024-156 so batches sort by year"),
            );
        }

        if let Some(feed) = &batch.feed {
            check_quantities(
                &mut result,
                "feed",
                &[
                    ("corn-kg", feed.corn_kg),
                    ("soybean-meal-kg", feed.soybean_meal_kg),
                    ("wheat-bran-kg", feed.wheat_bran_kg),
                    ("rice-bran-kg", feed.rice_bran_kg),
                    ("fish-meal-kg", feed.fish_meal_kg),
                    ("electricity-kwh", feed.electricity_kwh),
                    ("natural-gas-m3", feed.natural_gas_m3),
                    ("diesel-l", feed.diesel_l),
                ],
            );
        }

        if let Some(broiler) = &batch.broiler {
            check_quantities(
                &mut result,
                "broiler",
                &[
                    ("live-weight-kg", broiler.live_weight_kg),
                    ("feed-consumption-kg", broiler.feed_consumption_kg),
                    ("water-l", broiler.water_l),
                    ("electricity-kwh", broiler.electricity_kwh),
                    ("lpg-kg", broiler.lpg_kg),
                    ("litter-kg", broiler.litter_kg),
                ],
            );
            check_identifier(&mut result, "broiler.farm-id", broiler.farm_id.as_deref(), farm_id_re(), "FARM-XXX");
            if broiler.waste_treatment.is_none() {
                result.add_issue(
                    ValidationIssue::warning("broiler.waste-treatment", "No litter treatment recorded")
                        .with_suggestion("Treated as Stored; set Stored, Compost or Biogas"),
                );
            }
        }

        if let Some(processing) = &batch.processing {
            check_quantities(
                &mut result,
                "processing",
                &[
                    ("frozen-output-kg", processing.frozen_output_kg),
                    ("electricity-kwh", processing.electricity_kwh),
                    ("diesel-l", processing.diesel_l),
                    ("nh3-leak-kg", processing.nh3_leak_kg),
                    ("ldpe-kg", processing.ldpe_kg),
                    ("pp-kg", processing.pp_kg),
                ],
            );
            check_identifier(&mut result, "processing.rpa-id", processing.rpa_id.as_deref(), rpa_id_re(), "RPA-XXX");

            let cooling = processing.cooling_pct;
            if !(0.0..=100.0).contains(&cooling) {
                result.add_issue(
                    ValidationIssue::warning(
                        "processing.cooling-pct",
                        format!("Cooling share {} is outside 0-100%", cooling),
                    )
                    .with_suggestion(format!("Clamped to {}%", processing.effective_cooling_pct())),
                );
            }

            if batch.functional_output_kg().is_none() {
                result.add_issue(
                    ValidationIssue::warning("processing.frozen-output-kg", "No frozen output recorded")
                        .with_suggestion("Quantities are taken as already per kg of carcass"),
                );
            }
        }

        result
    }
}

fn check_quantities(result: &mut ValidationResult, section: &str, fields: &[(&str, f64)]) {
    for (name, value) in fields {
        if !value.is_finite() || *value < 0.0 {
            result.add_issue(
                ValidationIssue::warning(
                    format!("{}.{}", section, name),
                    format!("{} is not a non-negative number", value),
                )
                .with_suggestion("Counted as 0"),
            );
        }
    }
}

fn check_identifier(
    result: &mut ValidationResult,
    field: &str,
    value: Option<&str>,
    pattern: &Regex,
    expected: &str,
) {
    if let Some(id) = value {
        if !pattern.is_match(id) {
            result.add_issue(ValidationIssue::info(
                field,
                format!("'{}' does not follow {}", id, expected),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::WasteTreatment;

    #[test]
    fn test_reference_batch_is_clean() {
        let result = InventoryValidator::validate(&BatchInventory::reference());
        assert!(result.is_clean(), "unexpected issues: {:?}", result.issues);
    }

    #[test]
    fn test_negative_quantity_is_warning() {
        let mut batch = BatchInventory::reference();
        if let Some(feed) = batch.feed.as_mut() {
            feed.corn_kg = -10.0;
        }
        let result = InventoryValidator::validate(&batch);
        let warnings = result.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "feed.corn-kg");
    }

    #[test]
    fn test_cooling_out_of_range_reports_clamp() {
        let mut batch = BatchInventory::reference();
        if let Some(p) = batch.processing.as_mut() {
            p.cooling_pct = 120.0;
        }
        let result = InventoryValidator::validate(&batch);
        let issue = &result.issues[0];
        assert_eq!(issue.field, "processing.cooling-pct");
        assert_eq!(issue.suggestion.as_deref(), Some("Clamped to 100%"));
    }

    #[test]
    fn test_missing_treatment_and_output() {
        let mut batch = BatchInventory::reference();
        if let Some(b) = batch.broiler.as_mut() {
            b.waste_treatment = None;
        }
        if let Some(p) = batch.processing.as_mut() {
            p.frozen_output_kg = 0.0;
        }
        let result = InventoryValidator::validate(&batch);
        let fields: Vec<_> = result.issues.iter().map(|i| i.field.as_str()).collect();
        assert!(fields.contains(&"broiler.waste-treatment"));
        assert!(fields.contains(&"processing.frozen-output-kg"));
    }

    #[test]
    fn test_identifier_formats_are_info() {
        let mut batch = BatchInventory::reference();
        batch.batch_id = "batch 12".to_string();
        if let Some(b) = batch.broiler.as_mut() {
            b.farm_id = Some("Farm one".to_string());
            b.waste_treatment = Some(WasteTreatment::Compost);
        }
        let result = InventoryValidator::validate(&batch);
        assert_eq!(result.issues.len(), 2);
        assert!(result
            .issues
            .iter()
            .all(|i| i.severity == ValidationSeverity::Info));
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_identifier_patterns() {
        assert!(batch_id_re().is_match("BATCH-2024-156"));
        assert!(!batch_id_re().is_match("BATCH-24-156"));
        assert!(farm_id_re().is_match("FARM-001"));
        assert!(rpa_id_re().is_match("RPA-001"));
        assert!(!rpa_id_re().is_match("RPA-"));
    }
}
