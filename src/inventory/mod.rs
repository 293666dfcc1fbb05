//! Batch activity data entry
//!
//! Provides:
//! - Feed mill, broiler farm and processing plant input records
//! - The emission factor table with config overrides
//! - TOML batch files and their validation
//! - Normalisation of a batch to 1 kg of frozen carcass

pub mod batch;
pub mod broiler;
pub mod factors;
pub mod feed;
pub mod loader;
pub mod processing;
pub mod validator;

pub use batch::BatchInventory;
pub use broiler::{BiowasteImpact, BroilerInput, WasteTreatment};
pub use factors::EmissionFactors;
pub use feed::FeedInput;
pub use loader::InventoryLoader;
pub use processing::ProcessingInput;
pub use validator::{InventoryValidator, ValidationIssue, ValidationResult, ValidationSeverity};
