//! Batch inventory file loading

use super::batch::BatchInventory;
use crate::error::LcaError;
use crate::infra::{FileSystem, RealFileSystem};
use log::{debug, warn};
use std::path::Path;

/// Loads batch inventories from TOML files
pub struct InventoryLoader;

impl InventoryLoader {
    /// Load a batch file
    ///
    /// A file without `batch-id` takes its identifier from the file stem.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use broiler_lca::inventory::InventoryLoader;
    /// use std::path::Path;
    ///
    /// let batch = InventoryLoader::load(Path::new("BATCH-2024-156.toml"))?;
    /// println!("{} complete: {}", batch.batch_id, batch.is_complete());
    /// # Ok::<(), broiler_lca::error::LcaError>(())
    /// ```
    pub fn load(path: &Path) -> Result<BatchInventory, LcaError> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load a batch file through a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<BatchInventory, LcaError> {
        let contents = fs.read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LcaError::InventoryNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LcaError::Io {
                    context: format!("reading {}", path.display()),
                    source: e,
                }
            }
        })?;

        let mut batch: BatchInventory =
            toml_edit::de::from_str(&contents).map_err(|e| LcaError::InventoryParse {
                path: path.to_path_buf(),
                message: e.to_string().trim().to_string(),
            })?;

        if batch.batch_id.trim().is_empty() {
            batch.batch_id = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            warn!(
                "{} has no batch-id, using '{}'",
                path.display(),
                batch.batch_id
            );
        }

        debug!(
            "Loaded batch {} from {} ({} section(s) missing)",
            batch.batch_id,
            path.display(),
            batch.missing_sections().len()
        );
        Ok(batch)
    }
}
