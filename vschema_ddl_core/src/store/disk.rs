use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::store::engine::SchemaStore;
use crate::vschema::KeyspaceSchema;

/// Disk-backed schema store.
/// Each keyspace is one pretty-printed JSON file under `<root>/vschema/`.
#[derive(Debug)]
pub struct DiskSchemaStore {
    root: PathBuf,
}

impl DiskSchemaStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        initialize_layout(&root)?;
        Ok(Self { root })
    }

    fn keyspace_file_path(&self, keyspace: &str) -> Result<PathBuf, StoreError> {
        if keyspace.is_empty()
            || keyspace == "."
            || keyspace == ".."
            || keyspace.contains(['/', '\\'])
        {
            return Err(StoreError::Backend(format!(
                "Invalid keyspace name '{keyspace}'"
            )));
        }
        Ok(self.root.join("vschema").join(format!("{keyspace}.json")))
    }
}

impl SchemaStore for DiskSchemaStore {
    fn get_vschema(&self, keyspace: &str) -> Result<KeyspaceSchema, StoreError> {
        let path = self.keyspace_file_path(keyspace)?;
        if !path.exists() {
            return Err(StoreError::NoNode(keyspace.to_string()));
        }
        let content = fs::read_to_string(&path).map_err(|e| {
            StoreError::Backend(format!("Failed to read VSchema file for '{keyspace}': {e}"))
        })?;
        if content.trim().is_empty() {
            return Err(StoreError::NoNode(keyspace.to_string()));
        }
        serde_json::from_str(&content).map_err(|e| {
            StoreError::Backend(format!("Malformed VSchema JSON for '{keyspace}': {e}"))
        })
    }

    fn save_vschema(&mut self, keyspace: &str, schema: &KeyspaceSchema) -> Result<(), StoreError> {
        let path = self.keyspace_file_path(keyspace)?;
        let payload = serde_json::to_string_pretty(schema)
            .map_err(|e| StoreError::Backend(format!("Failed to serialize VSchema as JSON: {e}")))?;

        // Readers never see a partially written file.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, payload)
            .map_err(|e| StoreError::Backend(format!("Failed to write VSchema file: {e}")))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StoreError::Backend(format!("Failed to replace VSchema file: {e}")))?;
        debug!(keyspace = %keyspace, path = %path.display(), "saved vschema");
        Ok(())
    }
}

fn initialize_layout(root: &Path) -> Result<(), StoreError> {
    fs::create_dir_all(root.join("vschema")).map_err(|e| {
        StoreError::Backend(format!(
            "Failed to create VSchema directory under '{}': {e}",
            root.display()
        ))
    })
}
