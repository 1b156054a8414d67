use std::collections::HashMap;

use crate::error::StoreError;
use crate::store::engine::SchemaStore;
use crate::vschema::KeyspaceSchema;

/// In-memory schema store using HashMap
#[derive(Debug, Default)]
pub struct MemSchemaStore {
    keyspaces: HashMap<String, KeyspaceSchema>,
}

impl MemSchemaStore {
    /// Creates a new empty in-memory store
    pub fn new() -> Self {
        Self {
            keyspaces: HashMap::new(),
        }
    }

    pub fn contains(&self, keyspace: &str) -> bool {
        self.keyspaces.contains_key(keyspace)
    }
}

impl SchemaStore for MemSchemaStore {
    fn get_vschema(&self, keyspace: &str) -> Result<KeyspaceSchema, StoreError> {
        self.keyspaces
            .get(keyspace)
            .cloned()
            .ok_or_else(|| StoreError::NoNode(keyspace.to_string()))
    }

    fn save_vschema(&mut self, keyspace: &str, schema: &KeyspaceSchema) -> Result<(), StoreError> {
        self.keyspaces.insert(keyspace.to_string(), schema.clone());
        Ok(())
    }
}
