use crate::error::StoreError;
use crate::vschema::KeyspaceSchema;

/// Schema store trait - abstraction over where keyspace VSchemas live
/// (in-memory, on disk, a topology service, etc.)
///
/// Implementations do no locking; callers serialize writes per keyspace.
pub trait SchemaStore {
    /// Fetches the current VSchema of a keyspace.
    /// Returns `StoreError::NoNode` when none has been written yet.
    fn get_vschema(&self, keyspace: &str) -> Result<KeyspaceSchema, StoreError>;

    /// Replaces the stored VSchema of a keyspace
    fn save_vschema(&mut self, keyspace: &str, schema: &KeyspaceSchema) -> Result<(), StoreError>;
}
