//! Applies ALTER VSCHEMA statements to the sharding schema (VSchema) of a
//! keyspace.

pub mod ddl;
pub mod engine;
pub mod error;
pub mod store;
pub mod vschema;

pub use ddl::{ActionKind, AlterVschema, AutoIncSpec, VSchemaDdl, VindexSpec};
pub use engine::{apply_statement, apply_to_keyspace, apply_vschema_ddl};
pub use error::{DefinitionConflict, SchemaObject, StoreError, VSchemaError};
pub use store::{DiskSchemaStore, MemSchemaStore, SchemaStore};
pub use vschema::{AutoIncrement, ColumnVindex, KeyspaceSchema, Table, Vindex};
