mod auto_increment;
mod checks;
mod column_vindex;
mod sequence;
mod table;
mod vindex;

use tracing::{debug, warn};

use crate::ddl::{AlterVschema, VSchemaDdl};
use crate::error::{StoreError, VSchemaError};
use crate::store::SchemaStore;
use crate::vschema::KeyspaceSchema;

use auto_increment::{handle_add_auto_increment, handle_drop_auto_increment};
use column_vindex::{handle_add_column_vindex, handle_drop_column_vindex};
use sequence::{handle_add_sequence, handle_drop_sequence};
use table::{handle_add_table, handle_drop_table};
use vindex::{handle_create_vindex, handle_drop_vindex};

/// Applies one VSchema DDL action to the current VSchema of `keyspace` and
/// returns the modified schema for the caller to write back.
///
/// `store` is `None` when only a read-only connection to the schema store is
/// available. A keyspace without a stored VSchema starts from an empty,
/// unsharded one.
///
/// Nothing here locks or versions the stored schema: callers must serialize
/// DDL applications per keyspace, or concurrent writers will lose updates.
pub fn apply_vschema_ddl(
    keyspace: &str,
    store: Option<&dyn SchemaStore>,
    ddl: &VSchemaDdl,
) -> Result<KeyspaceSchema, VSchemaError> {
    let store = store.ok_or(VSchemaError::PreconditionFailed)?;
    let mut schema = match store.get_vschema(keyspace) {
        Ok(schema) => schema,
        Err(StoreError::NoNode(_)) => {
            debug!(keyspace = %keyspace, "no stored vschema, starting from an empty one");
            KeyspaceSchema::new()
        }
        Err(source) => {
            warn!(keyspace = %keyspace, error = %source, "failed to read vschema");
            return Err(VSchemaError::Store {
                keyspace: keyspace.to_string(),
                source,
            });
        }
    };

    apply_to_keyspace(keyspace, &mut schema, ddl)?;
    Ok(schema)
}

/// Converts a parsed statement into its typed action, then applies it
pub fn apply_statement(
    keyspace: &str,
    store: Option<&dyn SchemaStore>,
    stmt: AlterVschema,
) -> Result<KeyspaceSchema, VSchemaError> {
    let ddl = VSchemaDdl::try_from(stmt)?;
    apply_vschema_ddl(keyspace, store, &ddl)
}

/// Applies one action to a snapshot the caller already holds.
/// On error the snapshot is left untouched.
pub fn apply_to_keyspace(
    keyspace: &str,
    schema: &mut KeyspaceSchema,
    ddl: &VSchemaDdl,
) -> Result<(), VSchemaError> {
    let action = ddl.kind();
    debug!(keyspace = %keyspace, action = %action, "applying vschema ddl");

    let result = match ddl {
        VSchemaDdl::CreateVindex(spec) => handle_create_vindex(keyspace, schema, spec),
        VSchemaDdl::DropVindex { name } => handle_drop_vindex(keyspace, schema, name),
        VSchemaDdl::AddTable { table } => handle_add_table(keyspace, schema, table),
        VSchemaDdl::DropTable { table } => handle_drop_table(keyspace, schema, table),
        VSchemaDdl::AddColumnVindex {
            table,
            vindex,
            columns,
        } => handle_add_column_vindex(keyspace, schema, table, vindex, columns),
        VSchemaDdl::DropColumnVindex { table, vindex } => {
            handle_drop_column_vindex(keyspace, schema, table, vindex)
        }
        VSchemaDdl::AddSequence { table } => handle_add_sequence(keyspace, schema, table),
        VSchemaDdl::DropSequence { table } => handle_drop_sequence(keyspace, schema, table),
        VSchemaDdl::AddAutoIncrement { table, auto_inc } => {
            handle_add_auto_increment(keyspace, schema, table, auto_inc)
        }
        VSchemaDdl::DropAutoIncrement { table } => {
            handle_drop_auto_increment(keyspace, schema, table)
        }
    };

    match &result {
        Ok(()) => debug!(keyspace = %keyspace, action = %action, "applied vschema ddl"),
        Err(e) => debug!(keyspace = %keyspace, action = %action, error = %e, "rejected vschema ddl"),
    }
    result
}
