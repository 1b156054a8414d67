use super::checks::require_table_mut;
use crate::ddl::AutoIncSpec;
use crate::error::{SchemaObject, VSchemaError};
use crate::vschema::{AutoIncrement, KeyspaceSchema};

pub(super) fn handle_add_auto_increment(
    keyspace: &str,
    schema: &mut KeyspaceSchema,
    table: &str,
    spec: &AutoIncSpec,
) -> Result<(), VSchemaError> {
    let record = require_table_mut(keyspace, schema, SchemaObject::Table(table.to_string()), table)?;
    if record.auto_increment.is_some() {
        return Err(VSchemaError::AlreadyExists {
            keyspace: keyspace.to_string(),
            object: SchemaObject::AutoIncrement {
                table: table.to_string(),
            },
        });
    }

    record.auto_increment = Some(AutoIncrement {
        column: spec.column.clone(),
        sequence: spec.sequence.clone(),
    });
    Ok(())
}

pub(super) fn handle_drop_auto_increment(
    keyspace: &str,
    schema: &mut KeyspaceSchema,
    table: &str,
) -> Result<(), VSchemaError> {
    let record = require_table_mut(keyspace, schema, SchemaObject::Table(table.to_string()), table)?;
    if record.auto_increment.is_none() {
        return Err(VSchemaError::NotFound {
            keyspace: keyspace.to_string(),
            object: SchemaObject::AutoIncrement {
                table: table.to_string(),
            },
        });
    }

    record.auto_increment = None;
    Ok(())
}
