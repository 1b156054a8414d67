use tracing::debug;

use super::checks::{drop_table_if_empty, require_same_definition, require_table_mut, require_vindex};
use super::vindex::insert_vindex;
use crate::ddl::VindexSpec;
use crate::error::{SchemaObject, VSchemaError};
use crate::vschema::{ColumnVindex, KeyspaceSchema};

/// Attaches a vindex to a table's columns.
///
/// With a declared type the vindex is created when missing, or must match
/// the existing definition exactly. Without one it must already exist.
/// The table record is created on first attach.
pub(super) fn handle_add_column_vindex(
    keyspace: &str,
    schema: &mut KeyspaceSchema,
    table: &str,
    spec: &VindexSpec,
    columns: &[String],
) -> Result<(), VSchemaError> {
    let name = spec.name.as_str();

    let new_vindex = match spec.definition() {
        Some(requested) => match schema.vindex(name) {
            Some(existing) => {
                require_same_definition(keyspace, name, existing, &requested)?;
                None
            }
            None => Some(requested),
        },
        None => {
            require_vindex(keyspace, schema, name)?;
            None
        }
    };

    if schema.table(table).is_some_and(|t| t.has_column_vindex(name)) {
        return Err(VSchemaError::AlreadyDefinedOnTable {
            keyspace: keyspace.to_string(),
            table: table.to_string(),
            vindex: name.to_string(),
        });
    }

    if let Some(vindex) = new_vindex {
        insert_vindex(keyspace, schema, name, vindex);
    }
    schema
        .tables
        .entry(table.to_string())
        .or_default()
        .column_vindexes
        .push(ColumnVindex {
            name: name.to_string(),
            columns: columns.to_vec(),
        });
    Ok(())
}

pub(super) fn handle_drop_column_vindex(
    keyspace: &str,
    schema: &mut KeyspaceSchema,
    table: &str,
    vindex: &str,
) -> Result<(), VSchemaError> {
    let record = require_table_mut(keyspace, schema, SchemaObject::Table(table.to_string()), table)?;
    if !record.has_column_vindex(vindex) {
        return Err(VSchemaError::NotFound {
            keyspace: keyspace.to_string(),
            object: SchemaObject::ColumnVindex {
                table: table.to_string(),
                vindex: vindex.to_string(),
            },
        });
    }

    record.remove_column_vindex(vindex);
    if drop_table_if_empty(schema, table) {
        debug!(keyspace = %keyspace, table = %table, "removed table without column vindexes");
    }
    Ok(())
}
