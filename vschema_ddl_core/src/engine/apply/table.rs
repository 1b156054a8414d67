use super::checks::{require_table_absent, require_unsharded, take_table};
use crate::ddl::ActionKind;
use crate::error::{SchemaObject, VSchemaError};
use crate::vschema::{KeyspaceSchema, Table};

pub(super) fn handle_add_table(
    keyspace: &str,
    schema: &mut KeyspaceSchema,
    table: &str,
) -> Result<(), VSchemaError> {
    require_unsharded(keyspace, schema, ActionKind::AddTable)?;
    require_table_absent(keyspace, schema, SchemaObject::Table(table.to_string()), table)?;
    schema.tables.insert(table.to_string(), Table::default());
    Ok(())
}

pub(super) fn handle_drop_table(
    keyspace: &str,
    schema: &mut KeyspaceSchema,
    table: &str,
) -> Result<(), VSchemaError> {
    require_unsharded(keyspace, schema, ActionKind::DropTable)?;
    take_table(keyspace, schema, SchemaObject::Table(table.to_string()), table)?;
    Ok(())
}
