use super::checks::{require_table_absent, require_unsharded, take_table};
use crate::ddl::ActionKind;
use crate::error::{SchemaObject, VSchemaError};
use crate::vschema::{KeyspaceSchema, Table};

pub(super) fn handle_add_sequence(
    keyspace: &str,
    schema: &mut KeyspaceSchema,
    table: &str,
) -> Result<(), VSchemaError> {
    require_unsharded(keyspace, schema, ActionKind::AddSequence)?;
    require_table_absent(keyspace, schema, SchemaObject::Sequence(table.to_string()), table)?;
    schema.tables.insert(table.to_string(), Table::sequence());
    Ok(())
}

pub(super) fn handle_drop_sequence(
    keyspace: &str,
    schema: &mut KeyspaceSchema,
    table: &str,
) -> Result<(), VSchemaError> {
    require_unsharded(keyspace, schema, ActionKind::DropSequence)?;
    take_table(keyspace, schema, SchemaObject::Sequence(table.to_string()), table)?;
    Ok(())
}
