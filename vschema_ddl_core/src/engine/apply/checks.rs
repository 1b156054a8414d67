use crate::ddl::ActionKind;
use crate::error::{DefinitionConflict, SchemaObject, VSchemaError};
use crate::vschema::{KeyspaceSchema, Table, Vindex};

pub(super) fn require_unsharded(
    keyspace: &str,
    schema: &KeyspaceSchema,
    action: ActionKind,
) -> Result<(), VSchemaError> {
    if schema.sharded {
        return Err(VSchemaError::InvalidOnSharded {
            keyspace: keyspace.to_string(),
            action,
        });
    }
    Ok(())
}

pub(super) fn require_vindex<'a>(
    keyspace: &str,
    schema: &'a KeyspaceSchema,
    name: &str,
) -> Result<&'a Vindex, VSchemaError> {
    schema.vindex(name).ok_or_else(|| VSchemaError::NotFound {
        keyspace: keyspace.to_string(),
        object: SchemaObject::Vindex(name.to_string()),
    })
}

pub(super) fn require_vindex_absent(
    keyspace: &str,
    schema: &KeyspaceSchema,
    name: &str,
) -> Result<(), VSchemaError> {
    if schema.vindexes.contains_key(name) {
        return Err(VSchemaError::AlreadyExists {
            keyspace: keyspace.to_string(),
            object: SchemaObject::Vindex(name.to_string()),
        });
    }
    Ok(())
}

/// No table may still route through a vindex that is about to be dropped
pub(super) fn require_vindex_unreferenced(
    keyspace: &str,
    schema: &KeyspaceSchema,
    name: &str,
) -> Result<(), VSchemaError> {
    match schema.table_referencing(name) {
        Some(table) => Err(VSchemaError::InUse {
            keyspace: keyspace.to_string(),
            vindex: name.to_string(),
            table: table.to_string(),
        }),
        None => Ok(()),
    }
}

pub(super) fn require_table_mut<'a>(
    keyspace: &str,
    schema: &'a mut KeyspaceSchema,
    object: SchemaObject,
    name: &str,
) -> Result<&'a mut Table, VSchemaError> {
    schema.tables.get_mut(name).ok_or_else(|| VSchemaError::NotFound {
        keyspace: keyspace.to_string(),
        object,
    })
}

/// Removes a table record, failing with NotFound when there is none
pub(super) fn take_table(
    keyspace: &str,
    schema: &mut KeyspaceSchema,
    object: SchemaObject,
    name: &str,
) -> Result<Table, VSchemaError> {
    schema.tables.remove(name).ok_or_else(|| VSchemaError::NotFound {
        keyspace: keyspace.to_string(),
        object,
    })
}

pub(super) fn require_table_absent(
    keyspace: &str,
    schema: &KeyspaceSchema,
    object: SchemaObject,
    name: &str,
) -> Result<(), VSchemaError> {
    if schema.tables.contains_key(name) {
        return Err(VSchemaError::AlreadyExists {
            keyspace: keyspace.to_string(),
            object,
        });
    }
    Ok(())
}

/// A statement restating an existing vindex must agree on type, owner and
/// params. Empty and missing params compare equal.
pub(super) fn require_same_definition(
    keyspace: &str,
    name: &str,
    existing: &Vindex,
    requested: &Vindex,
) -> Result<(), VSchemaError> {
    let conflict = if existing.vindex_type != requested.vindex_type {
        Some(DefinitionConflict::Type {
            existing: existing.vindex_type.clone(),
            requested: requested.vindex_type.clone(),
        })
    } else if existing.owner != requested.owner {
        Some(DefinitionConflict::Owner {
            existing: existing.owner.clone(),
            requested: requested.owner.clone(),
        })
    } else if existing.params != requested.params {
        Some(DefinitionConflict::Params)
    } else {
        None
    };

    match conflict {
        Some(conflict) => Err(VSchemaError::DefinitionConflict {
            keyspace: keyspace.to_string(),
            vindex: name.to_string(),
            conflict,
        }),
        None => Ok(()),
    }
}

/// Table records only exist while they carry a column vindex; run after any
/// removal from a table's column vindex list.
pub(super) fn drop_table_if_empty(schema: &mut KeyspaceSchema, table: &str) -> bool {
    let empty = schema
        .tables
        .get(table)
        .is_some_and(|t| t.column_vindexes.is_empty());
    if empty {
        schema.tables.remove(table);
    }
    empty
}
