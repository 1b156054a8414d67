use tracing::info;

use super::checks::{require_vindex, require_vindex_absent, require_vindex_unreferenced};
use crate::ddl::VindexSpec;
use crate::error::VSchemaError;
use crate::vschema::{KeyspaceSchema, Vindex};

pub(super) fn handle_create_vindex(
    keyspace: &str,
    schema: &mut KeyspaceSchema,
    spec: &VindexSpec,
) -> Result<(), VSchemaError> {
    require_vindex_absent(keyspace, schema, &spec.name)?;
    let (owner, params) = spec.parse_params();
    let vindex = Vindex {
        vindex_type: spec.vindex_type.clone().unwrap_or_default(),
        params,
        owner,
    };
    insert_vindex(keyspace, schema, &spec.name, vindex);
    Ok(())
}

pub(super) fn handle_drop_vindex(
    keyspace: &str,
    schema: &mut KeyspaceSchema,
    name: &str,
) -> Result<(), VSchemaError> {
    require_vindex(keyspace, schema, name)?;
    require_vindex_unreferenced(keyspace, schema, name)?;
    schema.vindexes.remove(name);
    Ok(())
}

/// Adds a vindex; the first one marks the keyspace sharded.
/// Dropping vindexes never clears the flag again.
pub(super) fn insert_vindex(
    keyspace: &str,
    schema: &mut KeyspaceSchema,
    name: &str,
    vindex: Vindex,
) {
    if schema.vindexes.is_empty() && !schema.sharded {
        schema.sharded = true;
        info!(keyspace = %keyspace, vindex = %name, "keyspace is now sharded");
    }
    schema.vindexes.insert(name.to_string(), vindex);
}
