use std::fmt;
use thiserror::Error;

use crate::ddl::ActionKind;

/// Schema object named in an error message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaObject {
    Vindex(String),
    Table(String),
    Sequence(String),
    ColumnVindex { table: String, vindex: String },
    AutoIncrement { table: String },
}

impl fmt::Display for SchemaObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaObject::Vindex(name) => write!(f, "vindex {name}"),
            SchemaObject::Table(name) => write!(f, "table {name}"),
            SchemaObject::Sequence(name) => write!(f, "sequence {name}"),
            SchemaObject::ColumnVindex { table, vindex } => {
                write!(f, "vindex {vindex} on table {table}")
            }
            SchemaObject::AutoIncrement { table } => write!(f, "auto increment on table {table}"),
        }
    }
}

/// Which part of an existing vindex definition disagrees with a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionConflict {
    Type { existing: String, requested: String },
    Owner { existing: String, requested: String },
    Params,
}

impl fmt::Display for DefinitionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionConflict::Type {
                existing,
                requested,
            } => write!(f, "type {existing} not {requested}"),
            DefinitionConflict::Owner {
                existing,
                requested,
            } => write!(f, "owner {existing:?} not {requested:?}"),
            DefinitionConflict::Params => f.write_str("different parameters"),
        }
    }
}

/// Failure reported by a schema store accessor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no VSchema stored for keyspace {0}")]
    NoNode(String),

    #[error("{0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VSchemaError {
    #[error("cannot update VSchema as the schema store connection is read-only")]
    PreconditionFailed,

    #[error("failed to get the current VSchema for the {keyspace} keyspace: {source}")]
    Store {
        keyspace: String,
        #[source]
        source: StoreError,
    },

    #[error("{object} already exists in keyspace {keyspace}")]
    AlreadyExists {
        keyspace: String,
        object: SchemaObject,
    },

    #[error("{object} does not exist in keyspace {keyspace}")]
    NotFound {
        keyspace: String,
        object: SchemaObject,
    },

    #[error("can not drop vindex {vindex} in keyspace {keyspace}: still defined on table {table}")]
    InUse {
        keyspace: String,
        vindex: String,
        table: String,
    },

    #[error("{action}: unsupported on sharded keyspace {keyspace}")]
    InvalidOnSharded {
        keyspace: String,
        action: ActionKind,
    },

    #[error("vindex {vindex} in keyspace {keyspace} defined with {conflict}")]
    DefinitionConflict {
        keyspace: String,
        vindex: String,
        conflict: DefinitionConflict,
    },

    #[error("vindex {vindex} already defined on table {table} in keyspace {keyspace}")]
    AlreadyDefinedOnTable {
        keyspace: String,
        table: String,
        vindex: String,
    },

    #[error("unexpected vindex ddl operation {0}")]
    UnknownAction(String),

    #[error("{action} statement is missing its {clause} clause")]
    MissingClause {
        action: ActionKind,
        clause: &'static str,
    },
}
