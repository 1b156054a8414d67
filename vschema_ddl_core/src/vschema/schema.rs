use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Table type tag for unsharded sequence tables.
pub const SEQUENCE_TABLE_TYPE: &str = "sequence";

/// Sharding schema (VSchema) of one keyspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyspaceSchema {
    pub sharded: bool,
    pub vindexes: HashMap<String, Vindex>,
    pub tables: HashMap<String, Table>,
}

/// A named indexing function mapping column values to shards.
/// The type is an opaque label here; its params are never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vindex {
    #[serde(rename = "type")]
    pub vindex_type: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub owner: String,
}

/// Association of a vindex (by name) with the columns it routes on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnVindex {
    pub name: String,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoIncrement {
    pub column: String,
    pub sequence: String,
}

/// Routing description of a single table.
/// An empty type tag means an ordinary table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub table_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub column_vindexes: Vec<ColumnVindex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_increment: Option<AutoIncrement>,
}

impl KeyspaceSchema {
    /// Creates an unsharded schema with no tables or vindexes
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vindex(&self, name: &str) -> Option<&Vindex> {
        self.vindexes.get(name)
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Returns the first table whose column vindexes still name `vindex`.
    /// Tables are visited in name order so the answer is stable.
    pub fn table_referencing(&self, vindex: &str) -> Option<&str> {
        self.tables
            .iter()
            .filter(|(_, table)| table.has_column_vindex(vindex))
            .map(|(name, _)| name.as_str())
            .min()
    }
}

impl Table {
    pub fn sequence() -> Self {
        Self {
            table_type: SEQUENCE_TABLE_TYPE.to_string(),
            ..Self::default()
        }
    }

    pub fn is_sequence(&self) -> bool {
        self.table_type == SEQUENCE_TABLE_TYPE
    }

    pub fn has_column_vindex(&self, vindex: &str) -> bool {
        self.column_vindexes.iter().any(|cv| cv.name == vindex)
    }

    /// Removes the first column vindex named `vindex`, returning it
    pub fn remove_column_vindex(&mut self, vindex: &str) -> Option<ColumnVindex> {
        let idx = self
            .column_vindexes
            .iter()
            .position(|cv| cv.name == vindex)?;
        Some(self.column_vindexes.remove(idx))
    }
}
