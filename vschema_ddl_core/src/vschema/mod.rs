pub mod schema;

pub use schema::{AutoIncrement, ColumnVindex, KeyspaceSchema, Table, Vindex, SEQUENCE_TABLE_TYPE};
