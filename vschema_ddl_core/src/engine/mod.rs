pub mod apply;

pub use apply::{apply_statement, apply_to_keyspace, apply_vschema_ddl};
