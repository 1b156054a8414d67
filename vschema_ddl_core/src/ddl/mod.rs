pub mod command;
pub mod params;

pub use command::{ActionKind, AlterVschema, AutoIncSpec, VSchemaDdl, VindexSpec};
pub use params::parse_params;
