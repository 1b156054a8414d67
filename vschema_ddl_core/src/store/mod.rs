pub mod engine;
pub mod mem;
pub mod disk;

// Re-export main types for convenience
pub use engine::SchemaStore;
pub use mem::MemSchemaStore;
pub use disk::DiskSchemaStore;
