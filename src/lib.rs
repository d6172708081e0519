pub mod config;
pub mod error;
pub mod schema;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use config::{Config, GraphqlConfig, ServerConfig, StoreConfig};
pub use error::{BlogqlError, Result};
pub use schema::{build_schema, SchemaBuilder};
pub use store::Store;
