/// GraphQL schema for the users and posts API
///
/// This module builds the dynamic schema: object and input types, the `Date`
/// scalar, and resolvers over the in-memory store.

mod builder;
mod resolver;
pub mod scalars;

pub use builder::{build_schema, SchemaBuilder};
pub use resolver::{author_to_value, post_to_value, user_to_value};
