/// GraphQL schema builder
///
/// This module provides the `SchemaBuilder` which assembles the `User` and
/// `Post` object types, the `UserInput` input type, the `Date` scalar and the
/// three root types into a dynamic schema backed by a shared `Store`.

use crate::config::GraphqlConfig;
use crate::error::{BlogqlError, Result};
use crate::schema::resolver::{
    create_all_posts_resolver, create_all_users_resolver, create_comments_resolver,
    create_create_post_resolver, create_create_user_resolver, create_delete_post_resolver,
    create_new_person_subscription, create_one_post_resolver, create_update_post_resolver, POST,
    USER, USER_INPUT,
};
use crate::schema::scalars::{date_scalar, DATE};
use crate::store::Store;

use async_graphql::dynamic::{
    Field, FieldFuture, FieldValue, InputObject, InputValue, Object, Schema, Subscription, TypeRef,
};
use async_graphql::Value;
use std::sync::Arc;

/// Schema builder for the users and posts API
pub struct SchemaBuilder {
    store: Arc<Store>,
    limits: GraphqlConfig,
}

impl SchemaBuilder {
    /// Create a new schema builder over the given store
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            limits: GraphqlConfig::default(),
        }
    }

    /// Apply introspection and depth/complexity settings
    pub fn with_limits(mut self, limits: GraphqlConfig) -> Self {
        self.limits = limits;
        self
    }

    /// Build the complete GraphQL schema
    pub fn build(self) -> Result<Schema> {
        let query = Object::new("Query")
            .field(create_all_users_resolver())
            .field(create_all_posts_resolver())
            .field(create_one_post_resolver());

        let mutation = Object::new("Mutation")
            .field(create_create_user_resolver())
            .field(create_create_post_resolver())
            .field(create_update_post_resolver())
            .field(create_delete_post_resolver());

        let subscription = Subscription::new("Subscription").field(create_new_person_subscription());

        let mut schema_builder = Schema::build("Query", Some("Mutation"), Some("Subscription"))
            .register(date_scalar())
            .register(build_user_type())
            .register(build_post_type())
            .register(build_user_input())
            .register(query)
            .register(mutation)
            .register(subscription)
            .limit_depth(self.limits.max_depth)
            .limit_complexity(self.limits.max_complexity);

        if !self.limits.introspection {
            schema_builder = schema_builder.disable_introspection();
        }

        tracing::debug!(
            "Building schema (max_depth={}, max_complexity={}, introspection={})",
            self.limits.max_depth,
            self.limits.max_complexity,
            self.limits.introspection
        );

        schema_builder
            .data(self.store)
            .finish()
            .map_err(|e| BlogqlError::SchemaGeneration(format!("Failed to build schema: {}", e)))
    }
}

/// Build a schema over the given store with default limits
pub fn build_schema(store: Arc<Store>) -> Result<Schema> {
    SchemaBuilder::new(store).build()
}

fn build_user_type() -> Object {
    Object::new(USER)
        .field(value_field("id", TypeRef::named(TypeRef::INT)))
        .field(value_field("name", TypeRef::named(TypeRef::STRING)))
        .field(value_field("email", TypeRef::named(TypeRef::STRING)))
}

fn build_post_type() -> Object {
    Object::new(POST)
        .field(value_field("id", TypeRef::named(TypeRef::INT)))
        .field(value_field("author", TypeRef::named(USER)))
        .field(create_comments_resolver())
        .field(value_field("content", TypeRef::named(TypeRef::STRING)))
        .field(value_field("createdAt", TypeRef::named(DATE)))
        .field(value_field("updatedAt", TypeRef::named(DATE)))
}

fn build_user_input() -> InputObject {
    InputObject::new(USER_INPUT)
        .field(InputValue::new("name", TypeRef::named_nn(TypeRef::STRING)))
        .field(InputValue::new("email", TypeRef::named_nn(TypeRef::STRING)))
}

/// A field that reads its value from the parent object value by name.
///
/// Nested objects are passed on as parents for their own fields.
fn value_field(name: &str, type_ref: TypeRef) -> Field {
    let field_name = name.to_string();

    Field::new(name, type_ref, move |ctx| {
        let field_name = field_name.clone();
        FieldFuture::new(async move {
            let parent = ctx.parent_value.try_downcast_ref::<Value>()?;

            if let Value::Object(obj) = parent {
                match obj.get(field_name.as_str()) {
                    Some(Value::Null) | None => {}
                    Some(value @ Value::Object(_)) => {
                        return Ok(Some(FieldValue::owned_any(value.clone())));
                    }
                    Some(value) => return Ok(Some(FieldValue::value(value.clone()))),
                }
            }

            Ok(Some(FieldValue::NULL))
        })
    })
}
