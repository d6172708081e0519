/// GraphQL resolvers for the Query, Mutation and Subscription roots
///
/// Every resolver reads the shared `Arc<Store>` from schema data, performs a
/// single store operation and returns the result as a GraphQL object value.

use crate::error::BlogqlError;
use crate::schema::scalars;
use crate::store::{Author, NewAuthor, Post, Store, User};

use async_graphql::dynamic::{
    Field, FieldFuture, FieldValue, InputValue, ResolverContext, SubscriptionField,
    SubscriptionFieldFuture, TypeRef, ValueAccessor,
};
use async_graphql::{Name, Value};
use indexmap::IndexMap;
use std::sync::Arc;

pub const USER: &str = "User";
pub const POST: &str = "Post";
pub const USER_INPUT: &str = "UserInput";

fn store<'a>(ctx: &ResolverContext<'a>) -> async_graphql::Result<&'a Arc<Store>> {
    ctx.data::<Arc<Store>>()
}

fn int_arg(value: ValueAccessor<'_>, name: &str) -> Result<i32, BlogqlError> {
    let raw = value
        .i64()
        .map_err(|_| BlogqlError::InvalidArgument(format!("'{}' must be an integer", name)))?;
    i32::try_from(raw)
        .map_err(|_| BlogqlError::InvalidArgument(format!("'{}' is out of range: {}", name, raw)))
}

fn string_arg(ctx: &ResolverContext<'_>, name: &str) -> async_graphql::Result<String> {
    Ok(ctx.args.try_get(name)?.string()?.to_string())
}

/// `allusers: [User!]!`
pub fn create_all_users_resolver() -> Field {
    Field::new("allusers", TypeRef::named_nn_list_nn(USER), |ctx| {
        FieldFuture::new(async move {
            let users = store(&ctx)?.users().await;
            tracing::debug!("Resolving allusers ({} users)", users.len());

            let values = users
                .iter()
                .map(|user| FieldValue::owned_any(user_to_value(user)));
            Ok(Some(FieldValue::list(values)))
        })
    })
}

/// `allPosts: [Post!]!`
pub fn create_all_posts_resolver() -> Field {
    Field::new("allPosts", TypeRef::named_nn_list_nn(POST), |ctx| {
        FieldFuture::new(async move {
            let posts = store(&ctx)?.posts().await;
            tracing::debug!("Resolving allPosts ({} posts)", posts.len());

            let values = posts
                .iter()
                .map(|post| FieldValue::owned_any(post_to_value(post)));
            Ok(Some(FieldValue::list(values)))
        })
    })
}

/// `onePost(id: Int): Post!`
///
/// The return type is non-null, so an unknown or absent id is an error
/// rather than a null result.
pub fn create_one_post_resolver() -> Field {
    Field::new("onePost", TypeRef::named_nn(POST), |ctx| {
        FieldFuture::new(async move {
            let id = match ctx.args.get("id") {
                Some(value) if !value.is_null() => Some(int_arg(value, "id")?),
                _ => None,
            };
            tracing::debug!("Resolving onePost({:?})", id);

            let id = id.ok_or(BlogqlError::NotFound { id: None })?;
            let post = store(&ctx)?.find_post(id).await?;
            Ok(Some(FieldValue::owned_any(post_to_value(&post))))
        })
    })
    .argument(InputValue::new("id", TypeRef::named(TypeRef::INT)))
}

/// `createUser(name: String!, email: String!): User!`
pub fn create_create_user_resolver() -> Field {
    Field::new("createUser", TypeRef::named_nn(USER), |ctx| {
        FieldFuture::new(async move {
            let name = string_arg(&ctx, "name")?;
            let email = string_arg(&ctx, "email")?;

            let user = store(&ctx)?.create_user(name, email).await;
            tracing::info!("Created user {}", user.id);
            Ok(Some(FieldValue::owned_any(user_to_value(&user))))
        })
    })
    .argument(InputValue::new("name", TypeRef::named_nn(TypeRef::STRING)))
    .argument(InputValue::new("email", TypeRef::named_nn(TypeRef::STRING)))
}

/// `createPost(input: UserInput!, content: String!): Post!`
pub fn create_create_post_resolver() -> Field {
    Field::new("createPost", TypeRef::named_nn(POST), |ctx| {
        FieldFuture::new(async move {
            let input = ctx.args.try_get("input")?.object()?;
            let author = NewAuthor {
                name: input.try_get("name")?.string()?.to_string(),
                email: input.try_get("email")?.string()?.to_string(),
            };
            let content = string_arg(&ctx, "content")?;

            let post = store(&ctx)?
                .create_post(Author::from(author), content)
                .await;
            tracing::info!("Created post {}", post.id);
            Ok(Some(FieldValue::owned_any(post_to_value(&post))))
        })
    })
    .argument(InputValue::new("input", TypeRef::named_nn(USER_INPUT)))
    .argument(InputValue::new("content", TypeRef::named_nn(TypeRef::STRING)))
}

/// `updatePost(id: Int!, content: String!): Post!`
pub fn create_update_post_resolver() -> Field {
    Field::new("updatePost", TypeRef::named_nn(POST), |ctx| {
        FieldFuture::new(async move {
            let id = int_arg(ctx.args.try_get("id")?, "id")?;
            let content = string_arg(&ctx, "content")?;

            let post = store(&ctx)?.update_post(id, content).await?;
            tracing::info!("Updated post {}", id);
            Ok(Some(FieldValue::owned_any(post_to_value(&post))))
        })
    })
    .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::INT)))
    .argument(InputValue::new("content", TypeRef::named_nn(TypeRef::STRING)))
}

/// `deletePost(id: Int!): String!`
pub fn create_delete_post_resolver() -> Field {
    Field::new("deletePost", TypeRef::named_nn(TypeRef::STRING), |ctx| {
        FieldFuture::new(async move {
            let id = int_arg(ctx.args.try_get("id")?, "id")?;

            store(&ctx)?.delete_post(id).await?;
            tracing::info!("Deleted post {}", id);
            Ok(Some(FieldValue::value(format!("Post with id {} deleted", id))))
        })
    })
    .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::INT)))
}

/// `Post.comments: [Post!]!`
pub fn create_comments_resolver() -> Field {
    Field::new("comments", TypeRef::named_nn_list_nn(POST), |_ctx| {
        FieldFuture::new(async move {
            Err::<Option<FieldValue>, _>(BlogqlError::NotImplemented("Post.comments").into())
        })
    })
}

/// `Subscription.newPerson: User!`
pub fn create_new_person_subscription() -> SubscriptionField {
    SubscriptionField::new("newPerson", TypeRef::named_nn(USER), |_ctx| {
        SubscriptionFieldFuture::new(async move {
            Err::<futures::stream::Empty<async_graphql::Result<Value>>, _>(
                BlogqlError::NotImplemented("Subscription.newPerson").into(),
            )
        })
    })
}

/// Convert a stored user to a GraphQL object value
pub fn user_to_value(user: &User) -> Value {
    user_fields(Some(user.id), user.name.as_deref(), user.email.as_deref())
}

/// Convert an embedded author to a GraphQL object value of type `User`
pub fn author_to_value(author: &Author) -> Value {
    user_fields(author.id, author.name.as_deref(), author.email.as_deref())
}

fn user_fields(id: Option<i32>, name: Option<&str>, email: Option<&str>) -> Value {
    let mut object_map = IndexMap::new();
    object_map.insert(Name::new("id"), id.map_or(Value::Null, |id| Value::Number(id.into())));
    object_map.insert(Name::new("name"), optional_string(name));
    object_map.insert(Name::new("email"), optional_string(email));
    Value::Object(object_map)
}

/// Convert a post to a GraphQL object value, serializing its dates
/// through the `Date` scalar
pub fn post_to_value(post: &Post) -> Value {
    let mut object_map = IndexMap::new();
    object_map.insert(Name::new("id"), Value::Number(post.id.into()));
    object_map.insert(Name::new("author"), author_to_value(&post.author));
    object_map.insert(Name::new("content"), Value::String(post.content.clone()));
    object_map.insert(
        Name::new("createdAt"),
        post.created_at.as_ref().map_or(Value::Null, scalars::serialize),
    );
    object_map.insert(
        Name::new("updatedAt"),
        post.updated_at.as_ref().map_or(Value::Null, scalars::serialize),
    );
    Value::Object(object_map)
}

fn optional_string(s: Option<&str>) -> Value {
    s.map_or(Value::Null, |s| Value::String(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_posts;

    #[test]
    fn test_user_to_value_without_name() {
        let user = User {
            id: 7,
            name: None,
            email: Some("x@example.com".to_string()),
        };

        if let Value::Object(obj) = user_to_value(&user) {
            assert_eq!(obj.get("id").unwrap(), &Value::Number(7.into()));
            assert_eq!(obj.get("name").unwrap(), &Value::Null);
            assert_eq!(
                obj.get("email").unwrap(),
                &Value::String("x@example.com".to_string())
            );
        } else {
            panic!("Expected Value::Object");
        }
    }

    #[test]
    fn test_post_to_value_embeds_author() {
        let post = seed_posts().remove(0);

        if let Value::Object(obj) = post_to_value(&post) {
            assert_eq!(obj.get("content").unwrap(), &Value::String("first post".to_string()));
            assert_eq!(
                obj.get("createdAt").unwrap(),
                &Value::Number(1_634_860_800_000i64.into())
            );
            assert_eq!(obj.get("updatedAt").unwrap(), &Value::Null);

            let Some(Value::Object(author)) = obj.get("author") else {
                panic!("Expected author object");
            };
            assert_eq!(author.get("name").unwrap(), &Value::String("nahi".to_string()));
        } else {
            panic!("Expected Value::Object");
        }
    }

    #[test]
    fn test_author_without_id() {
        let author = Author::from(NewAuthor {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        });

        if let Value::Object(obj) = author_to_value(&author) {
            assert_eq!(obj.get("id").unwrap(), &Value::Null);
        } else {
            panic!("Expected Value::Object");
        }
    }
}
