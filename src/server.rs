/// HTTP transport for the GraphQL schema

use crate::error::{BlogqlError, Result};

use async_graphql::dynamic::Schema;
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::GraphQLSubscription;
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub const GRAPHQL_PATH: &str = "/graphql";
pub const SUBSCRIPTION_PATH: &str = "/ws";

/// Build the router serving the schema
///
/// - `POST /graphql` executes queries and mutations
/// - `GET /graphql` serves GraphQL Playground
/// - `GET /ws` speaks the GraphQL websocket protocol for subscriptions
/// - `GET /health` answers `OK`
pub fn build_router(schema: Schema) -> Router {
    let subscriptions = GraphQLSubscription::new(schema.clone());

    Router::new()
        .route(GRAPHQL_PATH, post(graphql_handler).get(graphql_playground))
        .route_service(SUBSCRIPTION_PATH, subscriptions)
        .route("/health", get(health_check))
        .with_state(Arc::new(schema))
        .layer(CorsLayer::permissive())
}

/// Bind and serve until the process is stopped
pub async fn start_http_server(schema: Schema, addr: SocketAddr) -> Result<()> {
    let app = build_router(schema);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        BlogqlError::Server(format!(
            "Failed to bind to {}: {}. Port may be in use.",
            addr, e
        ))
    })?;

    tracing::info!("🚀 Server ready at http://{}{}", addr, GRAPHQL_PATH);

    axum::serve(listener, app)
        .await
        .map_err(|e| BlogqlError::Server(e.to_string()))?;

    Ok(())
}

async fn graphql_handler(
    State(schema): State<Arc<Schema>>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(schema.execute(request).await)
}

async fn graphql_playground() -> Html<String> {
    Html(playground_source(
        GraphQLPlaygroundConfig::new(GRAPHQL_PATH).subscription_endpoint(SUBSCRIPTION_PATH),
    ))
}

async fn health_check() -> &'static str {
    "OK"
}
