use blogql::error::{BlogqlError, Result};
use blogql::schema::SchemaBuilder;
use blogql::store::Store;
use std::sync::Arc;

/// Run the serve command to start the GraphQL server
pub async fn run(config_path: String, port: Option<u16>, bind: Option<String>) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);

    let mut config = blogql::config::load_config(&config_path)?;

    // Command-line flags win over file and environment
    config.apply_overrides(port, bind).map_err(BlogqlError::Config)?;

    let store = if config.store.seed {
        Store::seeded()
    } else {
        Store::new()
    };
    tracing::info!(
        "🗂️  Store ready with {} users and {} posts",
        store.users().await.len(),
        store.posts().await.len()
    );

    let schema = SchemaBuilder::new(Arc::new(store))
        .with_limits(config.graphql.clone())
        .build()?;

    tracing::info!("✅ Schema built successfully");

    let addr = config.server.socket_addr().map_err(BlogqlError::Config)?;

    tracing::info!("📊 Playground: http://{}/graphql", addr);
    tracing::info!("💡 Press Ctrl+C to stop the server");

    blogql::server::start_http_server(schema, addr).await
}
