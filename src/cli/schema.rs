use blogql::error::Result;
use blogql::schema::build_schema;
use blogql::store::Store;
use std::sync::Arc;

/// Print the schema in SDL form
pub async fn run() -> Result<()> {
    let schema = build_schema(Arc::new(Store::new()))?;
    println!("{}", schema.sdl());
    Ok(())
}
