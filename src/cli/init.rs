use blogql::config::Config;
use blogql::error::Result;

/// Run the init command to print or write the default configuration
pub async fn run(output: Option<String>) -> Result<()> {
    let config = Config::default();

    if let Some(output_path) = output {
        blogql::config::save_config(&config, &output_path)?;
        tracing::info!("📝 Generated {}", output_path);
        tracing::info!("🚀 Ready to serve! Run: blogql serve --config {}", output_path);
    } else {
        let toml_string = toml::to_string_pretty(&config)?;
        println!("{}", toml_string);
        tracing::info!("💡 Tip: Add --output <file> to save to a file instead of stdout");
    }

    Ok(())
}
