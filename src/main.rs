use blogql::error::Result;
use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "blogql")]
#[command(version = "0.1.0")]
#[command(about = "In-memory users and posts behind a GraphQL API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default configuration, or write it to a file
    Init {
        /// Output config file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Start GraphQL server
    Serve {
        /// Config file path (optional; defaults apply when missing)
        #[arg(long, default_value = "blogql.toml")]
        config: String,

        /// Server port, overrides the config file
        #[arg(long)]
        port: Option<u16>,

        /// Interface to bind, overrides the config file
        #[arg(long)]
        bind: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { output } => {
            cli::init::run(output).await?;
        }
        Commands::Serve { config, port, bind } => {
            cli::serve::run(config, port, bind).await?;
        }
        Commands::Schema => {
            cli::schema::run().await?;
        }
    }

    Ok(())
}
