use anyhow::Result;
use clap::{Parser, Subcommand};

/// jamboagri - Tissue culture planting materials for Kirinyaga farmers
#[derive(Parser)]
#[command(name = "jamboagri")]
#[command(about = "Jambo Agri website and contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = jamboagri::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    jamboagri::observability::init_observability(
        "jamboagri",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => jamboagri::server::serve(config, host, port).await,
    }
}
