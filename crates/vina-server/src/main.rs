//! Vina Server CLI
//!
//! Starts the HTTP server for decision evaluation and LLM forwarding.

use std::env;
use std::process;
use vina_server::{config::ServerConfig, start_server, ServerError};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        // Load from specified config file
        let config_path = &args[2];
        ServerConfig::from_file(config_path)?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        // Default deployment path: configuration from the environment
        ServerConfig::from_env()?
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Vina Server - Decision Evaluation and LLM Forwarding");
    println!();
    println!("USAGE:");
    println!("    vina-server [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    Without --config, configuration is read from the environment:");
    println!("    - AUTH_SECRET (required): secret for signing session tokens");
    println!("    - GROQ_API_KEY (required): hosted LLM provider API key");
    println!("    - VINA_BIND_ADDRESS: bind address (default 127.0.0.1)");
    println!("    - VINA_BIND_PORT: bind port (default 3000)");
    println!("    - VINA_TOKEN_EXPIRY_SECS: session expiry (default 3600)");
    println!("    - GROQ_ENDPOINT: provider endpoint override");
    println!();
}
