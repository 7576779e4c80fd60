use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rmcp::{ServiceExt, transport::stdio};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use feedbin_tools::{FeedbinClient, FeedbinConfig, FeedbinServer, ToolRegistry, tools};

#[derive(Parser)]
#[command(name = "feedbin-tools")]
#[command(version)]
#[command(about = "Feedbin RSS API exposed as agent-callable tools", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the tool registry over MCP stdio (the default)
    Serve,
    /// List the available tools as JSON
    Tools,
    /// Invoke a single tool and print its result
    Call {
        /// Tool name, e.g. get_subscriptions
        name: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[derive(Serialize)]
struct ToolListing<'a> {
    name: &'a str,
    description: &'a str,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive("info".parse().expect("valid log directive"))
    };

    // Logs go to stderr; serve mode owns stdout for the MCP framing.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_registry() -> Result<ToolRegistry> {
    let config = FeedbinConfig::from_env().context("failed to load feedbin credentials")?;
    Ok(tools::registry(Arc::new(FeedbinClient::new(config))))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let registry = build_registry()?;
            info!(tools = registry.all().len(), "serving feedbin tools over stdio");

            let service = FeedbinServer::new(registry)
                .serve(stdio())
                .await
                .context("failed to start MCP server")?;
            service.waiting().await?;
        }
        Commands::Tools => {
            let registry = build_registry()?;
            let mut tools = registry.all();
            tools.sort_by(|a, b| a.name().cmp(b.name()));

            let listing: Vec<ToolListing> = tools
                .iter()
                .map(|tool| ToolListing {
                    name: tool.name(),
                    description: tool.description(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        Commands::Call { name, args } => {
            let registry = build_registry()?;
            let tool = registry
                .get(&name)
                .with_context(|| format!("unknown tool: {}", name))?;
            let params = serde_json::from_str(&args).context("failed to parse --args as JSON")?;

            match tool.execute(params).await {
                Ok(result) => {
                    println!("{}", result);
                }
                Err(e) => {
                    error!(tool = %name, error = %e, "tool call failed");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
