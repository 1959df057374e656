mod repl;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use mcpchat_core::{
    ChatSession, ConsoleLogger, EnvSecretStore, GenaiProvider, Logger, McpClient, McpToolExecutor,
    ProviderModelConfig, SecretStore, ToolCatalog,
};

/// Terminal chat client with remote MCP tool calling
#[derive(Debug, Parser)]
#[command(name = "mcpchat", version, about)]
struct Args {
    /// Model to chat with, optionally provider-prefixed ("gemini/gemini-2.0-flash")
    #[arg(long, env = "MCPCHAT_MODEL", default_value = "gemini/gemini-2.0-flash")]
    model: String,

    /// URL of the MCP tool server
    #[arg(long, env = "MCP_SERVER_URL", default_value = "http://localhost:8000/mcp")]
    server: String,

    /// Optional system prompt
    #[arg(long, env = "MCPCHAT_SYSTEM")]
    system: Option<String>,

    /// Print debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Optional local override file; absence is fine
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let logger: Arc<dyn Logger> = Arc::new(ConsoleLogger::new().verbose(args.verbose));

    // "provider/model" strings carry their provider; bare names default to Gemini
    let provider_id = if args.model.contains('/') {
        GenaiProvider::extract_provider(&args.model)
            .unwrap_or("gemini")
            .to_string()
    } else {
        "gemini".to_string()
    };

    // The credential is required up front: the session cannot start without it.
    let secrets = EnvSecretStore::new();
    let Some(api_key) = secrets.get(&provider_id) else {
        bail!(
            "no API key found for {}; set {} (or put it in .env)",
            provider_id,
            EnvSecretStore::env_vars_for_provider(&provider_id)
                .and_then(|vars| vars.first().copied())
                .unwrap_or("the provider's API key variable"),
        );
    };

    // Remote session and the one-shot tool listing are both fatal on failure.
    let mcp = Arc::new(
        McpClient::connect(&args.server, logger.clone())
            .await
            .with_context(|| format!("failed to connect to MCP server at {}", args.server))?,
    );
    let catalog = ToolCatalog::discover(&mcp)
        .await
        .context("failed to list tools from MCP server")?;

    if let Some(info) = mcp.server_info() {
        logger.info(&format!(
            "Connected to {} v{} ({} tools)",
            info.name,
            info.version,
            catalog.len()
        ));
    }

    let executor = Arc::new(McpToolExecutor::new(mcp.clone(), logger.clone()));
    let provider = Arc::new(GenaiProvider::new(provider_id, logger.clone()));
    let model = ProviderModelConfig::new(&args.model).with_api_key(api_key);

    let mut session = ChatSession::new(provider, executor, catalog, model, logger.clone());
    if let Some(prompt) = args.system {
        session = session.with_system(prompt);
    }

    // The MCP session stays open for the whole conversation.
    repl::run(&mut session).await?;

    // Dropping the session releases the executor's handle on the client,
    // leaving ours as the last one.
    drop(session);
    if let Ok(client) = Arc::try_unwrap(mcp) {
        if let Err(e) = client.close().await {
            logger.warn(&format!("failed to close MCP session: {}", e));
        }
    }

    Ok(())
}
