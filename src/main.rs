use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use slidev_mcp::SlidevMcpServer;

#[derive(Parser)]
#[command(name = "slidev-mcp", about = "Standalone HTTP server for Slidev presentation tools")]
struct Cli {
    /// Project directory to load at startup (must contain slides.md)
    #[arg(short = 'j', long)]
    project: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, default_value = "13777", env = "SLIDEV_MCP_PORT")]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut server = SlidevMcpServer::new();
    if let Some(project) = cli.project {
        let args = serde_json::json!({ "path": project.display().to_string() });
        let resp = slidev_mcp::mcp::handlers::handle_tool_call(&mut server, "load_slidev", args).await;
        if !resp.success {
            eprintln!("Warning: {}", resp.message);
        }
    }

    slidev_mcp::http::serve(&cli.bind, cli.port, server).await?;

    Ok(())
}
