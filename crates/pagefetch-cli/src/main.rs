//! Pagefetch CLI - one-shot fetching and an MCP server over stdio

mod mcp;

use clap::{Parser, Subcommand};
use pagefetch::{FetchOptions, FetchRequest, FetchTool, DEFAULT_USER_AGENT};
use std::io::{self, Write};
use std::time::Duration;
use tracing::info;

/// Pagefetch - robots-aware web content fetching
#[derive(Parser, Debug)]
#[command(name = "pagefetch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Custom User-Agent string
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Ignore robots.txt rules
    #[arg(long, global = true)]
    ignore_robots_txt: bool,

    /// Proxy URL for outbound requests
    #[arg(long, global = true)]
    proxy_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run as MCP (Model Context Protocol) server over stdio
    Mcp,
    /// Fetch a URL and print the windowed content
    Fetch {
        /// URL to fetch
        url: String,

        /// Maximum number of bytes to return
        #[arg(long)]
        max_length: Option<usize>,

        /// Byte offset to start from
        #[arg(long)]
        start_index: Option<usize>,

        /// Print the raw body without HTML simplification
        #[arg(long)]
        raw: bool,
    },
}

impl Cli {
    fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            user_agent: self.user_agent.clone(),
            ignore_robots: self.ignore_robots_txt,
            proxy_url: self.proxy_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() {
    // Log to stderr; stdout carries content (and MCP framing).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    log_startup(&cli);

    let tool = match FetchTool::new(cli.fetch_options()) {
        Ok(tool) => tool,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Mcp => {
            mcp::run_server(tool).await;
        }
        Commands::Fetch {
            url,
            max_length,
            start_index,
            raw,
        } => {
            let mut request = FetchRequest::new(url);
            request.max_length = max_length;
            request.start_index = start_index;
            request.raw = raw;

            match tool.execute(&request).await {
                Ok(content) => writeln_safe(&content),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn log_startup(cli: &Cli) {
    info!(
        user_agent = cli
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT),
        ignore_robots_txt = cli.ignore_robots_txt,
        timeout_secs = cli.timeout_secs,
        "starting pagefetch"
    );
    if let Some(ref proxy) = cli.proxy_url {
        info!(proxy, "using proxy");
    }
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
