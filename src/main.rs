use std::env;
use std::io::{self, BufRead, Write};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use arivu::config::{Config, Overrides, load_config, log_filter};
use arivu::{AppState, router};

#[derive(Parser)]
#[command(name = "arivu")]
#[command(about = "English token stemming service and command-line filter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    overrides: Overrides,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default).
    Serve,
    /// Read lines from stdin and print each line's tokens as a JSON array.
    Stem,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli.overrides, |key| env::var(key).ok());

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Stem => stem_stdin(&config),
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    info!("binding to {}:{}", config.host, config.port);
    if let Some(path) = &config.abbreviations_path {
        info!("using abbreviations at {}", path.display());
    }
    info!("max tokens per request: {}", config.max_tokens);

    let start = Instant::now();
    let pipeline = Arc::new(config.build_pipeline()?);
    info!(
        "pipeline ready in {} ms ({} abbreviations)",
        start.elapsed().as_millis(),
        pipeline.abbreviations().len()
    );

    let state = AppState {
        pipeline,
        max_tokens: config.max_tokens,
    };

    let app = router(state).layer(TraceLayer::new_for_http());
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.host, config.port))?;
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}

fn stem_stdin(config: &Config) -> anyhow::Result<()> {
    let pipeline = config.build_pipeline()?;
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = line.with_context(|| format!("read stdin line {}", lineno + 1))?;
        let tokens = pipeline.process(&line);
        serde_json::to_writer(&mut out, &tokens)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
