//! Chronicle CLI and HTTP API entry point.
//!
//! Binary name: `chronicle`
//!
//! Parses CLI arguments, loads `.env` and the configuration file, wires the
//! model gateway, then starts the HTTP server or runs a one-shot command.

use clap::Parser;
use clap_complete::generate;

use chronicle_api::cli::{self, Cli, Commands};
use chronicle_api::http;
use chronicle_api::state::AppState;
use chronicle_infra::config::resolve_service_config;
use chronicle_infra::secret::load_dotenv;
use chronicle_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};
use chronicle_types::config::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Before tracing so RUST_LOG may come from .env
    let dotenv_path = load_dotenv();

    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    // Shell completions don't need configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "chronicle", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = resolve_service_config(&cli.config).await;

    let result = match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            serve(config).await
        }

        Commands::Prompt { category, input } => {
            cli::generate::print_prompt(category, input.as_deref()).await
        }

        Commands::Generate { category, input } => {
            let state = AppState::from_config(&config);
            cli::generate::generate(&state, category, input.as_deref()).await
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}

/// Bind the listener and serve until Ctrl+C or SIGTERM.
async fn serve(config: ServiceConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        %addr,
        provider = state.gateway.provider_name(),
        model = state.gateway.model(),
        model_errors = ?config.model_errors,
        "Chronicle listening"
    );
    println!(
        "  {} Chronicle listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
