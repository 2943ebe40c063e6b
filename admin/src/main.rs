use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use product_admin::settings::Settings;
use product_admin::telemetry;
use product_admin::transport::UreqTransport;
use product_admin::ui::{self, AppState, SharedTransport};
use tokio::net::TcpListener;

/// Web UI for managing products through the remote API.
#[derive(Debug, Parser)]
#[command(name = "product-admin", version, about)]
struct Cli {
    /// Directory holding `base.toml` and `<env>.toml`.
    #[arg(long)]
    config_dir: Option<PathBuf>,
    /// Products collection URL; overrides `api.base_url`.
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings =
        Settings::load(cli.config_dir.as_deref()).with_context(|| "failed to load settings")?;
    if let Some(url) = cli.api_url {
        settings.api.base_url = url;
    }
    if let Some(host) = cli.host {
        settings.server.host = host;
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    settings.validate().context("invalid settings")?;

    telemetry::init(&settings.log);
    tracing::debug!(
        environment = %settings.environment,
        dir = %settings.config_dir.display(),
        "settings loaded"
    );
    tracing::info!(api = %settings.api.base_url, locale = %settings.display.locale, "product admin starting");

    let transport: SharedTransport = Arc::new(UreqTransport::new(settings.api.timeout()));
    let state = AppState::new(&settings.api.base_url, transport, settings.price_format()?);

    let listener = TcpListener::bind((settings.server.host.as_str(), settings.server.port))
        .await
        .with_context(|| format!("failed to bind to {}:{}", settings.server.host, settings.server.port))?;

    ui::serve(listener, state).await
}
