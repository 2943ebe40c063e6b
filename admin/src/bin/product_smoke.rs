use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use product_admin::database::PostgresProbe;
use product_admin::settings::Settings;
use product_admin::smoke::SmokeTest;
use product_admin::telemetry;
use product_admin::transport::UreqTransport;
use product_core::ProductApi;

/// Interactive checks against the products API and the Postgres database.
#[derive(Debug, Parser)]
#[command(name = "product-smoke", version, about)]
struct Cli {
    /// Directory holding `base.toml` and `<env>.toml`.
    #[arg(long)]
    config_dir: Option<PathBuf>,
    /// Products collection URL; overrides `api.base_url`.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings =
        Settings::load(cli.config_dir.as_deref()).with_context(|| "failed to load settings")?;
    if let Some(url) = cli.api_url {
        settings.api.base_url = url;
    }
    settings.validate().context("invalid settings")?;
    telemetry::init(&settings.log);
    tracing::debug!(
        environment = %settings.environment,
        dir = %settings.config_dir.display(),
        "settings loaded"
    );

    let api = ProductApi::new(&settings.api.base_url, UreqTransport::new(settings.api.timeout()));
    let smoke = SmokeTest::new(&api, &PostgresProbe, settings.price_format()?);

    smoke
        .run(std::io::stdin().lock(), std::io::stdout().lock())
        .context("terminal I/O failed")
}
