use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use btc_fund_radar::{
    Dashboard, DashboardOptions, RadarClient, RadarError, Secrets, asset::DEFAULT_LOGO_FILE,
    server::{self, AppState},
};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Bitcoin price, Fear & Greed index and translated news on one page.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// TOML secrets file with `[cryptopanic] api_key` and `[deepl] api_key`.
    /// When omitted, CRYPTOPANIC_API_KEY and DEEPL_API_KEY are read from the environment.
    #[arg(long, global = true, env = "RADAR_SECRETS")]
    secrets: Option<PathBuf>,

    /// Directory holding the logo image. Default: `assets` next to the executable, then `./assets`.
    #[arg(long, global = true, env = "RADAR_ASSET_DIR")]
    asset_dir: Option<PathBuf>,

    /// IANA zone for the price capture time (e.g. Asia/Tokyo). Default: host local time.
    #[arg(long, global = true, env = "RADAR_TIMEZONE")]
    timezone: Option<String>,

    /// Overall timeout for each upstream request, in seconds. Default: none.
    #[arg(long, global = true, env = "RADAR_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Headline translations allowed in flight at once.
    #[arg(long, global = true, env = "RADAR_TRANSLATE_CONCURRENCY", default_value_t = 1)]
    translate_concurrency: usize,

    /// Address to listen on when serving.
    #[arg(long, global = true, env = "RADAR_BIND", default_value = "127.0.0.1:8501")]
    bind: SocketAddr,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the dashboard over HTTP (default).
    Serve,
    /// Build the page once and write the HTML to stdout or a file.
    Render {
        /// Output file. Default: stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,btc_fund_radar=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "btc-fund-radar failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), RadarError> {
    let secrets = match &cli.secrets {
        Some(path) => Secrets::from_file(path)?,
        None => Secrets::from_env()?,
    };

    let timezone = cli
        .timezone
        .as_deref()
        .map(|name| {
            name.parse::<Tz>()
                .map_err(|e| RadarError::Config(format!("unknown time zone '{name}': {e}")))
        })
        .transpose()?;

    let mut builder = RadarClient::builder().secrets(secrets);
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;

    let options = DashboardOptions {
        logo_path: asset_dir(cli.asset_dir.as_deref()).join(DEFAULT_LOGO_FILE),
        timezone,
        translate_concurrency: cli.translate_concurrency,
        ..DashboardOptions::default()
    };
    tracing::debug!(?options, "dashboard configured");
    let dashboard = Dashboard::new(&client, options);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let listener = TcpListener::bind(cli.bind).await?;
            server::serve(listener, Arc::new(AppState { dashboard })).await
        }
        Command::Render { out } => {
            let html = dashboard.build().await.to_html()?;
            match out {
                Some(path) => {
                    tokio::fs::write(&path, html).await?;
                    tracing::info!(path = %path.display(), "page written");
                }
                None => println!("{html}"),
            }
            Ok(())
        }
    }
}

fn asset_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
        .filter(|dir| dir.is_dir());
    beside_exe.unwrap_or_else(|| PathBuf::from("assets"))
}
