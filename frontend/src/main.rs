//! Terminal client for the employee directory.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use frontend::domain::Route;
use frontend::domain::ports::{DirectoryApi, FixtureDirectoryApi};
use frontend::inbound::shell::{Command, Flow, Shell, USAGE};
use frontend::outbound::http::HttpDirectoryApi;
use frontend::settings::{ClientSettings, LogFormat};

/// `frontend` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "frontend",
    about = "Browse and edit the employee directory from a terminal",
    version
)]
struct CliArgs {
    /// Directory API base URL. Falls back to `EMS_API_URL` when omitted.
    #[arg(long = "api-url", value_name = "url")]
    api_url: Option<String>,
    /// Page to open first, e.g. `add` or `employees/3`.
    #[arg(long, value_name = "path", default_value = "home", value_parser = parse_route)]
    route: Route,
    /// Browse an empty, read-only directory instead of calling the API.
    #[arg(long)]
    offline: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();

    let mut settings = ClientSettings::load_from_environment()?;
    if args.api_url.is_some() {
        settings.api_url = args.api_url;
    }
    init_tracing(settings.log_format()?);
    let base = settings.api_url()?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    let api: Arc<dyn DirectoryApi> = if args.offline {
        info!("using the offline fixture directory");
        Arc::new(FixtureDirectoryApi)
    } else {
        info!(api = %base, "using directory API");
        Arc::new(HttpDirectoryApi::new(base).wrap_err("build HTTP client")?)
    };
    runtime.block_on(run(api, args.route))
}

fn init_tracing(format: LogFormat) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    if let Err(e) = installed {
        warn!(error = %e, "tracing init failed");
    }
}

fn parse_route(raw: &str) -> Result<Route, String> {
    Route::parse(raw).map_err(|error| error.to_string())
}

async fn run(api: Arc<dyn DirectoryApi>, start: Route) -> Result<()> {
    let mut shell = Shell::new(api);
    shell.open(start).await;
    present(&shell)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(shell.route())?;
        let Some(line) = lines.next_line().await.wrap_err("read command")? else {
            break;
        };
        let flow = match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => shell.execute(command).await,
            Err(err) => Err(err),
        };
        match flow {
            Ok(Flow::Continue) => present(&shell)?,
            Ok(Flow::ShowHelp) => write_block(USAGE)?,
            Ok(Flow::Quit) => break,
            Err(err) => {
                present_notices(&shell)?;
                write_block(&format!("error: {err}"))?;
            }
        }
    }
    Ok(())
}

/// Print pending notices, then the current page.
fn present(shell: &Shell) -> io::Result<()> {
    present_notices(shell)?;
    write_block(&shell.render())
}

fn present_notices(shell: &Shell) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for notice in shell.drain_notices() {
        writeln!(out, "* {notice}")?;
    }
    Ok(())
}

fn write_block(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{text}")?;
    writeln!(out)
}

fn prompt(route: &Route) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{route}> ")?;
    out.flush()
}
