use clap::Parser;
use relgrab::config::Config;
use relgrab::core::{format_error_with_help, RelgrabResult};
use relgrab::github::GitHubClient;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::fetch::{FetchOptions, FetchOutcome};

#[derive(Parser)]
#[command(name = "relgrab")]
#[command(about = "Download a release asset from a GitHub repository")]
#[command(version)]
struct Cli {
    /// Repository name, like: owner/repository
    repo: String,

    /// Tag name; if not specified, the latest release is used
    #[arg(long)]
    tag: Option<String>,

    /// Access token, required for private repositories
    #[arg(long)]
    token: Option<String>,

    /// Directory where the asset is saved (default: current directory)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Asset file name to download (default: the first asset of the release)
    #[arg(long)]
    asset: Option<String>,

    /// List releases and their assets instead of downloading
    #[arg(long)]
    list: bool,

    /// Debug logging
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("relgrab=debug,relgrab_core=debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file and environment first, then command line flags on top
fn build_config(cli: &Cli) -> RelgrabResult<Config> {
    let mut config = Config::load()?;

    if let Some(token) = cli.token.as_ref().filter(|t| !t.is_empty()) {
        config.token = Some(token.clone());
    }
    if let Some(dir) = &cli.dir {
        config.download_dir = Some(dir.clone());
    }

    Ok(config)
}

async fn run(cli: Cli) -> RelgrabResult<()> {
    let config = build_config(&cli)?;
    let client = GitHubClient::new(&config)?;

    let options = FetchOptions {
        repo: cli.repo,
        tag: cli.tag,
        asset: cli.asset,
        dir: config.download_dir(),
        list: cli.list,
    };

    match cli::fetch::run(&client, options).await? {
        FetchOutcome::Listed(count) => tracing::debug!(count, "releases listed"),
        FetchOutcome::Downloaded(downloaded) => {
            tracing::debug!(path = %downloaded.path.display(), "done")
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
