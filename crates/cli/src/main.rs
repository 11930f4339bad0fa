use std::io::{Read, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use conrelay_core::{RelayOptions, relay};

/// Terraform external data source that fetches a connector payload from a
/// URL named on stdin and relays it back as `{"connectors": "<json>"}`.
#[derive(Debug, Parser)]
#[command(name = "conrelay", version, about)]
struct Cli {
    /// Request field holding the payload URL
    #[arg(long, env = "CONRELAY_URL_KEY", default_value = conrelay_core::DEFAULT_URL_KEY)]
    url_key: String,

    /// Timeout for the payload fetch, in seconds
    #[arg(long, env = "CONRELAY_TIMEOUT", default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    // Terraform treats any non-zero exit as total failure; every error takes
    // the same stderr-and-exit-1 path.
    if let Err(err) = run(&cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read standard input")?;

    let options = RelayOptions {
        url_key: cli.url_key.clone(),
        timeout: Duration::from_secs(cli.timeout),
    };
    tracing::debug!(url_key = %options.url_key, "relaying payload");
    let response = relay(&input, &options).await?;

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    serde_json::to_writer(&mut stdout, &response).context("failed to write response")?;
    stdout.flush().context("failed to flush standard output")?;
    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    // stdout is reserved for the response object; all diagnostics go to stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_known_deployments() {
        let cli = Cli::try_parse_from(["conrelay"]).unwrap();
        assert_eq!(cli.url_key, "payload_link");
        assert_eq!(cli.timeout, 30);
    }

    #[test]
    fn url_key_is_configurable() {
        let cli = Cli::try_parse_from(["conrelay", "--url-key", "payload_url"]).unwrap();
        assert_eq!(cli.url_key, "payload_url");
    }
}
