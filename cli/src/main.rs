//! tac-verify: verify a health-clearance track for one passenger.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clearance_tac::{ClearanceVerifier, TacConfig, VerificationRequest};
use clearance_types::{ControlDate, CountryCode, Passenger, Route, TrackKind};
use clearance_utils::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "tac-verify", about = "Verify health-clearance certificates against TAC")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, global = true, env = "TAC_CONFIG")]
    config: Option<PathBuf>,

    /// Endpoint for international (DCC) tracks.
    #[arg(long, global = true, env = "TAC_DCC_ENDPOINT")]
    dcc_endpoint: Option<String>,

    /// Endpoint for domestic 2D-DOC tracks.
    #[arg(long, global = true, env = "TAC_2DDOC_ENDPOINT")]
    two_d_doc_endpoint: Option<String>,

    /// Outbound proxy URL.
    #[arg(long, global = true, env = "TAC_PROXY")]
    proxy: Option<String>,

    /// Authorization header value sent with every request.
    #[arg(long, global = true, env = "TAC_AUTH_HEADER", hide_env_values = true)]
    auth_header: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "TAC_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "TAC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Verify one track for one passenger.
    Verify {
        /// The certificate payload, or "-" to read it from stdin.
        #[arg(long)]
        track: String,

        /// Passenger first name as booked.
        #[arg(long)]
        first_name: String,

        /// Passenger last name as booked.
        #[arg(long)]
        last_name: String,

        /// Instant the certificate must be valid at (YYYY-MM-DDTHH:MM:SS).
        #[arg(long)]
        control_date: Option<ControlDate>,

        /// Origin country code.
        #[arg(long = "from", requires = "to")]
        from: Option<CountryCode>,

        /// Destination country code.
        #[arg(long = "to", requires = "from")]
        to: Option<CountryCode>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

/// Printed on stdout after a verification that reached the authority.
#[derive(Debug, Serialize)]
struct VerdictReport {
    verified: bool,
    track_kind: TrackKind,
    error: Option<&'static str>,
}

/// Layer file config, then env vars and flags.
fn effective_config(cli: &Cli) -> anyhow::Result<TacConfig> {
    let mut config = match &cli.config {
        Some(path) => TacConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TacConfig::default(),
    };

    if let Some(v) = &cli.dcc_endpoint {
        config.dcc_endpoint = v.clone();
    }
    if let Some(v) = &cli.two_d_doc_endpoint {
        config.two_d_doc_endpoint = v.clone();
    }
    if let Some(v) = &cli.proxy {
        config.proxy = Some(v.clone());
    }
    if let Some(v) = &cli.auth_header {
        config.auth_header = Some(v.clone());
    }
    if let Some(v) = cli.log_format {
        config.log_format = v;
    }
    if let Some(v) = &cli.log_level {
        config.log_level = v.clone();
    }
    Ok(config)
}

fn read_track(arg: &str) -> anyhow::Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut track = String::new();
    std::io::stdin()
        .read_to_string(&mut track)
        .context("failed to read track from stdin")?;
    Ok(track.trim_end_matches(['\r', '\n']).to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = effective_config(&cli)?;
    clearance_utils::init_logging(config.log_format, &config.log_level);

    match cli.command {
        Command::Config => {
            print!("{}", config.to_toml_string()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify {
            track,
            first_name,
            last_name,
            control_date,
            from,
            to,
        } => {
            let track = read_track(&track)?;
            let mut request = VerificationRequest::new(track);
            if let Some(date) = control_date {
                request = request.with_control_date(date);
            }
            if let (Some(from), Some(to)) = (from, to) {
                request = request.with_route(Route::departure(from, to));
            }

            let verifier = ClearanceVerifier::from_config(config)?;
            let (track_kind, _) = verifier.resolve_url(&request)?;
            tracing::info!(kind = track_kind.as_str(), "verifying health clearance");

            let mut passenger = Passenger::new(first_name, last_name);
            let verified = verifier
                .verify(
                    &request.track,
                    &mut passenger,
                    request.control_date,
                    request.route.clone(),
                )
                .await?;

            let report = VerdictReport {
                verified,
                track_kind,
                error: passenger.error_code(),
            };
            println!("{}", serde_json::to_string(&report)?);
            Ok(if verified {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
    }
}
