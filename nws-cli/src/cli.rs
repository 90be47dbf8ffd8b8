use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use nws_core::{AlertOptions, ClientConfig, NwsClient, NwsError, report};

pub const USAGE_HINT: &str = "Usage: nws <alerts|count> [OPTIONS]\n\
     Run `nws --help` for the list of filters.";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "nws", version, about = "Active weather alerts from the NWS API")]
pub struct Cli {
    /// Print request and response diagnostics to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Alerts service root.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// User-Agent sent with every request.
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List currently active alerts.
    Alerts(FilterArgs),

    /// Show counts of active alerts by area.
    Count,

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Alert filters. Values are passed to the API as given.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Certainty (Observed, Likely, Possible, Unlikely, Unknown).
    #[arg(short, long, default_value = "")]
    pub certainty: String,

    /// Severity (Extreme, Severe, Moderate, Minor, Unknown).
    #[arg(short, long, default_value = "")]
    pub severity: String,

    /// API service (unused).
    #[arg(short = 'x', long, default_value = "")]
    pub service: String,

    /// Status (actual, exercise, system, test, draft).
    #[arg(short = 't', long, default_value = "")]
    pub status: String,

    /// Marine region code (AL, AT, GL, PA, PI).
    #[arg(short, long, default_value = "")]
    pub region: String,

    /// Region type (land, marine).
    #[arg(long = "rt", visible_alias = "region-type", default_value = "")]
    pub region_type: String,

    /// State/territory or marine area (AR, AH, CA, FL, ...).
    #[arg(short, long, default_value = "")]
    pub area: String,

    /// Event name, e.g. "Flood Warning".
    #[arg(short, long, default_value = "")]
    pub event: String,

    /// Zone ID.
    #[arg(short, long, default_value = "")]
    pub zone: String,

    /// Urgency (Immediate, Expected, Future, Past, Unknown).
    #[arg(short, long, default_value = "")]
    pub urgency: String,

    /// Message type (alert, update, cancel). Not sent.
    #[arg(long, default_value = "")]
    pub message_type: String,

    /// Point "lat,lon". Not sent.
    #[arg(long, default_value = "")]
    pub point: String,

    /// Event code. Not sent.
    #[arg(long, default_value = "")]
    pub code: String,

    /// Result limit. Not sent.
    #[arg(long)]
    pub limit: Option<u32>,
}

impl From<FilterArgs> for AlertOptions {
    fn from(args: FilterArgs) -> Self {
        Self {
            status: args.status,
            message_type: args.message_type,
            event: args.event,
            code: args.code,
            area: args.area,
            point: args.point,
            region: args.region,
            region_type: args.region_type,
            zone: args.zone,
            urgency: args.urgency,
            severity: args.severity,
            certainty: args.certainty,
            limit: args.limit,
            service: args.service,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = ClientConfig::with_overrides(self.base_url.clone(), self.user_agent.clone());
        debug!(?config, "client config");

        self.run_with(NwsClient::new(config)).await
    }

    /// Dispatch on the mode using `client` for any request.
    pub async fn run_with(self, client: NwsClient) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Alerts(filters)) => {
                let options = AlertOptions::from(filters);
                debug!(?options, "alert filters");

                let alerts = client.active_alerts(&options.to_params()).await?;
                report::print_alert_report(&alerts).context("Failed to write report")?;
            }
            Some(Command::Count) => {
                let summary = client.active_alert_count().await?;
                report::print_count_report(&summary).context("Failed to write report")?;
            }
            Some(Command::Unknown(args)) => {
                debug!(?args, "unrecognized mode");
                println!("{USAGE_HINT}");
            }
            None => println!("{USAGE_HINT}"),
        }

        Ok(())
    }
}

/// Text printed to stderr before exiting on a fatal error.
pub fn fatal_message(err: &anyhow::Error) -> String {
    let mut msg = String::new();

    if let Some(advisory) = err.downcast_ref::<NwsError>().and_then(NwsError::advisory) {
        msg.push_str(advisory);
        msg.push('\n');
    }
    msg.push_str(&format!("Error: {err:#}\n"));

    msg
}
