//! Command-line interface for the client.

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::client::{Client, Query};
use crate::config::{validate_app_id, ClientConfig};
use crate::document::Document;
use crate::error::Result;
use crate::pod::Pod;
use crate::result::QueryResult;

/// Query Wolfram|Alpha from the command line.
#[derive(Parser)]
#[command(name = "wolframalpha")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Application identifier (default: $WOLFRAMALPHA_APP_ID)
    #[arg(long, global = true)]
    pub app_id: Option<String>,

    /// Query endpoint (default: $WOLFRAMALPHA_ENDPOINT or the public API)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a query and print the answer.
    Query {
        /// Natural-language input (e.g., "pi" or "population of France")
        input: String,

        /// Assumption to apply; may be repeated
        #[arg(short, long = "assumption")]
        assumptions: Vec<String>,

        /// Extra API parameter as key=value; may be repeated
        #[arg(short, long = "option", value_parser = parse_key_val)]
        options: Vec<(String, String)>,

        /// Print every pod instead of only the primary results
        #[arg(long)]
        all: bool,

        /// Print the title-to-text summary as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(cli.app_id, cli.endpoint)?;

    match cli.command {
        Commands::Query {
            input,
            assumptions,
            options,
            all,
            json,
        } => {
            let mut query = Query::new(input);
            for assumption in assumptions {
                query = query.assumption(assumption);
            }
            for (key, value) in options {
                query = query.option(key, value);
            }
            query_command(config, &query, all, json).await
        }
    }
}

/// Build the client configuration from flags, falling back to the environment.
fn resolve_config(app_id: Option<String>, endpoint: Option<String>) -> Result<ClientConfig> {
    let mut config = match app_id {
        Some(app_id) => {
            validate_app_id(&app_id)?;
            ClientConfig::new(app_id)
        }
        None => ClientConfig::from_env()?,
    };
    if let Some(endpoint) = endpoint {
        config = config.with_endpoint(endpoint);
    }
    Ok(config)
}

/// Execute the query command.
async fn query_command(config: ClientConfig, query: &Query, all: bool, json: bool) -> Result<()> {
    let client = Client::with_config(config);

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Querying \"{}\"...", query.input()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = match client.send(query).await {
        Ok(result) => result,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&result.details()?)?);
        return Ok(());
    }

    print_result(&result, all)
}

/// Pods to print: the primary results, or every pod with `--all` or when
/// no pod is a primary result.
fn pods_to_print(result: &QueryResult, all: bool) -> Result<Vec<Pod<'_>>> {
    if !all {
        let results = result.results()?;
        if !results.is_empty() {
            return Ok(results);
        }
    }
    result.pods()
}

fn print_result(result: &QueryResult, all: bool) -> Result<()> {
    let pods = pods_to_print(result, all)?;
    if pods.is_empty() {
        println!("{}", style("No results.").yellow());
    }
    for pod in &pods {
        print_pod(pod)?;
    }

    for warning in result.warnings()? {
        let text = warning.str_field("text").unwrap_or_default();
        println!(
            "{} {}",
            style(format!("Warning ({}):", warning.kind().unwrap_or("warning"))).yellow(),
            text
        );
    }

    Ok(())
}

fn print_pod(pod: &Pod<'_>) -> Result<()> {
    println!("{}", style(pod.title()?).cyan().bold());
    for text in pod.texts()? {
        if !text.is_empty() {
            println!("  {text}");
        }
    }
    Ok(())
}

/// Parse a `key=value` argument.
fn parse_key_val(arg: &str) -> std::result::Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{arg}'")),
    }
}
