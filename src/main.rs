use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use grouped_items::fetch::{JsonDecoder, decode_body};
use grouped_items::item::Records;
use grouped_items::model::{GroupedResult, build_report_data, process};
use grouped_items::render::{render_html_report, render_text_report};
use grouped_items::{Config, FetchClient, FetchState, ItemsLoader, Result};
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "grouped-items")]
#[command(about = "Fetch the hiring item list and show it grouped by list id", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch items from the endpoint and render them.
    Fetch {
        #[arg(long, env = "GROUPED_ITEMS_URL")]
        url: Option<String>,

        /// Overall request timeout; unset keeps the HTTP client default.
        #[arg(long, env = "GROUPED_ITEMS_TIMEOUT_SECS")]
        timeout_secs: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Render items from a local JSON file (same shape as the endpoint).
    Process {
        #[arg(long)]
        input: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write to this file instead of stdout.
    #[arg(short = 'o', long)]
    out: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the rendered list.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Fetch {
            url,
            timeout_secs,
            output,
        } => {
            let mut config = Config::default();
            if let Some(url) = url {
                config.endpoint_url = url;
            }
            config.timeout = timeout_secs.map(Duration::from_secs);

            let client = FetchClient::http(config.timeout)?;
            let loader = ItemsLoader::new(client, config.endpoint_url.clone());

            match loader.load().await {
                FetchState::Success(grouped) => write_output(&grouped, &output)?,
                FetchState::Failure(message) => bail!("{}", message),
                other => bail!("fetch ended in unexpected state {:?}", other),
            }
        }
        Commands::Process { input, output } => {
            let body = std::fs::read(&input).with_context(|| format!("read input file {}", input))?;
            let records: Records =
                decode_body(&JsonDecoder, &body).with_context(|| format!("parse {}", input))?;
            info!(records = records.len(), input = %input, "loaded items");

            write_output(&process(records), &output)?;
        }
    }

    Ok(())
}

fn write_output(grouped: &GroupedResult, output: &OutputArgs) -> Result<()> {
    let data = build_report_data(grouped);
    let rendered = match output.format {
        Format::Text => render_text_report(&data),
        Format::Html => render_html_report(&data)?,
    };

    match &output.out {
        Some(path) => {
            std::fs::write(path, rendered).with_context(|| format!("write {}", path))?;
            println!("Wrote {}", path);
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
