//! Command-line interface for coinsight

mod render;

use anyhow::Context;
use clap::Parser;
use coinsight_engine::{
    EngineConfig, Language, Orchestrator, PromptKind, Trigger, TriggerController,
};
use render::{loading_line, render};
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "coinsight")]
#[command(about = "Price, news, and generated sentiment for one asset", long_about = None)]
struct Args {
    /// Asset id queried on startup (e.g. bitcoin, ethereum)
    #[arg(short, long)]
    asset: Option<String>,

    /// Display language: ko or en
    #[arg(short, long)]
    language: Option<Language>,

    /// Ask the model for a price forecast in addition to sentiment
    #[arg(long)]
    forecast: bool,

    /// Do not re-run the pipeline when only the language changes
    #[arg(long)]
    no_refetch_on_language: bool,

    /// Run the initial aggregation once and exit
    #[arg(long)]
    once: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    let mut builder = EngineConfig::builder().with_env_keys();
    if let Some(asset) = args.asset {
        builder = builder.default_asset_id(asset);
    }
    if let Some(language) = args.language {
        builder = builder.default_language(language);
    }
    if args.forecast {
        builder = builder.prompt_kind(PromptKind::Forecast);
    }
    builder = builder.refetch_on_language_change(!args.no_refetch_on_language);

    let config = builder.build().context("invalid configuration")?;
    let orchestrator =
        Arc::new(Orchestrator::from_config(&config).context("failed to build source clients")?);
    let mut controller = TriggerController::new(
        orchestrator,
        config.initial_query(),
        config.refetch_on_language_change,
    );

    info!("starting coinsight");

    // Initial load
    println!("{}", loading_line(controller.language()));
    if let Some(aggregate) = controller.handle(Trigger::Start).await {
        print!("{}", render(&aggregate));
    }

    if args.once {
        return Ok(());
    }

    println!();
    println!("Type an asset id to search, :lang ko|en to switch language, :q to quit.");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == ":q" || line == ":quit" {
            break;
        }

        let trigger = if let Some(code) = line.strip_prefix(":lang") {
            match Language::from_code(code.trim()) {
                Some(language) => Trigger::LanguageChange { language },
                None => {
                    println!("Unsupported language: {}", code.trim());
                    continue;
                }
            }
        } else {
            Trigger::Submit {
                asset_id: line.to_string(),
            }
        };

        let announce = match &trigger {
            Trigger::LanguageChange { language } => Some(*language),
            Trigger::Submit { .. } => Some(controller.language()),
            Trigger::Start => None,
        };

        if let Some(language) = announce {
            println!("{}", loading_line(language));
        }

        match controller.handle(trigger).await {
            Some(aggregate) => print!("{}", render(&aggregate)),
            None => println!("OK"),
        }
    }

    Ok(())
}
