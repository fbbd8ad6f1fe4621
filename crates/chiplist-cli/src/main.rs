use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use chiplist_core::logging::{self, LogTarget};
use chiplist_core::{AppConfig, ChiplistError, Item, ItemSource, filter_items, source};
use chiplist_tui::app::App;

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "chiplist",
    about = "Pick items from a remote list into a set of removable chips",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output in JSON format.
    /// Also enabled by setting CHIPLIST_JSON=1.
    #[arg(long, global = true)]
    json: bool,

    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Item endpoint, e.g. http://localhost:8080/items.
    #[arg(long, global = true)]
    url: Option<String>,

    /// Read items from a JSON file instead of the endpoint.
    #[arg(long, global = true)]
    items_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive picker (default).
    Pick,

    /// Fetch and print every item.
    List,

    /// Fetch and print the items whose name contains QUERY (case-insensitive).
    Filter { query: String },

    /// Config management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration.
    Show,
    /// Print the config file path.
    Path,
    /// Write the default configuration file.
    Init {
        #[arg(long)]
        force: bool,
    },
}

// ─── Entry ──────────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        let code = e
            .downcast_ref::<ChiplistError>()
            .map_or(1, |err| err.exit_code() as i32);
        std::process::exit(code);
    }
}

fn run(mut cli: Cli) -> Result<()> {
    let json_output = cli.json || std::env::var("CHIPLIST_JSON").as_deref() == Ok("1");

    match cli.command.take().unwrap_or(Commands::Pick) {
        Commands::Config { action } => run_config(action, &config_path(&cli), json_output)?,

        Commands::Pick => {
            let (config, runtime, source) = start_session(&cli, true)?;
            let mut app = App::new(config);
            chiplist_tui::run_tui(&mut app, source, runtime.handle())?;
            print_items(app.chips(), json_output, None)?;
        }

        Commands::List => {
            let (_, runtime, source) = start_session(&cli, false)?;
            let start = Instant::now();
            let items = runtime.block_on(source.fetch_items())?;
            print_items(&items, json_output, Some(start))?;
        }

        Commands::Filter { query } => {
            let (_, runtime, source) = start_session(&cli, false)?;
            let start = Instant::now();
            let items = runtime.block_on(source.fetch_items())?;
            let matched = filter_items(&items, &query);
            if matched.is_empty() && !json_output {
                eprintln!("No items match: {query}");
            }
            print_items(&matched, json_output, Some(start))?;
        }
    }

    Ok(())
}

fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(AppConfig::config_path)
}

/// Load config, apply flag overrides, install logging and build the item source.
fn start_session(
    cli: &Cli,
    interactive: bool,
) -> Result<(AppConfig, tokio::runtime::Runtime, Arc<dyn ItemSource>)> {
    let mut config = AppConfig::load_from(&config_path(cli))?;
    if let Some(url) = &cli.url {
        config.set_endpoint(url)?;
        config.source.items_file = None;
    }
    if let Some(path) = &cli.items_file {
        config.source.items_file = Some(path.to_string_lossy().to_string());
    }

    logging::init(
        &config.logging,
        LogTarget::for_session(&config.logging, interactive),
    )?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let source: Arc<dyn ItemSource> = Arc::from(source::from_config(&config)?);
    info!(source = source.name(), interactive, "session started");
    Ok((config, runtime, source))
}

fn run_config(action: ConfigAction, path: &std::path::Path, json_output: bool) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = AppConfig::load_from(path)?;
            if json_output {
                print_json(&serde_json::json!({"status":"ok","data":config}))?;
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
        ConfigAction::Path => {
            if json_output {
                print_json(&serde_json::json!({"status":"ok","data":{"path":path}}))?;
            } else {
                println!("{}", path.display());
            }
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            AppConfig::default().save_to(path)?;
            if json_output {
                print_json(&serde_json::json!({"status":"ok","data":{"path":path}}))?;
            } else {
                println!("Wrote default config to {}", path.display());
            }
        }
    }
    Ok(())
}

// ─── Output ─────────────────────────────────────────────────────────────────

fn print_items(items: &[Item], json_output: bool, started: Option<Instant>) -> Result<()> {
    if json_output {
        let mut envelope = serde_json::json!({"status":"ok","data":items});
        if let Some(start) = started {
            let dur = start.elapsed().as_millis() as u64;
            envelope["meta"] = serde_json::json!({"duration_ms":dur});
        }
        print_json(&envelope)
    } else {
        for item in items {
            println!("{}\t{}", item.id, item.name);
        }
        Ok(())
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
