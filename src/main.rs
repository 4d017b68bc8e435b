//! playerinv - resolve `$playerinv` placeholders against an inventory fixture
//!
//! Usage:
//!   playerinv --player Steve '$playerinv:13'
//!   playerinv --fixture fixtures/server.toml --format json '$playerinv:0'
//!   playerinv --list
//!   playerinv --init-config --config config/playerinv.toml

mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use config::{HostConfig, DEFAULT_CONFIG_PATH};
use playerinv_core::ItemDescriptor;
use playerinv_placeholder::PlaceholderRegistry;
use playerinv_testkit::InventoryFixture;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Resolve $playerinv placeholders", long_about = None)]
struct Args {
    /// Placeholder token, e.g. `$playerinv:13`
    #[arg(required_unless_present_any = ["list", "init_config"])]
    token: Option<String>,

    /// Host configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Inventory fixture (overrides the configured one)
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Invoking player's name; omit to resolve with no player
    #[arg(long)]
    player: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// List registered placeholders and their usage, then exit
    #[arg(long)]
    list: bool,

    /// Write the effective configuration to `--config`, then exit
    #[arg(long)]
    init_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, config_problem) = HostConfig::load_from_path(&args.config);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
    config::report(config_problem);

    info!("Starting playerinv v{}", env!("CARGO_PKG_VERSION"));

    if args.init_config {
        config
            .save_to_path(&args.config)
            .with_context(|| format!("failed to write {}", args.config.display()))?;
        info!("wrote {}", args.config.display());
        return Ok(());
    }

    let registry = PlaceholderRegistry::with_defaults();
    if args.list {
        for name in registry.names() {
            if let Some(placeholder) = registry.get(name) {
                println!("{}", placeholder.schema().usage(name));
            }
        }
        return Ok(());
    }

    let Some(token) = args.token.as_deref() else {
        bail!("a placeholder token is required");
    };

    let fixture_path = args.fixture.unwrap_or(config.inventory_fixture);
    let host = InventoryFixture::load(&fixture_path)?
        .build()
        .with_context(|| format!("invalid inventory fixture {}", fixture_path.display()))?;

    let player = match args.player.or(config.default_player) {
        Some(name) => match host.player_named(&name) {
            Some(player) => Some(player),
            None => bail!("player {name} is not in {}", fixture_path.display()),
        },
        None => None,
    };
    debug!(token, player = ?player.map(|p| &p.name), "resolving");

    let result = registry
        .resolve_token(token, player, &host)
        .with_context(|| format!("failed to resolve {token}"))?;
    println!("{}", render(result.as_ref(), args.format)?);
    Ok(())
}

fn render(result: Option<&ItemDescriptor>, format: OutputFormat) -> Result<String> {
    Ok(match (result, format) {
        (None, _) => "null".to_string(),
        (Some(stack), OutputFormat::Text) => stack.to_string(),
        (Some(stack), OutputFormat::Json) => serde_json::to_string(stack)?,
    })
}
