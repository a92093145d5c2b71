//! Tech House CLI - catalog inspection, scripted sessions, and cart quotes.
//!
//! # Usage
//!
//! ```bash
//! # Print the seed catalog as YAML
//! th-cli catalog
//!
//! # Only products that are still available, as JSON
//! th-cli catalog --format json --available
//!
//! # Run a session from a script, showing each submitted line
//! th-cli replay session.txt --echo
//!
//! # Price a cart of seed products for a Gold member
//! th-cli quote 1 3 --tier gold
//! ```
//!
//! # Commands
//!
//! - `catalog` - Dump the seed catalog
//! - `replay` - Replay a scripted session without pauses
//! - `quote` - Price a cart of seed products
//!
//! Every command reads the same `TECH_HOUSE_*` environment as the
//! `tech-house` binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tech_house_core::{MembershipTier, ProductId};
use tech_house_storefront::config::{LogFormat, StorefrontConfig};
use tech_house_storefront::error::AppError;
use tech_house_storefront::telemetry;

mod commands;

use commands::CommandError;
use commands::catalog::Format;

/// Filter used when `RUST_LOG` is not set.
const LOG_FILTER: &str = "th_cli=info,tech_house_storefront=warn";

#[derive(Parser)]
#[command(name = "th-cli")]
#[command(author, version, about = "Tech House CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the seed catalog
    Catalog {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
        format: Format,

        /// Only list available products
        #[arg(short, long)]
        available: bool,
    },
    /// Replay a session from a script (one input line per file line)
    Replay {
        /// Script file
        file: PathBuf,

        /// Show each submitted line after its prompt
        #[arg(short, long)]
        echo: bool,
    },
    /// Price a cart of seed products
    Quote {
        /// Product IDs; repeat an ID to buy it more than once
        #[arg(required = true)]
        ids: Vec<ProductId>,

        /// Membership tier (`bronze`, `silver`, `gold`)
        #[arg(short, long)]
        tier: Option<MembershipTier>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            telemetry::init(LogFormat::default(), LOG_FILTER);
            return Err(AppError::from(err).into());
        }
    };
    telemetry::init(config.log_format, LOG_FILTER);

    let stdout = std::io::stdout();
    match cli.command {
        Commands::Catalog { format, available } => {
            let rendered = commands::catalog::render(config.currency, format, available)?;
            stdout.lock().write_all(rendered.as_bytes())?;
        }
        Commands::Replay { file, echo } => {
            commands::replay::from_file(config, &file, echo, stdout.lock()).await?;
        }
        Commands::Quote { ids, tier } => {
            let rendered = commands::quote::render(&ids, tier, config.delivery_fee)?;
            stdout.lock().write_all(rendered.as_bytes())?;
        }
    }
    Ok(())
}
