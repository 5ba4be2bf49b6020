//! CLI driver for the coffee catalog core.
//!
//! # Responsibility
//! - Build a store (seed record or JSON seed file) and run one operation on it.
//! - Print the operation result and resulting store contents as JSON.
//!
//! # Invariants
//! - The store lives only for one invocation; nothing is written back.
//! - Failures exit non-zero with an error chain on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coffee_core::{
    default_log_level, init_logging, Coffee, CoffeeId, CoffeeService, CreateCoffee,
    InMemoryCoffeeRepository, UpdateCoffee,
};
use log::info;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Run one coffee catalog operation against an in-memory store
#[derive(Parser, Debug)]
#[command(name = "coffee_cli", version, about, long_about = None)]
struct Args {
    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// JSON file holding an array of coffees to start from instead of the seed record
    #[arg(long)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print core linkage info
    Ping,
    /// List every coffee in insertion order
    List,
    /// Show one coffee by id
    Get { id: CoffeeId },
    /// Append a new coffee
    Create {
        #[arg(long)]
        id: CoffeeId,
        #[arg(long)]
        name: String,
        #[arg(long)]
        brand: String,
        /// Repeat for several flavors
        #[arg(long = "flavor")]
        flavors: Vec<String>,
    },
    /// Merge the given fields into an existing coffee
    Update {
        id: CoffeeId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        /// Replaces the whole flavor list; repeat for several flavors
        #[arg(long = "flavor")]
        flavors: Vec<String>,
        /// Replace the flavor list with an empty one
        #[arg(long, conflicts_with = "flavors")]
        clear_flavors: bool,
    },
    /// Remove a coffee by id
    Remove { id: CoffeeId },
}

fn load_store(seed: Option<&Path>) -> Result<InMemoryCoffeeRepository> {
    let Some(path) = seed else {
        return Ok(InMemoryCoffeeRepository::seeded());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let records: Vec<Coffee> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid seed file {}", path.display()))?;
    InMemoryCoffeeRepository::with_records(records)
        .with_context(|| format!("rejected seed file {}", path.display()))
}

fn update_patch(
    name: Option<String>,
    brand: Option<String>,
    flavors: Vec<String>,
    clear_flavors: bool,
) -> UpdateCoffee {
    let flavors = if clear_flavors {
        Some(Vec::new())
    } else if flavors.is_empty() {
        None
    } else {
        Some(flavors)
    };
    UpdateCoffee {
        name,
        brand,
        flavors,
    }
}

fn run(command: Command, service: &CoffeeService<&InMemoryCoffeeRepository>) -> Result<Value> {
    let result = match command {
        Command::Ping => json!({
            "ping": coffee_core::ping(),
            "version": coffee_core::core_version(),
        }),
        Command::List => serde_json::to_value(service.find_all()?)?,
        Command::Get { id } => serde_json::to_value(service.find_one(id)?)?,
        Command::Create {
            id,
            name,
            brand,
            flavors,
        } => {
            let created = service.create(CreateCoffee {
                id,
                name,
                brand,
                flavors,
            })?;
            serde_json::to_value(created)?
        }
        Command::Update {
            id,
            name,
            brand,
            flavors,
            clear_flavors,
        } => {
            let patch = update_patch(name, brand, flavors, clear_flavors);
            serde_json::to_value(service.update(id, &patch)?)?
        }
        Command::Remove { id } => serde_json::to_value(service.remove(id)?)?,
    };
    Ok(result)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        init_logging(&level, log_dir).context("failed to initialize logging")?;
    }

    let repo = load_store(args.seed.as_deref())?;
    let service = CoffeeService::new(&repo);
    info!("event=cli_run module=cli status=start command={:?}", args.command);

    let result = run(args.command, &service)?;
    let output = json!({
        "result": result,
        "coffees": service.find_all()?,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
