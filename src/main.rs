//! # Lootsmith Command Line Entry Point
//!
//! Generates one item or container from command line options and prints it as JSON.

use clap::Parser;
use lootsmith::{
    ContainerOptions, ContainerSize, FillLevel, GenerationTables, Generator, ItemCategory,
    ItemFactory, ItemRequest, ItemSubtype, LootError, LootResult, Quality, RandomSource,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Command line arguments for Lootsmith.
#[derive(Parser, Debug)]
#[command(name = "lootsmith")]
#[command(about = "Procedural item and container generator")]
#[command(version)]
struct Args {
    /// Item category (weapon, armor, accessory, consumable, miscellaneous, currency, container)
    #[arg(short, long, default_value = "weapon")]
    category: String,

    /// Subtype key within the category, e.g. GREATSWORD or TRADE_GOODS
    #[arg(short = 't', long)]
    subtype: Option<String>,

    /// Quality tier (poor, common, uncommon, rare, epic, legendary, artifact)
    #[arg(short, long, default_value = "common")]
    quality: String,

    /// Multiplier applied on top of the quality scaling
    #[arg(short, long, default_value_t = lootsmith::config::DEFAULT_POWER_SCALE)]
    power_scale: f64,

    /// Container size (small, medium, large, extra_large)
    #[arg(long, default_value = "medium")]
    container_size: String,

    /// Container fill level (empty, few, half, mostly_full, full)
    #[arg(long, default_value = "few")]
    fill_level: String,

    /// Do not seed containers with currency
    #[arg(long)]
    no_currency: bool,

    /// Random seed; the same seed reproduces everything except item ids
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with generation table overrides
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> LootResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;
    log::info!("Starting Lootsmith v{}", lootsmith::VERSION);

    let tables = match &args.tables {
        Some(path) => {
            log::info!("Loading generation tables from {}", path.display());
            GenerationTables::load(path)?
        }
        None => GenerationTables::default(),
    };
    tables.validate()?;

    let request = build_request(&args)?;
    let factory = ItemFactory::new(tables);

    let item = match args.seed {
        Some(seed) => {
            log::info!("Generating with seed {}", seed);
            generate(&factory, &request, &mut StdRng::seed_from_u64(seed))?
        }
        None => generate(&factory, &request, &mut rand::thread_rng())?,
    };

    println!("{}", serde_json::to_string_pretty(&item)?);
    Ok(())
}

/// Generates and validates one item.
fn generate(
    factory: &ItemFactory,
    request: &ItemRequest,
    rng: &mut dyn RandomSource,
) -> LootResult<lootsmith::GeneratedItem> {
    let item = factory.generate(request, rng)?;
    factory.validate(&item, request)?;
    log::info!(
        "{} produced '{}' ({} {})",
        factory.generator_type(),
        item.name,
        item.quality,
        item.category()
    );
    Ok(item)
}

/// Turns parsed arguments into an engine request.
fn build_request(args: &Args) -> LootResult<ItemRequest> {
    if !args.power_scale.is_finite() || args.power_scale <= 0.0 {
        return Err(LootError::InvalidRequest(format!(
            "power scale must be a positive number, got {}",
            args.power_scale
        )));
    }

    let category: ItemCategory = args.category.parse()?;
    let quality: Quality = args.quality.parse()?;

    let mut request = ItemRequest::new(category, quality).with_power_scale(args.power_scale);

    if let Some(key) = &args.subtype {
        let subtype = ItemSubtype::parse_in(category, key).ok_or_else(|| {
            LootError::InvalidRequest(format!("'{}' is not a {} subtype", key, category))
        })?;
        request = request.with_subtype(subtype);
    }

    if category == ItemCategory::Container {
        let size: ContainerSize = args.container_size.parse()?;
        let fill_level: FillLevel = args.fill_level.parse()?;
        request = request.with_container(ContainerOptions {
            size,
            fill_level,
            include_currency: !args.no_currency,
        });
    }

    Ok(request)
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> LootResult<()> {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        other => {
            return Err(LootError::InvalidRequest(format!(
                "unknown log level '{}'",
                other
            )))
        }
    };

    #[cfg(feature = "dev-tools")]
    {
        let filter = tracing_subscriber::EnvFilter::new(level.to_string().to_lowercase());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!("Tracing subscriber initialized at {}", level);
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .filter_level(level)
            .format_target(false)
            .init();
    }

    Ok(())
}
