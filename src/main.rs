use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use sighting_geocoder::backfill::{
    run_fast_backfill, run_precise_backfill, FastOptions, PreciseOptions, DEFAULT_BATCH_SIZE,
    DEFAULT_PAGE_SIZE,
};
use sighting_geocoder::config::AppConfig;
use sighting_geocoder::location::{GeocodeCache, NominatimGeocoder};
use sighting_geocoder::store::SupabaseStore;
use sighting_geocoder::{logging, LocationResolver, ResolvedCoordinate};

/// sightgeo: turn free-text sighting locations into coordinates.
///
/// Examples:
///   sightgeo resolve "Bristol (UK/England)" "Anytown, TX, USA"
///   sightgeo resolve --seed 626 "Sudbury, ON"
///   sightgeo backfill --dry-run
///   sightgeo precise --start-from 1200
#[derive(Parser)]
#[command(name = "sightgeo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve location strings offline and print JSON.
    Resolve {
        #[arg(required = true)]
        text: Vec<String>,

        /// Seed the jitter for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Fill missing coordinates with the offline resolver.
    Backfill {
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: usize,

        /// Rows per fetch. Supabase serves at most 1000; larger values are clamped.
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,

        /// Resolve and count without writing.
        #[arg(long)]
        dry_run: bool,
    },

    /// Fill missing coordinates through Nominatim, one lookup per unique location.
    Precise {
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: usize,

        /// Resume from the Nth unique location.
        #[arg(long, default_value_t = 0)]
        start_from: usize,

        /// Pause after each Nominatim request (public endpoint allows ~1/s).
        #[arg(long, default_value_t = 1100)]
        delay_ms: u64,

        /// Cache file. Defaults to $GEOCODE_CACHE or ~/.sightgeo/geocode_cache.json.
        #[arg(long)]
        cache: Option<PathBuf>,

        /// Only count unique locations and records.
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Serialize)]
struct ResolveOutput<'a> {
    input: &'a str,
    result: Option<ResolvedCoordinate>,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve { text, seed } => {
            let resolver = LocationResolver::new();
            let output = match seed {
                Some(seed) => resolve_all(&resolver, &text, &mut StdRng::seed_from_u64(seed)),
                None => resolve_all(&resolver, &text, &mut rand::thread_rng()),
            };
            print_json(&output)
        }

        Command::Backfill {
            batch_size,
            page_size,
            dry_run,
        } => {
            let config = AppConfig::from_env();
            let store = connect(&config)?;
            let opts = FastOptions {
                page_size,
                batch_size,
                dry_run,
            };
            let report = run_fast_backfill(&store, &LocationResolver::new(), &opts)
                .context("fast backfill failed")?;
            print_json(&report)
        }

        Command::Precise {
            batch_size,
            start_from,
            delay_ms,
            cache,
            dry_run,
        } => {
            let config = AppConfig::from_env();
            let store = connect(&config)?;
            let geocoder =
                NominatimGeocoder::with_endpoint(&config.nominatim_url, &config.nominatim_user_agent);
            let mut cache = match cache.or_else(|| config.geocode_cache.clone()) {
                Some(path) => GeocodeCache::load_from(path),
                None => GeocodeCache::load(),
            };
            info!("Geocode cache: {}", cache.path().display());

            let opts = PreciseOptions {
                page_size: DEFAULT_PAGE_SIZE,
                batch_size,
                start_from,
                delay: Duration::from_millis(delay_ms),
                dry_run,
            };
            let report = run_precise_backfill(&store, &geocoder, &mut cache, &opts)
                .context("precise backfill failed")?;
            print_json(&report)
        }
    }
}

fn resolve_all<'a, R: Rng>(
    resolver: &LocationResolver,
    texts: &'a [String],
    rng: &mut R,
) -> Vec<ResolveOutput<'a>> {
    texts
        .iter()
        .map(|t| ResolveOutput {
            input: t,
            result: resolver.resolve_with(t, rng),
        })
        .collect()
}

fn connect(config: &AppConfig) -> Result<SupabaseStore> {
    let (url, key) = config.supabase_credentials()?;
    info!("Using Supabase table '{}'", config.table);
    Ok(SupabaseStore::new(url, key, &config.table))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("could not serialise output")?;
    println!("{}", json);
    Ok(())
}
