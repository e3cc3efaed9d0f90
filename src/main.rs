use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use stylematch::{load_profiles, MatchConfig, MatchOutcome, Snapshot};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Find outfit-battle opponents for a user
#[derive(Parser, Debug)]
#[command(name = "stylematch")]
#[command(about = "Rank outfit-battle opponents by style and demographic similarity", long_about = None)]
struct Args {
    /// JSON array of profile records
    #[arg(short, long)]
    profiles: PathBuf,

    /// JSON matching config (style catalog and weights)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// User to find opponents for
    #[arg(short, long)]
    user: String,

    /// Number of opponents
    #[arg(short = 'k', long = "count", default_value_t = 1)]
    count: usize,

    /// Print the distance next to each opponent
    #[arg(long)]
    show_distance: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            MatchConfig::from_json(&raw)?
        }
        None => MatchConfig::default(),
    };
    info!(
        catalog_version = config.catalog.version(),
        styles = config.catalog.len(),
        "loaded matching config"
    );

    let raw = std::fs::read_to_string(&args.profiles)
        .with_context(|| format!("reading profiles {}", args.profiles.display()))?;
    let profiles = load_profiles(&raw).context("parsing profiles")?;
    info!("Loaded {} profiles", profiles.len());

    let encoder = config.into_encoder()?;
    let snapshot = Snapshot::build(profiles, &encoder)?;

    match snapshot.find_opponents(&args.user, args.count) {
        MatchOutcome::Opponents(opponents) => {
            if opponents.is_empty() {
                info!("No other users in snapshot");
            }
            for opponent in opponents {
                if args.show_distance {
                    println!("{}\t{:.6}", opponent.user_id, opponent.distance);
                } else {
                    println!("{}", opponent.user_id);
                }
            }
        }
        MatchOutcome::UnknownUser => warn!("User {} not found in snapshot", args.user),
        MatchOutcome::EmptySnapshot => warn!("Snapshot is empty"),
        MatchOutcome::NothingRequested => info!("Zero opponents requested"),
    }

    Ok(())
}
