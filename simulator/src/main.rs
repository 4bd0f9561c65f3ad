use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simulator::{render_text, run_simulation, Report, DEFAULT_TURNS};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// The board as a grid of tile symbols
    Text,
    /// The run report as JSON
    Json,
}

#[derive(Parser)]
struct Args {
    /// How many turns to play after the priming turn
    #[arg(short, long, default_value_t = DEFAULT_TURNS)]
    turns: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// How to print the final board
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print the squares of every tile type (text format only)
    #[arg(long, default_value_t = false)]
    show_layers: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let simulation = run_simulation(&mut rng, args.turns)?;

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&simulation, args.show_layers)),
        OutputFormat::Json => println!("{}", Report::new(seed, &simulation).to_json()?),
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
