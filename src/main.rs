//! Trains a 9-input network to predict whether the centre cell of a 3x3
//! Game of Life neighbourhood is alive in the next generation, then prints
//! its prediction for every one of the 512 patterns.
//!
//! Run with:
//!   cargo run --release -- --hidden 2 --max-epochs 200000
//!
//! Set `RUST_LOG=debug` for construction detail.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use lifenet::{life_dataset, train_until_converged, NetworkSpec, TrainConfig};

#[derive(Parser, Debug)]
#[command(name = "lifenet", about = "Learn the Game of Life rule with a tiny MLP", version)]
struct Cli {
    /// JSON file with training hyperparameters.
    #[arg(short, long)]
    config: Option<String>,

    /// Seed for the initial weights. Random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Hidden layer sizes, input side first.
    #[arg(long, value_delimiter = ',', default_value = "2")]
    hidden: Vec<usize>,

    /// Give up after this many epochs.
    #[arg(short = 'n', long)]
    max_epochs: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => TrainConfig::load_json(path)?,
        None => TrainConfig::default(),
    };
    if cli.max_epochs.is_some() {
        config.max_epochs = cli.max_epochs;
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let spec = NetworkSpec::new(9, 1, cli.hidden);
    let mut network = spec.build(&mut rng);
    let samples = life_dataset();

    tracing::info!(
        hidden = ?spec.hidden_layers,
        learning_rate = config.learning_rate,
        momentum = config.momentum,
        threshold = config.error_threshold,
        "training on {} patterns",
        samples.len()
    );

    let outcome = train_until_converged(&mut network, &samples, &config)?;

    for sample in &samples {
        let output = network.propagate(&sample.input)?;
        tracing::info!(
            "Input: {:?}, Expected: {:?}, Output: {:?}",
            sample.input,
            sample.expected,
            output
        );
    }

    if outcome.converged {
        tracing::info!("Trained in {} iterations!", outcome.epochs);
    } else {
        tracing::warn!(
            "Stopped after {} iterations with max error {:.4}",
            outcome.epochs,
            outcome.max_error
        );
    }
    Ok(())
}
