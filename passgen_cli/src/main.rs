use passgen_core::{IgnoreCharacter, PasswordConfig, PasswordGenerator};

use clap::Parser;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_FILE: &str = "passgen.toml";
const LOG_ENV_VAR: &str = "PASSGEN_LOG";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with password settings
    #[clap(short, long, value_parser)]
    config_file: Option<PathBuf>,
    #[clap(short, long)]
    length: Option<usize>,
    /// Custom character pool, replaces the built-in classes
    #[clap(long)]
    characters: Option<String>,
    #[clap(long)]
    no_numbers: bool,
    #[clap(long)]
    no_lowercase: bool,
    #[clap(long)]
    no_uppercase: bool,
    #[clap(long)]
    no_symbols: bool,
    /// Characters that must not appear in the output
    #[clap(short, long)]
    ignore: Option<String>,
    /// Number of passwords to print
    #[clap(short = 'n', long, default_value_t = 1)]
    count: usize,
    /// Seed for reproducible output
    #[clap(long)]
    seed: Option<u64>,
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let directive = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<PathBuf>) -> Result<PasswordConfig, anyhow::Error> {
    match path {
        Some(config_path) => {
            info!("Loading configuration from specified path: {config_path:?}");
            PasswordConfig::load_from_file(&config_path)
        }
        None => {
            let default_config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_config_path.exists() {
                info!("No config file specified, loading default: {default_config_path:?}");
                PasswordConfig::load_from_file(&default_config_path)
            } else {
                debug!("No config file found, using built-in defaults");
                Ok(PasswordConfig::default())
            }
        }
    }
}

fn apply_overrides(config: &mut PasswordConfig, cli: &Cli) {
    if let Some(length) = cli.length {
        config.length = length;
    }
    if let Some(characters) = &cli.characters {
        config.custom_characters = characters.clone();
    }
    if cli.no_numbers {
        config.use_numbers = false;
    }
    if cli.no_lowercase {
        config.use_lowercase = false;
    }
    if cli.no_uppercase {
        config.use_uppercase = false;
    }
    if cli.no_symbols {
        config.use_symbols = false;
    }
    if let Some(ignore) = &cli.ignore {
        config
            .ignore_characters
            .extend(ignore.chars().map(IgnoreCharacter::from));
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = load_config(cli.config_file.clone())?;
    apply_overrides(&mut config, &cli);
    debug!("Effective configuration: {config:?}");

    let generator = PasswordGenerator::new(config)?;

    let passwords = match cli.seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            generator.generate_batch_with(&mut rng, cli.count)
        }
        None => generator.generate_batch(cli.count),
    };

    for password in passwords {
        println!("{password}");
    }

    Ok(())
}
