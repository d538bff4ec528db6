use babel::cli::{
    invert_value, parse_page_number, permute_value, search_text, show_info, show_page, Shell,
};
use babel::{BabelError, HashAlgorithm, Library, LibraryConfig};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Version info from build.rs
const VERSION: &str = env!("BABEL_VERSION");
const BUILD: &str = env!("BABEL_BUILD");
const PROFILE: &str = env!("BABEL_PROFILE");
const GIT_HASH: &str = env!("BABEL_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "babel")]
#[command(author, about = "Browse and search a keyed Library of Babel", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Secret key (UTF-8)
    #[arg(long, global = true, conflicts_with = "key_hex")]
    key: Option<String>,

    /// Secret key (hex)
    #[arg(long, global = true)]
    key_hex: Option<String>,

    /// Number of Feistel rounds
    #[arg(long, global = true)]
    rounds: Option<usize>,

    /// Hash for the round function (sha256, sha3, blake3)
    #[arg(long, global = true, value_parser = parse_hash)]
    hash: Option<HashAlgorithm>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the text of a page
    #[command(alias = "f")]
    Page {
        /// Page number, starting at 1
        number: String,
    },

    /// Find the pages holding a text
    #[command(alias = "s")]
    Search {
        /// Text made of alphabet symbols
        text: String,
    },

    /// Apply the forward permutation to a raw value
    Permute {
        /// Decimal value below N^D
        value: String,
    },

    /// Apply the inverse permutation to a raw value
    Invert {
        /// Decimal value below N^D
        value: String,
    },

    /// Show library parameters
    #[command(alias = "i")]
    Info,

    /// Interactive search and browse session
    Shell,
}

fn parse_hash(s: &str) -> Result<HashAlgorithm, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Defaults, then the config file, then command-line overrides
fn load_config(cli: &Cli) -> Result<LibraryConfig, BabelError> {
    let mut config = match &cli.config {
        Some(path) => LibraryConfig::load(path)?,
        None => LibraryConfig::default(),
    };
    if let Some(key) = &cli.key {
        config.key = key.clone();
        config.key_hex = None;
    }
    if let Some(key_hex) = &cli.key_hex {
        config.key_hex = Some(key_hex.clone());
    }
    if let Some(rounds) = cli.rounds {
        config.rounds = rounds;
    }
    if let Some(hash) = cli.hash {
        config.hash = hash;
    }
    config.validate()?;
    Ok(config)
}

fn run(command: Commands, library: &Library) -> Result<(), BabelError> {
    match command {
        Commands::Page { number } => {
            let number = parse_page_number(&number)?;
            print!("{}", show_page(library, &number)?);
        }
        Commands::Search { text } => {
            print!("{}", search_text(library, &text, &mut rand::thread_rng())?);
        }
        Commands::Permute { value } => println!("{}", permute_value(library.network(), &value)?),
        Commands::Invert { value } => println!("{}", invert_value(library.network(), &value)?),
        Commands::Info => print!("{}", show_info(library)?),
        Commands::Shell => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(library, stdin.lock(), stdout.lock(), rand::thread_rng()).run()?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    // Handle --version flag
    if cli.version {
        println!("babel {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command.take() {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = load_config(&cli)
        .and_then(|config| Library::new(&config))
        .and_then(|library| run(command, &library));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
