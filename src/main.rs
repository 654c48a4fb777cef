use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cotas::cli::{
    handle_allocation_command, handle_cost_command, handle_shareholder_command, AllocationArgs,
};
use cotas::config::{paths::LedgerPaths, settings::Settings};
use cotas::storage::Storage;

/// Environment variable holding a tracing filter that overrides the settings
const LOG_ENV: &str = "COTAS_LOG";

#[derive(Parser)]
#[command(
    name = "cotas",
    version,
    about = "Shareholder ledger and monthly cost allocation",
    long_about = "cotas keeps the roster of shareholders (cotistas) of a shared \
                  venture and its operating costs, and splits each month's \
                  costs across shareholders in proportion to their shares."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Shareholder management commands
    #[command(subcommand, alias = "cotista")]
    Shareholder(cotas::cli::ShareholderCommands),

    /// Cost management commands
    #[command(subcommand, alias = "custo")]
    Cost(cotas::cli::CostCommands),

    /// Show how a month's costs are split across shareholders
    #[command(alias = "rateio")]
    Allocation(AllocationArgs),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&settings);

    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Shareholder(cmd)) => {
            handle_shareholder_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Cost(cmd)) => {
            handle_cost_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Allocation(args)) => {
            handle_allocation_command(&storage, &settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing cotas at: {}", paths.base_dir().display());
            cotas::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Shareholders: {}", paths.shareholders_file().display());
            println!("Costs:        {}", paths.costs_file().display());
            println!();
            println!("Run 'cotas shareholder add --help' to register the first shareholder.");
        }
        Some(Commands::Config) => {
            println!("cotas Configuration");
            println!("===================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Shareholders file: {}", paths.shareholders_file().display());
            println!("Costs file:        {}", paths.costs_file().display());
            println!(
                "Initialized:       {}",
                if storage.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("cotas - Shareholder ledger and monthly cost allocation");
            println!();
            println!("Run 'cotas --help' for usage information.");
        }
    }

    Ok(())
}

/// Log to stderr so reports on stdout stay clean
fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("cotas={}", settings.log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
