use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fin::cli::{handle_page_command, handle_store_command, handle_view_command};
use fin::cli::{ReportOptions, StoreCommands};
use fin::config::{FinPaths, Settings};
use fin::logging::init_tracing;
use fin::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "fin",
    version,
    about = "Monthly balance reports for per-currency ledgers",
    long_about = "fin reads ledger documents (one currency each: account lists \
                  for holdings, incomes and expenses plus monthly transaction \
                  batches) and prints month-by-month balance tables."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a balance table for each ledger file
    View {
        /// Ledger documents (JSON or YAML)
        #[arg(short, long = "file", required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        options: ReportOptions,
    },

    /// Print the markup page (all views) of a ledger file
    Page {
        /// Ledger document (JSON or YAML)
        #[arg(short, long)]
        file: PathBuf,

        /// Page title, defaults to the ledger's currency
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Stored ledger commands
    #[command(subcommand)]
    Store(StoreCommands),

    /// Write default settings and create the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FinPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::View { files, options }) => {
            handle_view_command(&mut out, &settings, &files, &options)?;
        }
        Some(Commands::Page { file, name }) => {
            handle_page_command(&mut out, &file, name)?;
        }
        Some(Commands::Store(cmd)) => {
            let store = LedgerStore::new(paths)?;
            handle_store_command(&mut out, &store, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            writeln!(out, "Initialized fin at: {}", paths.base_dir().display())?;
        }
        Some(Commands::Config) => {
            writeln!(out, "fin configuration")?;
            writeln!(out, "=================")?;
            writeln!(out, "Base directory: {}", paths.base_dir().display())?;
            writeln!(out, "Data directory: {}", paths.data_dir().display())?;
            writeln!(out, "Settings file:  {}", paths.settings_file().display())?;
            writeln!(out)?;
            writeln!(out, "Settings:")?;
            writeln!(out, "  Default view:   {}", settings.default_view)?;
            writeln!(out, "  Default format: {}", settings.default_encoding)?;
            writeln!(out, "  Log filter:     {}", settings.log_filter)?;
        }
        None => {
            writeln!(out, "fin - monthly balance reports for per-currency ledgers")?;
            writeln!(out)?;
            writeln!(out, "Run 'fin --help' for usage information.")?;
        }
    }

    Ok(())
}
