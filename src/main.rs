use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use expense_ledger::cli::{
    handle_expense_command, handle_export_command, handle_summary_command, ExpenseCommands,
    ExportArgs, SummaryArgs,
};
use expense_ledger::config::{paths::DATA_DIR_ENV, LedgerPaths, Settings};
use expense_ledger::services::Ledger;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense ledger",
    long_about = "Record dated, categorized expenses, see where the money went over \
                  any date range, and export the results to CSV or Excel."
)]
struct Cli {
    /// Print diagnostic output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show totals by category and by month
    Summary(SummaryArgs),

    /// Export expenses to CSV or XLSX
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Config => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.expenses_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("(override with {})", DATA_DIR_ENV);
            println!();
            println!("Settings:");
            println!("  Currency:    {}", settings.currency_symbol);
            println!("  Date format: {}", settings.date_format);
            println!("  Load policy: {:?}", settings.load_policy);
        }
        Commands::Expense(cmd) => {
            let mut ledger = Ledger::open_default(&paths, &settings)?;
            handle_expense_command(&mut ledger, &paths, &settings, cmd)?;
        }
        Commands::Summary(args) => {
            let ledger = Ledger::open_default(&paths, &settings)?;
            handle_summary_command(&ledger, &settings, args)?;
        }
        Commands::Export(args) => {
            let ledger = Ledger::open_default(&paths, &settings)?;
            handle_export_command(&ledger, args)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("expense_ledger=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("expense_ledger=warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
