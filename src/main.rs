use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_breakdown_command, handle_budgets_command, handle_transactions_command, BreakdownArgs,
    BudgetsArgs, TransactionsArgs,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::logging;
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Category, budget and net-balance breakdowns for personal finance transactions",
    long_about = "fintrack reads income and expense transactions plus per-category budget \
                  targets, and reports category breakdowns, budget comparisons and the net \
                  balance for any date window."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, hide = true, env = "FINTRACK_TODAY")]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the config file and data files
    Init {
        /// Overwrite existing data
        #[arg(long)]
        force: bool,
        /// Start with no transactions or budgets instead of the sample data
        #[arg(long)]
        empty: bool,
    },

    /// Show paths and settings
    Config,

    /// List or export transactions
    #[command(alias = "tx")]
    Transactions(TransactionsArgs),

    /// Income and expense totals per category
    Breakdown(BreakdownArgs),

    /// Compare actual spending and income against budgets
    Budgets(BudgetsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        logging::init_tracing_with("fintrack=debug");
    } else {
        logging::init_tracing();
    }

    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone(), &settings)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init { force, empty }) => {
            if storage.is_initialized() && !force {
                bail!(
                    "fintrack is already initialized at {}. Use --force to overwrite",
                    paths.base_dir().display()
                );
            }

            println!("Initializing fintrack at: {}", paths.base_dir().display());
            settings.save(&paths)?;

            if empty {
                storage.transactions.replace_all(Vec::new())?;
                storage.budgets.replace_all(Vec::new())?;
                storage.save_all()?;
                println!("Created empty transaction and budget files.");
            } else {
                storage.seed_sample_data()?;
                println!(
                    "Loaded sample data: {} transactions, {} budgets.",
                    storage.transactions.count()?,
                    storage.budgets.count()?
                );
            }
            println!();
            println!("Run 'fintrack breakdown' to see this month's categories.");
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Config file:       {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Budgets file:      {}", paths.budgets_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Default period:   {}", settings.default_period);
            println!("  Budget matching:  {}", settings.budget_join);
            println!("  Conflict warnings: {}", settings.warn_on_category_conflicts);
        }
        Some(Commands::Transactions(args)) => {
            handle_transactions_command(&storage, &settings, args)?;
        }
        Some(Commands::Breakdown(args)) => {
            handle_breakdown_command(&storage, &settings, today, args)?;
        }
        Some(Commands::Budgets(args)) => {
            handle_budgets_command(&storage, &settings, today, args)?;
        }
        None => {
            println!("fintrack - personal finance breakdowns");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack init' to create sample data.");
        }
    }

    Ok(())
}
