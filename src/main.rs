use anyhow::Result;
use clap::{Parser, Subcommand};

use expensio::audit::Subject;
use expensio::cli::{
    handle_category_command, handle_expense_command, handle_limits_command,
    handle_report_command, handle_transaction_command,
};
use expensio::config::{paths::ExpensioPaths, settings::Settings};
use expensio::logging::init_logging;
use expensio::models::DEFAULT_CATEGORY_NAMES;
use expensio::storage::{init, Storage};

#[derive(Parser)]
#[command(
    name = "expensio",
    version,
    about = "Track expenses against daily, weekly and monthly budget limits",
    long_about = "Expensio records your expenses, warns you before an expense breaks \
                  one of your budget limits, and lists or exports your transactions."
)]
struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record, edit or show expenses
    #[command(subcommand)]
    Expense(expensio::cli::ExpenseCommands),

    /// List transactions
    #[command(subcommand, alias = "txn")]
    Transactions(expensio::cli::TransactionCommands),

    /// Show or export the transaction report
    #[command(subcommand)]
    Report(expensio::cli::ReportCommands),

    /// Manage budget limits
    #[command(subcommand)]
    Limits(expensio::cli::LimitCommands),

    /// Manage categories
    #[command(subcommand)]
    Category(expensio::cli::CategoryCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,

        /// Only entries about expenses, categories or limits
        #[arg(long, value_enum)]
        subject: Option<Subject>,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = ExpensioPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let first_run = init::needs_initialization(&paths);
    if first_run {
        init::initialize_storage(&paths)?;
    }

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let today = chrono::Local::now().date_naive();

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, today, cmd)?,
        Some(Commands::Transactions(cmd)) => {
            handle_transaction_command(&storage, &settings, today, cmd)?
        }
        Some(Commands::Report(cmd)) => handle_report_command(&storage, today, cmd)?,
        Some(Commands::Limits(cmd)) => handle_limits_command(&storage, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&storage, cmd)?,
        Some(Commands::Audit { limit, subject }) => {
            let entries = storage.audit().recent(limit, subject)?;
            if entries.is_empty() {
                println!("No audit entries found.");
            }
            for entry in entries {
                println!("{}", entry.render());
            }
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            if first_run {
                println!("Initialized Expensio at: {}", paths.base_dir().display());
                println!();
                println!("Default categories have been created:");
                println!("  {}", DEFAULT_CATEGORY_NAMES.join(", "));
            } else {
                println!("Expensio is already initialized at: {}", paths.base_dir().display());
            }
            println!();
            println!("Run 'expensio category list' to see all categories.");
        }
        Some(Commands::Config) => {
            println!("Expensio Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Config file:     {}", paths.config_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Week window:   {:?}", settings.week_window);
            println!("  Visible rows:  {}", settings.visible_rows);
            println!("  See more step: {}", settings.see_more_step);
        }
        None => {
            println!("Expensio - expense tracking with budget limits");
            println!();
            println!("Run 'expensio --help' for usage information.");
        }
    }

    Ok(())
}
