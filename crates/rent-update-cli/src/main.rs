use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rust_decimal::Decimal;
use std::process;

use rent_update_core::{RentUpdateFactory, UpdateInput};

/// Spanish rental revaluation calculations
#[derive(Parser)]
#[command(
    name = "rentup",
    version,
    about = "Spanish rental revaluation calculations",
    long_about = "Computes the legally-mandated update of a rent amount under the \
                  regulator-defined methods: fixed amount, percentage, consumer price \
                  index (IPC), rent index (IRAV), and the IPC/percentage hybrids. \
                  All arithmetic is exact decimal with regulator-prescribed rounding."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Include absent optional fields as explicit nulls in the output
    #[arg(long, global = true)]
    include_nulls: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Update by a signed fraction of the rent (0.10 = +10%)
    Percentage(UpdateArgs),
    /// Update by a fixed amount (positive or negative)
    FixedAmount(UpdateArgs),
    /// Update by consumer-price-index variation between two periods
    Ipc(UpdateArgs),
    /// Update by IPC variation, then a percentage on the updated amount
    IpcThenPercentage(UpdateArgs),
    /// Update by the rental-housing price index
    Irav(UpdateArgs),
    /// Update by the lower of the IPC variation or a capped percentage
    MinIpcOrPercentage(UpdateArgs),
    /// List the registered update methods
    Methods,
}

#[derive(Args)]
#[command(allow_hyphen_values = true)]
struct UpdateArgs {
    /// Current rent amount
    #[arg(long)]
    amount: Decimal,

    /// Method-specific value: a fixed delta or a signed fraction in [-1, 1]
    #[arg(long)]
    data: Option<Decimal>,

    /// Revaluation month (1-12)
    #[arg(long)]
    month: Option<u32>,

    /// Year of the period the rent was last set
    #[arg(long)]
    year_start: Option<i32>,

    /// Year of the period to update to
    #[arg(long)]
    year_end: Option<i32>,
}

fn run(key: &str, args: &UpdateArgs, include_nulls: bool) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let input = UpdateInput::new(
        args.amount,
        args.data,
        args.month,
        args.year_start,
        args.year_end,
    )?;
    let outcome = RentUpdateFactory::create(key)?.calculate(&input)?;
    Ok(if include_nulls {
        outcome.to_value_with_nulls()
    } else {
        outcome.to_value()
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let include_nulls = cli.include_nulls;

    let result = match &cli.command {
        Commands::Percentage(args) => run("percentage", args, include_nulls),
        Commands::FixedAmount(args) => run("fixed_amount", args, include_nulls),
        Commands::Ipc(args) => run("ipc", args, include_nulls),
        Commands::IpcThenPercentage(args) => run("ipc_then_percentage", args, include_nulls),
        Commands::Irav(args) => run("irav", args, include_nulls),
        Commands::MinIpcOrPercentage(args) => run("min_ipc_or_percentage", args, include_nulls),
        Commands::Methods => Ok(serde_json::json!(RentUpdateFactory::available())),
    };

    match result {
        Ok(value) => {
            match serde_json::to_string_pretty(&value) {
                Ok(rendered) => println!("{rendered}"),
                Err(e) => {
                    eprintln!("{}: {}", "error".red().bold(), e);
                    process::exit(1);
                }
            }
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
