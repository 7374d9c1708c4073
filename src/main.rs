use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rfab::core::types::SimTime;
use rfab::factory::{FactoryObserver, LogObserver, PartMachine};
use rfab::{CarPartFactory, CatalogConfig, ConcurrencyMode, LibraryCatalog, SimulationConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rfab", about = "Car part factory simulation and library catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the factory and print its production/order report
    Factory(FactoryArgs),
    /// Load the library catalog and print its report
    Library(LibraryArgs),
}

#[derive(Args)]
struct FactoryArgs {
    /// Parts CSV: id,name,weight,weight_error,period,chance_of_defective
    #[arg(long)]
    parts: PathBuf,
    /// Orders CSV: id,customer_name,(part qty)-(part qty)...
    #[arg(long)]
    orders: PathBuf,
    #[arg(long, default_value_t = 20)]
    days: u32,
    #[arg(long, default_value_t = 60)]
    minutes: u32,
    #[arg(long)]
    seed: Option<u64>,
    /// Tick machines in parallel
    #[arg(long)]
    parallel: bool,
    /// Thread pool size for --parallel
    #[arg(long)]
    threads: Option<usize>,
    #[arg(long)]
    belt_length: Option<usize>,
    /// Print every machine's conveyor belt after each minute
    #[arg(long)]
    show_belts: bool,
}

#[derive(Args)]
struct LibraryArgs {
    #[arg(long)]
    catalog: PathBuf,
    #[arg(long)]
    users: PathBuf,
    /// Date used for fees, YYYY-MM-DD
    #[arg(long)]
    today: Option<NaiveDate>,
    /// Also write the report to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

/// Prints belt diagrams to stdout as the simulation runs
struct BeltPrinter;

impl FactoryObserver for BeltPrinter {
    fn on_minute_complete(&mut self, time: SimTime, machines: &[PartMachine]) {
        println!("-- {} --", time);
        for machine in machines {
            println!("{}", machine.conveyor_belt_diagram());
        }
    }

    fn on_day_complete(&mut self, day: u32, stored: usize, defective: usize) {
        println!("== day {} done: {} stored, {} defective ==", day, stored, defective);
    }
}

fn run_factory(args: FactoryArgs) -> Result<()> {
    let mut config = SimulationConfig::new();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(length) = args.belt_length {
        config = config.with_conveyor_belt_length(length);
    }
    if args.parallel {
        config = config.with_concurrency(ConcurrencyMode::Rayon);
        if let Some(threads) = args.threads {
            config = config.with_thread_pool_size(threads);
        }
    }

    let mut factory = CarPartFactory::from_files(&args.orders, &args.parts, config)
        .context("failed to set up the factory")?;
    factory.add_observer(Box::new(LogObserver));
    if args.show_belts {
        factory.add_observer(Box::new(BeltPrinter));
    }

    factory.run_factory(args.days, args.minutes);
    println!("{}", factory.generate_report());
    Ok(())
}

fn run_library(args: LibraryArgs) -> Result<()> {
    let mut config = CatalogConfig::new();
    if let Some(today) = args.today {
        config = config.with_today(today);
    }

    let catalog = LibraryCatalog::from_files(&args.catalog, &args.users, config)
        .context("failed to load the library catalog")?;
    println!("{}", catalog.generate_report());

    if let Some(path) = args.report {
        catalog
            .write_report(&path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Factory(args) => run_factory(args),
        Command::Library(args) => run_library(args),
    }
}
