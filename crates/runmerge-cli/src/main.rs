use clap::{Parser, Subcommand};
use runmerge_core::{
    builtin_scenarios, daily_runs, run_scenarios, AggregationSettings, DailySalesAggregator,
    RunMergeError, Sale,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "runmerge")]
#[command(about = "Aggregate consecutive same-day sales", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RUNMERGE_GIT_HASH"), ")"))]
struct Cli {
    /// Log debug records (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in aggregation scenarios
    Check {
        #[arg(long)]
        json: bool,
    },
    /// Aggregate a JSON array of sales
    Aggregate {
        /// Input file, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// JSON file with aggregation settings
        #[arg(short, long)]
        settings: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },
    /// Show each run of same-day sales before merging
    Runs {
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn run(command: Commands) -> runmerge_core::Result<ExitCode> {
    match command {
        Commands::Check { json } => {
            let report = run_scenarios(&builtin_scenarios());
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
            Ok(if report.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Aggregate {
            input,
            settings,
            pretty,
        } => {
            let settings = match settings {
                Some(path) => AggregationSettings::from_file(path)?,
                None => AggregationSettings::default(),
            };
            let sales = read_sales(&input)?;
            let daily = DailySalesAggregator::new(&settings).aggregate(&sales)?;

            let output = if pretty {
                serde_json::to_string_pretty(&daily)?
            } else {
                serde_json::to_string(&daily)?
            };
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Runs { input } => {
            let sales = read_sales(&input)?;
            for run in daily_runs(&sales) {
                println!("day {}: {} sales, total {}", run.day, run.count, run.total);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_sales(input: &Path) -> runmerge_core::Result<Vec<Sale>> {
    let text = if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        std::fs::read_to_string(input)?
    };

    serde_json::from_str(&text).map_err(|e| RunMergeError::InvalidInput {
        message: format!("{}: {}", input.display(), e),
    })
}
