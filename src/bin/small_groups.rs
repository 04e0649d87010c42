use clap::{Args, Parser, Subcommand};
use small_groups::{
    classify, find_isomorphism,
    search::{SearchConfig, StopCondition, TableSearcher, Traversal, Verbosity},
    CompletedTable, GroupError,
};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Enumerate and compare Cayley tables of small finite groups.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        help = "A TOML file with search settings, overridden by command line \
        options",
        long = "config",
        id = "CONFIG",
        global = true
    )]
    config: Option<PathBuf>,
    #[arg(
        help = "Stop searching after this long, e.g. 30s or 2m",
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration,
        global = true
    )]
    time_limit: Option<Duration>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal,
        global = true
    )]
    verbosity: Verbosity,
    #[arg(
        help = "Whether to use coloured output",
        short = 'c',
        long = "colour",
        global = true
    )]
    colour: bool,
}

#[derive(Args)]
struct SearchArgs {
    #[arg(help = "The number of elements of the group")]
    order: usize,
    #[arg(
        value_enum,
        help = "Which empty cells to branch on",
        short = 't',
        long = "traversal",
        id = "TRAVERSAL"
    )]
    traversal: Option<Traversal>,
    #[arg(
        help = "Only keep associative tables, i.e. group tables",
        short = 'a',
        long = "associative"
    )]
    associative: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every completed table of the given order whose first row and
    /// column list the elements in order.
    Enumerate(SearchArgs),
    /// Print the first completed table of the given order.
    First(SearchArgs),
    /// Enumerate tables and group them into isomorphism classes.
    Classify(SearchArgs),
    /// Decide whether the tables in two files are isomorphic.
    Compare {
        #[arg(help = "File holding the first table")]
        first: PathBuf,
        #[arg(help = "File holding the second table")]
        second: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.verbosity.env_filter())
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), GroupError> {
    let mut config = match &cli.config {
        Some(path) => {
            info!(config = ?path, "loading search config");
            SearchConfig::from_path(path)?
        }
        None => SearchConfig::default(),
    };
    if let Some(time_limit) = cli.time_limit {
        config = config.with_time_limit(time_limit);
    }

    match cli.command {
        Commands::Enumerate(args) => {
            let outcome = searcher(config, &args).search(args.order)?;
            for table in outcome.tables() {
                println!("{}", table);
            }
            println!("Tables found: {}", outcome.tables().len());
            if !outcome.status().is_exhausted() {
                println!("Search incomplete: {:?}", outcome.status());
            }
        }
        Commands::First(args) => {
            let config = config.with_stop(StopCondition::First);
            let outcome = searcher(config, &args).search(args.order)?;
            match outcome.tables().first() {
                Some(table) => println!("{}", table),
                None => println!("No table found: {:?}", outcome.status()),
            }
        }
        Commands::Classify(args) => {
            let outcome = searcher(config, &args).search(args.order)?;
            let classes = classify(outcome.into_tables())?;
            info!(num_classes = classes.len());
            for (i, class) in classes.iter().enumerate() {
                let representative = class.representative();
                println!(
                    "Class {}: {} table(s), {}",
                    i + 1,
                    class.len(),
                    if representative.is_group() {
                        "group"
                    } else {
                        "not a group"
                    }
                );
                println!("{}", representative);
            }
            println!("Isomorphism classes: {}", classes.len());
        }
        Commands::Compare { first, second } => {
            let g = CompletedTable::from_path(&first)?;
            let h = CompletedTable::from_path(&second)?;
            match find_isomorphism(&g, &h)? {
                Some(permutation) => {
                    println!("Isomorphic");
                    println!("Relabelling: {}", permutation);
                }
                None => println!("Not isomorphic"),
            }
        }
    }

    Ok(())
}

fn searcher(config: SearchConfig, args: &SearchArgs) -> TableSearcher {
    let mut config = config;
    if let Some(traversal) = args.traversal {
        config = config.with_traversal(traversal);
    }
    if args.associative {
        config = config.with_associativity_check(true);
    }
    TableSearcher::new(config)
}
