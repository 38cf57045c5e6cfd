use anyhow::Result;
use clap::Parser;
use log::info;

mod cli;
use cli::{ Commands, ListingsCli };

fn main() {
    // Parse the command line arguments
    let cli = ListingsCli::parse();

    setup_logging(&cli.log_level);

    if let Err(e) = run(cli) {
        cli::ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: ListingsCli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => cli::commands::demo::execute(cli.config.as_deref()),
        Commands::Describe { kind } => cli::commands::describe::execute(&kind),
        Commands::List => cli::commands::list::execute(),
    }
}

fn setup_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
