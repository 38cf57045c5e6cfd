use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "listings",
    about = "Property listings showcase: a catalog, change notifications and bookings",
    version,
    author,
    long_about = None
)]
pub struct ListingsCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to a YAML scenario file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full showcase (default)
    Demo,

    /// Create a property from the catalog and print its description
    Describe {
        /// Property kind, case-sensitive (Apartment, House, Condo)
        kind: String,
    },

    /// List the property kinds the catalog can build
    List,
}
