use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;


#[derive(Parser)]
#[command(
    name = "magicsort",
    version,
    about = "Sort integers by searching for a shuffle seed that happens to sort them"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Runs the demo when omitted
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sort the given integers
    Sort(SortArgs),
    /// Sort the built-in demo array
    Demo(DemoArgs),
    /// Inspect the seed cache
    Cache(CacheArgs),
    Version,
}

/// Settings shared by every command. Flags override the config file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// YAML config file
    #[arg(long, global = true, env = "MAGICSORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed cache file [default: cache.txt]
    #[arg(long, global = true, env = "MAGICSORT_CACHE")]
    pub cache: Option<PathBuf>,

    /// Neither read nor write the seed cache
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Apply the first cached seed without checking that it sorts
    #[arg(long, global = true)]
    pub trust_cache: bool,

    /// Give up after this many shuffles (exit 1)
    #[arg(long, global = true)]
    pub max_trials: Option<u64>,

    /// Give up after this long, e.g. "30s" (exit 1)
    #[arg(long, global = true)]
    pub timeout: Option<humantime::Duration>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SortArgs {
    /// Integers to sort
    #[arg(allow_negative_numbers = true, conflicts_with = "input")]
    pub values: Vec<i64>,

    /// Comma separated integers, e.g. "3, 1, 2"
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct DemoArgs {
    /// Comma separated integers replacing the demo array
    #[arg(long)]
    pub values: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub cmd: CacheCmd,
}

#[derive(Subcommand, Debug)]
pub enum CacheCmd {
    /// Print every cached record
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the cached seed for an array (exit 1 when absent)
    Lookup {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
