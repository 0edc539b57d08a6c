use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shop", about = concat!("shoplist v", env!("CARGO_PKG_VERSION"), " - a shopping list in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: $XDG_CONFIG_HOME/shoplist/shoplist.toml)
    #[arg(short = 'c', long = "config", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with an extra item, e.g. --item Milk=2 (repeatable)
    #[arg(long = "item", global = true, value_name = "NAME=QTY")]
    pub items: Vec<String>,

    /// Append logs to this file (filter with SHOPLIST_LOG)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the starting list
    List,
    /// Apply a JSON script of actions to the starting list and print the result
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file, or - for stdin
    pub script: PathBuf,
    /// Print the list after every applied action
    #[arg(long)]
    pub steps: bool,
    /// Report failing actions and continue instead of stopping
    #[arg(long)]
    pub keep_going: bool,
}
