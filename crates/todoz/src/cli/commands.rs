use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todoz", bin_name = "todoz", version)]
#[command(about = "A tiny persistent to-do list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Keep the list in an explicit file instead of the platform data dir
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item at the end of the list
    #[command(alias = "a")]
    Add {
        /// Item text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List items in order
    #[command(alias = "ls")]
    List,

    /// Toggle an item between done and not done
    #[command(alias = "d")]
    Done {
        /// Id of the item
        id: u64,
    },

    /// Remove an item
    #[command(alias = "rm")]
    Remove {
        /// Id of the item
        id: u64,
    },

    /// Move an item one position up
    Up {
        /// Id of the item
        id: u64,
    },

    /// Move an item one position down
    Down {
        /// Id of the item
        id: u64,
    },

    /// Cycle an item's priority (none -> high -> medium -> none)
    #[command(alias = "p")]
    Pri {
        /// Id of the item
        id: u64,
    },
}
