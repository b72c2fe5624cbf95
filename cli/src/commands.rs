pub mod freq;
pub mod islands;
pub mod list;
pub mod power;
pub mod sort;
pub mod stack;

use clap::{ArgAction, Parser, Subcommand};
use labkit_core::sorting::SortAlgorithm;

use list::ListOp;

#[derive(Parser)]
#[command(name = "labkit")]
#[command(about = "Classic algorithm drills on the command line.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hide headers and the banner
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Raise the log level (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Raise a base to an integer power
    #[command(alias = "p")]
    Power {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        exponent: i64,
    },
    /// Run operations on a doubly linked list (runs a demo when none are given)
    ///
    /// Operations: front:<v>, back:<v>, pop-front, pop-back
    #[command(alias = "l")]
    List {
        #[arg(value_delimiter = ',')]
        ops: Vec<ListOp>,
    },
    /// Count the islands of a grid such as "1100,1100,0010,0001"
    #[command(alias = "i")]
    Islands { grid: String },
    /// Push values onto a stack, then pop some of them
    #[command(alias = "s")]
    Stack {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
        /// How many values to pop afterwards
        #[arg(long, default_value_t = 1)]
        pop: usize,
    },
    /// Count how often each value occurs
    #[command(alias = "f")]
    Freq {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Sort values and report the recorded steps
    #[command(alias = "o")]
    Sort {
        /// bubble, insertion, selection, merge or quick
        #[arg(short, long, default_value = "quick")]
        algorithm: SortAlgorithm,
        /// Number of random values to sort when none are given
        #[arg(short, long, default_value_t = 20)]
        size: usize,
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
