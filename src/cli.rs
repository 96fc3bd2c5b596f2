use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use machine_separators::instance::{random_tree, Instance, Sample};
use machine_separators::Weight;

/// Cut a weighted tree so that no two machines stay connected
#[derive(Parser, Debug)]
#[command(name = "machine-separators", version, about)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log the result, do not open a window
    #[arg(long)]
    pub headless: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one of the built-in sample trees
    Sample {
        #[arg(value_enum)]
        sample: Sample,
    },

    /// Generate a random tree
    Random(RandomArgs),
}

#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Number of nodes in the tree
    #[arg(long, default_value_t = 20)]
    pub nodes: usize,

    /// Number of machines, capped at the number of nodes
    #[arg(long, default_value_t = 4)]
    pub machines: usize,

    /// Edge weights are drawn from 1..=max-weight
    #[arg(long, default_value_t = 10)]
    pub max_weight: Weight,

    #[arg(long, default_value_t = 23)]
    pub seed: u64,
}

impl Commands {
    pub fn instance(&self) -> Instance {
        match self {
            Commands::Sample { sample } => sample.instance(),
            Commands::Random(args) => {
                let mut rng = StdRng::seed_from_u64(args.seed);
                random_tree(args.nodes, args.machines, args.max_weight, &mut rng)
            }
        }
    }
}
