use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// repeat for more logging: -v info, -vv debug
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub query: Option<Query>,
}

#[derive(Subcommand)]
pub enum Query {
    #[command(
        about = "Standing, equity, and outs for every hand on a board",
        alias = "eval"
    )]
    Evaluate {
        #[arg(required = true)]
        hands: Vec<String>,
        #[arg(short, long, default_value = "")]
        board: String,
        #[arg(short, long, default_value = "")]
        dead: String,
        /// sample this many runouts instead of enumerating all of them
        #[arg(short, long)]
        sample: Option<usize>,
        /// seed for sampled runouts; exhaustive runs have nothing to seed
        #[arg(long, requires = "sample")]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Decode a raw hand score into words", alias = "desc")]
    Describe {
        #[arg(required = true)]
        score: u16,
    },
    #[command(about = "Find the best five cards of a hand", alias = "b5")]
    Best {
        #[arg(required = true)]
        cards: String,
    },
    #[command(about = "List the cards left in the deck", alias = "ls")]
    Deck {
        #[arg(short, long, default_value = "")]
        remove: String,
    },
}
