//! Terminal minesweeper.
//!
//! Mines can be fixed from the command line for reproducible games:
//! `mineclicker 1,6 3,1 5,1`. Without locations the board is random.
use std::io;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use mineclicker_core::{CellCount, Coord, GameConfig};

mod command;
mod render;
mod shell;

#[derive(Parser, Debug)]
#[command(name = "mineclicker")]
#[command(about = "Minesweeper style game for the terminal")]
#[command(version)]
struct Cli {
    /// Fixed mine locations like `2,3`, mines are random when omitted
    #[arg(value_name = "ROW,COL")]
    locations: Vec<String>,

    /// Board height
    #[arg(long, default_value_t = 8)]
    rows: Coord,

    /// Board width
    #[arg(long, default_value_t = 8)]
    cols: Coord,

    /// Number of mines on a random board
    #[arg(short, long, default_value_t = 10)]
    mines: CellCount,

    /// Seed for random boards, each new round adds one to it
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let config = GameConfig::new((cli.rows, cli.cols), cli.mines);
    let spec = command::mine_spec(cli.locations.as_slice(), config, &mut io::stdout())?;

    shell::Shell::new(io::stdin().lock(), io::stdout().lock(), config, spec, cli.seed).run()
}
