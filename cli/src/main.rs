/*
  Fiddler, a UCI-compatible chess engine.
  Copyright (C) 2022 The Fiddler Authors (see AUTHORS.md file)

  Fiddler is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Fiddler is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! A small command-line front-end for exercising the move generator directly,
//! without going through UCI.

use clap::{Parser, Subcommand};
use fiddler_base::{movegen::perft, Board};

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Parser)]
#[command(name = "fiddler", about = "Debug tools for the fiddler move generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count the leaf nodes of the legal move tree to a given depth.
    Perft {
        /// Depth to search to.
        depth: u8,
        /// FEN of the position to start from. Defaults to the initial position.
        #[arg(default_value = STARTPOS)]
        fen: String,
    },
    /// Load a FEN, and print it back out after normalizing it.
    Fen {
        /// FEN string to parse and re-emit.
        fen: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Perft { depth, fen } => {
            perft(&fen, depth);
        }
        Command::Fen { fen } => match Board::from_fen(&fen) {
            Ok(b) => println!("{}", b.to_fen()),
            Err(e) => log::error!("could not parse FEN: {e}"),
        },
    }
}
