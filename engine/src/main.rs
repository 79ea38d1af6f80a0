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

//! The main UCI procedure.
//!
//! This runs a single-threaded loop: read a line, parse it, act on it. No
//! search is performed; `go` answers with a uniformly random legal move,
//! which is enough to drive a UCI front-end and to let the move generator be
//! exercised through real games.

use std::io::stdin;

use fiddler_base::Board;
use fiddler_engine::{
    pick::random_move,
    uci::{parse_line, EngineInfo, UciCommand, UciMessage},
};

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn main() {
    env_logger::init();

    let mut board = Board::from_fen(STARTPOS).expect("the initial position is always valid FEN");
    let mut rng = fastrand::Rng::new();
    let mut debug = false;

    loop {
        let mut line = String::new();
        if stdin().read_line(&mut line).is_err() {
            log::warn!("failed to read a line from stdin");
            continue;
        }
        if line.is_empty() {
            // EOF
            break;
        }

        let command = match parse_line(&line, &board) {
            Ok(cmd) => cmd,
            Err(e) => {
                log::debug!("failed to parse line {line:?}: {e}");
                debug_info(&format!("failed to parse line: {e}"), debug);
                continue;
            }
        };

        match command {
            UciCommand::Uci => {
                println!(
                    "{}",
                    UciMessage::Id {
                        name: Some(concat!("Fiddler ", env!("CARGO_PKG_VERSION"))),
                        author: Some("The Fiddler Authors"),
                    }
                );
                println!("{}", UciMessage::UciOk);
            }
            UciCommand::Debug(new_debug) => debug = new_debug,
            UciCommand::IsReady => println!("{}", UciMessage::ReadyOk),
            UciCommand::SetOption { name, .. } => {
                log::debug!("ignoring unsupported option `{name}`");
            }
            UciCommand::NewGame => {
                board = Board::from_fen(STARTPOS).unwrap();
            }
            UciCommand::Position { fen, moves } => {
                let start_fen = fen.as_deref().unwrap_or(STARTPOS);
                match Board::from_fen(start_fen) {
                    Ok(mut b) => {
                        for m in moves {
                            b.make_move(m);
                        }
                        board = b;
                    }
                    Err(e) => log::warn!("rejected `position` command: {e}"),
                }
            }
            UciCommand::Go(_opts) => match random_move(&board, &mut rng) {
                Some(m) => println!("{}", UciMessage::BestMove { m, ponder: None }),
                None => log::info!("no legal moves in the current position"),
            },
            UciCommand::Stop => {
                // There is no running search to stop.
            }
            UciCommand::PonderHit => {
                log::debug!("ignoring ponderhit; pondering is not supported");
            }
            UciCommand::Quit => break,
        }
    }
}

fn debug_info(s: &str, debug: bool) {
    if debug {
        println!("{}", UciMessage::Info(&[EngineInfo::String(s)]));
    }
}
