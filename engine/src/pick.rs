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

//! Move selection for `go`.
//!
//! No search is performed. A `go` simply samples uniformly from the legal
//! moves of the current position, which is enough to drive a UCI front-end
//! and to exercise the move generator end-to-end.

use fiddler_base::{
    movegen::{get_moves, NoTag, ALL},
    Board, Move,
};

/// Pick a uniformly random legal move in `b`, or `None` if the position is
/// stalemate or checkmate.
pub fn random_move(b: &Board, rng: &mut fastrand::Rng) -> Option<Move> {
    let moves = get_moves::<ALL, NoTag>(b, &());
    if moves.is_empty() {
        return None;
    }
    let idx = rng.usize(..moves.len());
    Some(moves[idx].0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_move_is_legal() {
        let b = Board::default();
        let mut rng = fastrand::Rng::with_seed(42);
        let m = random_move(&b, &mut rng).unwrap();
        assert!(fiddler_base::movegen::is_legal(m, &b));
    }

    #[test]
    fn no_legal_moves_returns_none() {
        // Fool's mate: Black has just delivered checkmate, so White has no
        // legal moves.
        let b = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
        let mut rng = fastrand::Rng::with_seed(7);
        assert!(random_move(&b, &mut rng).is_none());
    }
}
