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

//! Zobrist hashing keys, used to incrementally maintain a hash of a position
//! as moves are made.

use once_cell::sync::Lazy;

use super::{Color, Piece, Square};

/// A random key for each (square, piece, color) triple that can occur on a
/// board.
static SQUARE_KEYS: Lazy<[[[u64; 2]; Piece::NUM_TYPES]; 64]> = Lazy::new(|| {
    let mut rng = fastrand::Rng::with_seed(0xF1DD_1E12_u64);
    let mut keys = [[[0u64; 2]; Piece::NUM_TYPES]; 64];
    for sq_keys in &mut keys {
        for pt_keys in sq_keys {
            for key in pt_keys {
                *key = rng.u64(..);
            }
        }
    }
    keys
});

/// A random key for each of the 8 possible en passant files, plus one more
/// for "no en passant square".
static EP_KEYS: Lazy<[u64; 9]> = Lazy::new(|| {
    let mut rng = fastrand::Rng::with_seed(0x5A1_E5_u64);
    let mut keys = [0u64; 9];
    for key in &mut keys {
        *key = rng.u64(..);
    }
    keys
});

/// A random key for each of the 4 bits of castling rights.
static CASTLE_KEYS: Lazy<[u64; 4]> = Lazy::new(|| {
    let mut rng = fastrand::Rng::with_seed(0xCAE5_7E_u64);
    let mut keys = [0u64; 4];
    for key in &mut keys {
        *key = rng.u64(..);
    }
    keys
});

/// The key to XOR in when Black is the player to move. White-to-move
/// contributes no key, so that the starting position's hash does not depend
/// on an arbitrary choice.
pub static BLACK_TO_MOVE_KEY: Lazy<u64> =
    Lazy::new(|| fastrand::Rng::with_seed(0xB1AC_0000_u64).u64(..));

#[must_use]
/// Get the key associated with a piece of the given type and color occupying
/// a square. If `pt` is `None`, returns 0, since an empty square does not
/// contribute to the hash.
pub fn square_key(sq: Square, pt: Option<Piece>, color: Color) -> u64 {
    match pt {
        Some(p) => SQUARE_KEYS[sq as usize][p as usize][color as usize],
        None => 0,
    }
}

#[must_use]
/// Get the key associated with the given en passant square. If `sq` is
/// `None`, returns the key for "no en passant is possible".
pub fn ep_key(sq: Option<Square>) -> u64 {
    match sq {
        Some(s) => EP_KEYS[s.file()],
        None => EP_KEYS[8],
    }
}

#[must_use]
/// Get the key associated with the player to move. White contributes no key;
/// Black contributes `BLACK_TO_MOVE_KEY`.
pub fn player_key(color: Color) -> u64 {
    match color {
        Color::White => 0,
        Color::Black => *BLACK_TO_MOVE_KEY,
    }
}

#[must_use]
/// Get the key associated with the castle right at bit index `i` (as stored
/// in `CastleRights`).
pub fn get_castle_key(i: i32) -> u64 {
    CASTLE_KEYS[i as usize]
}
