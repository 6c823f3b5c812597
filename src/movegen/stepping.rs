use super::MoveList;
use crate::board::Board;
use crate::core::*;

/// Whether `piece` may end a move on `to`: on the board and not own-occupied
#[inline]
pub(crate) fn can_land(board: &Board, piece: &Piece, to: Position) -> bool {
    board.contains(to)
        && board
            .get_piece(to)
            .is_none_or(|other| other.is_enemy_of(piece))
}

/// Adds each offset from the piece's position that lands inside `zone`.
///
/// A palace piece found outside its palace may only return to the palace
/// centre.
pub(crate) fn steps(
    board: &Board,
    piece: &Piece,
    offsets: &[Step],
    zone: Zone,
    list: &mut MoveList,
) {
    let side = piece.side();
    let from = piece.position();

    if zone == Zone::Palace && !board.in_palace(side, from) {
        let anchor = board.palace_centre(side);
        if can_land(board, piece, anchor) {
            list.add(anchor);
        }
        return;
    }

    for &offset in offsets {
        let to = from + offset;
        if !can_land(board, piece, to) {
            continue;
        }

        let inside = match zone {
            Zone::Anywhere => true,
            Zone::OwnHalf => board.in_own_half(side, to),
            Zone::Palace => board.in_palace(side, to),
        };

        if inside {
            list.add(to);
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
