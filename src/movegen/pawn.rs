use super::MoveList;
use super::stepping::can_land;
use crate::board::Board;
use crate::core::*;

/// European pawn: quiet advances forward, captures diagonally forward
pub(crate) fn pawn_moves(board: &Board, piece: &Piece, list: &mut MoveList) {
    let side = piece.side();
    let from = piece.position();
    let forward = side.forward();

    let one = from + forward;
    if board.contains(one) && !board.has_piece(one) {
        list.add(one);

        let two = one + forward;
        if board.is_pawn_start(side, from) && board.contains(two) && !board.has_piece(two) {
            list.add(two);
        }
    }

    for across in forward.perpendicular() {
        let to = one + across;
        if board
            .occupant(to)
            .is_some_and(|target| target.is_enemy_of(piece))
        {
            list.add(to);
        }
    }
}

/// Soldier: one step forward, plus one step sideways once across the river
pub(crate) fn soldier_moves(board: &Board, piece: &Piece, list: &mut MoveList) {
    let side = piece.side();
    let from = piece.position();
    let forward = side.forward();

    if can_land(board, piece, from + forward) {
        list.add(from + forward);
    }

    if board.in_own_half(side, from) {
        return;
    }

    for across in forward.perpendicular() {
        if can_land(board, piece, from + across) {
            list.add(from + across);
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
