//! Facing generals.
//!
//! The two Generals may never stand on one file with nothing between them.
//! A piece that is the only thing between them is frozen onto that file, and
//! a General may not step onto a cell that would leave it facing the other.
//! When they already face each other, either General may fly down the file
//! and take the other.

use super::MoveList;
use super::sliding::ray;
use super::stepping::can_land;
use crate::board::Board;
use crate::core::*;

/// Direction along the file between the Generals when `piece` is the only
/// piece standing between them. The step points towards the opposing General.
pub fn blocking_line(board: &Board, piece: &Piece) -> Option<Step> {
    if piece.kind().is_royal() {
        return None;
    }

    let own = general_of(board, piece.side())?.position();
    let enemy = general_of(board, !piece.side())?.position();
    let step = own.line_step(enemy)?;

    if board.pieces_between(own, enemy) != Some(1) {
        return None;
    }

    let pos = piece.position();
    let between = pos.line_step(own) == Some(-step) && pos.line_step(enemy) == Some(step);

    between.then_some(step)
}

/// Moves left to a piece frozen between the Generals
pub(crate) fn blocker_moves(board: &Board, piece: &Piece, line: Step, list: &mut MoveList) {
    match piece.kind() {
        PieceKind::Soldier => {
            let to = piece.position() + piece.side().forward();
            if can_land(board, piece, to) {
                list.add(to);
            }
        }
        PieceKind::Cannon => {
            ray(board, piece, line, false, list);
            ray(board, piece, -line, false, list);
        }
        PieceKind::Chariot => {
            ray(board, piece, line, true, list);
            ray(board, piece, -line, true, list);
        }
        _ => {}
    }
}

/// Drops palace steps that would face the opposing General and adds the
/// flying capture when the file between them is empty.
pub(crate) fn general_moves(board: &Board, piece: &Piece, list: &mut MoveList) {
    let Some(enemy) = general_of(board, !piece.side()) else {
        return;
    };

    let from = piece.position();
    let target = enemy.position();

    list.retain(|to| to == target || !would_face(board, from, to, target));

    if board.pieces_between(from, target) == Some(0) {
        list.add(target);
    }
}

/// Whether a General moved from `from` to `to` would see `target` down an
/// empty line
fn would_face(board: &Board, from: Position, to: Position, target: Position) -> bool {
    let Some(step) = to.line_step(target) else {
        return false;
    };

    let mut pos = to + step;
    while pos != target {
        if pos != from && board.has_piece(pos) {
            return false;
        }
        pos = pos + step;
    }

    true
}

fn general_of(board: &Board, side: Side) -> Option<&Piece> {
    board
        .royal_of(side)
        .filter(|piece| piece.kind() == PieceKind::General)
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
