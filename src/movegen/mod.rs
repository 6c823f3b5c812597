//! Candidate move generation and the legality predicates built on it.
//!
//! Candidates are computed fresh on every call from the board and the
//! piece's movement shape. A candidate is necessary but not sufficient for
//! a legal move: pieces with a leg or an eye must also pass [`clear_path`].

pub mod move_list;
pub mod pawn;
pub mod sliding;
pub mod stepping;
pub mod xiangqi;

pub use move_list::MoveList;

use crate::board::Board;
use crate::core::*;

/******************************************\
|==========================================|
|            Candidate Moves               |
|==========================================|
\******************************************/

/// Every cell the piece on `from` could move to, ignoring turn order and
/// clear-path requirements. Empty when `from` is unoccupied.
///
/// # Panics
///
/// Panics if `from` is off the board.
pub fn candidate_moves(board: &Board, from: Position) -> MoveList {
    match board.get_piece(from) {
        Some(piece) => piece_candidates(board, piece),
        None => MoveList::new(),
    }
}

/// Candidate moves of `piece` from its recorded position
pub fn piece_candidates(board: &Board, piece: &Piece) -> MoveList {
    let mut list = MoveList::new();

    if let Some(line) = xiangqi::blocking_line(board, piece) {
        xiangqi::blocker_moves(board, piece, line, &mut list);
        return list;
    }

    match piece.kind().shape() {
        MoveShape::Sliding {
            directions,
            capture,
        } => {
            let ray_captures = capture == CaptureRule::RayEnd;
            sliding::rays(board, piece, directions, ray_captures, &mut list);

            if capture == CaptureRule::OverScreen {
                sliding::screen_captures(board, piece, directions, &mut list);
            }
        }
        MoveShape::Stepping { offsets, zone, .. } => {
            stepping::steps(board, piece, offsets, zone, &mut list);
        }
        MoveShape::PawnLike(PawnRule::European) => pawn::pawn_moves(board, piece, &mut list),
        MoveShape::PawnLike(PawnRule::Soldier) => pawn::soldier_moves(board, piece, &mut list),
    }

    if piece.kind() == PieceKind::General {
        xiangqi::general_moves(board, piece, &mut list);
    }

    list
}

/******************************************\
|==========================================|
|               Clear Path                 |
|==========================================|
\******************************************/

/// Whether the cell a horse or elephant jumps over on its way to `to` is empty.
///
/// Always true for pieces without a leg; rays are already blocked during
/// generation.
pub fn clear_path(board: &Board, piece: &Piece, to: Position) -> bool {
    let from = piece.position();
    let jump = Step::new(to.row - from.row, to.col - from.col);

    let blocker = match piece.kind().shape() {
        MoveShape::Stepping {
            leg: Leg::HorseLeg, ..
        } => from + jump.leg(),
        MoveShape::Stepping {
            leg: Leg::ElephantEye,
            ..
        } => from + jump.midpoint(),
        _ => return true,
    };

    board.contains(blocker) && !board.has_piece(blocker)
}

/******************************************\
|==========================================|
|                Legality                  |
|==========================================|
\******************************************/

/// `to` is on the board, a candidate of `piece`, and its path is clear
pub fn is_legal_move(board: &Board, piece: &Piece, to: Position) -> bool {
    board.contains(to)
        && piece_candidates(board, piece).contains(to)
        && clear_path(board, piece, to)
}

/// Legal move landing on an opposing piece
pub fn is_legal_capture_move(board: &Board, piece: &Piece, to: Position) -> bool {
    is_legal_move(board, piece, to)
        && board
            .get_piece(to)
            .is_some_and(|target| target.is_enemy_of(piece))
}

/// Legal move landing on an empty cell
pub fn is_legal_non_capture_move(board: &Board, piece: &Piece, to: Position) -> bool {
    is_legal_move(board, piece, to) && !board.has_piece(to)
}

/// Candidates of `piece` that also pass [`clear_path`]
pub fn legal_destinations(board: &Board, piece: &Piece) -> MoveList {
    let mut list = piece_candidates(board, piece);
    list.retain(|to| clear_path(board, piece, to));
    list
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
