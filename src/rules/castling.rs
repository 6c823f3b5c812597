use tracing::trace;

use crate::board::Board;
use crate::core::*;

/******************************************\
|==========================================|
|              Castle Plan                 |
|==========================================|
\******************************************/

/// Squares involved in one castling move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePlan {
    pub king_from: Position,
    pub king_to: Position,
    /// Square the king crosses, where the rook lands
    pub transit: Position,
    pub rook_from: Position,
}

/******************************************\
|==========================================|
|               Recognition                |
|==========================================|
\******************************************/

/// Whether moving `king` to `to` is a castling request: an unmoved King on
/// its back rank asking to go two cells along it.
pub fn is_castle_request(board: &Board, king: &Piece, to: Position) -> bool {
    let side = king.side();
    let from = king.position();

    king.kind() == PieceKind::King
        && king.first_move()
        && board.contains(to)
        && board.is_back_rank(side, from)
        && board.is_back_rank(side, to)
        && (board.lateral(side, to) - board.lateral(side, from)).abs() == 2
}

/// The two castle targets of an unmoved King, whether or not they are allowed
pub fn castle_targets(board: &Board, king: &Piece) -> Vec<Position> {
    let side = king.side();
    let lateral = board.lateral(side, king.position());

    [lateral - 2, lateral + 2]
        .into_iter()
        .map(|target| board.locate(side, 0, target))
        .filter(|&to| is_castle_request(board, king, to))
        .collect()
}

/******************************************\
|==========================================|
|              Preconditions               |
|==========================================|
\******************************************/

/// Checks every castling precondition without touching `board`.
///
/// Returns the plan when the king and the corner rook are unmoved, the rook
/// stands beyond the king's destination, the cells between them are empty, and neither the king's square nor the two squares
/// it moves over and onto are threatened.
pub fn castle_plan(board: &Board, king: &Piece, to: Position) -> Option<CastlePlan> {
    if !is_castle_request(board, king, to) {
        return None;
    }

    let side = king.side();
    let king_from = king.position();
    let dir = king_from.line_step(to)?;
    let transit = king_from + dir;

    let corner = if board.lateral(side, to) < board.lateral(side, king_from) {
        0
    } else {
        board.width(side) - 1
    };
    let rook_from = board.locate(side, 0, corner);

    let rook_ready = board.get_piece(rook_from).is_some_and(|rook| {
        rook.kind() == PieceKind::Rook && rook.side() == side && rook.first_move()
    });
    if !rook_ready {
        trace!(%rook_from, "castle refused: no unmoved rook in the corner");
        return None;
    }

    // Rook strictly beyond the destination
    if to.line_step(rook_from) != Some(dir) {
        trace!(%to, %rook_from, "castle refused: rook is not beyond the destination");
        return None;
    }

    if board.pieces_between(king_from, rook_from) != Some(0) {
        trace!(%king_from, %rook_from, "castle refused: path is occupied");
        return None;
    }

    if board.square_threatened(king_from, side) {
        trace!(%king_from, "castle refused: king is threatened");
        return None;
    }

    for square in [transit, to] {
        let what_if = board.with_move(king_from, square);
        if what_if.square_threatened(square, side) {
            trace!(%square, "castle refused: king would cross a threatened square");
            return None;
        }
    }

    Some(CastlePlan {
        king_from,
        king_to: to,
        transit,
        rook_from,
    })
}

/******************************************\
|==========================================|
|               Execution                  |
|==========================================|
\******************************************/

/// Moves the king and rook according to `plan`, marking both as moved
pub(crate) fn castle(board: &mut Board, king: &Piece, plan: CastlePlan) -> Move {
    board.relocate(plan.king_from, plan.king_to);
    board.relocate(plan.rook_from, plan.transit);

    Move {
        piece: king.id(),
        from: plan.king_from,
        to: plan.king_to,
        captured: None,
        kind: MoveKind::Castle {
            rook_from: plan.rook_from,
            rook_to: plan.transit,
        },
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
