use tracing::debug;

use crate::board::Board;
use crate::core::*;

/// Whether moving `piece` onto `to` promotes it
pub fn promotes(board: &Board, piece: &Piece, to: Position) -> bool {
    piece.kind() == PieceKind::Pawn && board.is_far_rank(piece.side(), to)
}

/// Applies an already validated move.
///
/// Any piece on `to` is captured, the mover is relocated in place (keeping
/// its id) and loses its first-move status. A pawn landing on the far rank
/// is replaced by a new piece of kind `promotion`, a Queen when `None`.
/// `promotion` is ignored for every other move.
pub(crate) fn execute(
    board: &mut Board,
    piece: &Piece,
    to: Position,
    promotion: Option<PieceKind>,
) -> Move {
    let from = piece.position();
    let captured = board.relocate(from, to);

    let kind = if promotes(board, piece, to) {
        let choice = promotion.unwrap_or(PieceKind::Queen);
        board.replace_piece(to, choice);
        MoveKind::Promotion(choice)
    } else {
        MoveKind::Normal
    };

    if let Some(victim) = captured {
        debug!(%from, %to, captured = victim.label(), "capture");
    }

    Move {
        piece: piece.id(),
        from,
        to,
        captured,
        kind,
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_move() {
        let mut board = Board::start(Variant::European);
        let pawn = *board.get_piece(Position::new(6, 4)).unwrap();
        let mv = execute(&mut board, &pawn, Position::new(4, 4), None);

        assert_eq!(mv.kind, MoveKind::Normal);
        assert!(!mv.is_capture());
        let moved = board.get_piece(Position::new(4, 4)).unwrap();
        assert_eq!(moved.id(), pawn.id());
        assert!(moved.has_moved());
    }

    #[test]
    fn test_capture_removes_victim() {
        let mut board = Board::from_layout(Variant::European, "4k3/8/8/3p4/8/8/8/3QK3").unwrap();
        let queen = *board.get_piece(Position::new(7, 3)).unwrap();
        let mv = execute(&mut board, &queen, Position::new(3, 3), Some(PieceKind::Knight));

        assert_eq!(mv.captured.map(|p| p.kind()), Some(PieceKind::Pawn));
        assert_eq!(mv.kind, MoveKind::Normal);
        assert_eq!(board.get_piece(Position::new(3, 3)).unwrap().kind(), PieceKind::Queen);
        assert_eq!(board.pieces_of(Side::South).count(), 1);
    }

    #[test]
    fn test_promotion_replaces_pawn() {
        let mut board = Board::from_layout(Variant::European, "4k3/P7/8/8/8/8/8/4K3").unwrap();
        let pawn = *board.get_piece(Position::new(1, 0)).unwrap();
        assert!(promotes(&board, &pawn, Position::new(0, 0)));

        let mv = execute(&mut board, &pawn, Position::new(0, 0), Some(PieceKind::Knight));
        assert_eq!(mv.promotion(), Some(PieceKind::Knight));

        let knight = board.get_piece(Position::new(0, 0)).unwrap();
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert_eq!(knight.side(), Side::North);
        assert_ne!(knight.id(), pawn.id());
        assert!(board.find_piece(pawn.id()).is_none());
    }

    #[test]
    fn test_south_promotes_on_last_row() {
        let board = Board::from_layout(Variant::European, "4k3/8/8/8/8/8/p7/4K3").unwrap();
        let pawn = board.get_piece(Position::new(6, 0)).unwrap();
        assert!(promotes(&board, pawn, Position::new(7, 0)));
        assert!(!promotes(&board, pawn, Position::new(0, 0)));
    }

    #[test]
    fn test_soldier_never_promotes() {
        let board = Board::from_layout(Variant::Xiangqi, "4x4/4S4/9/9/9/9/9/9/9/3X5").unwrap();
        let soldier = board.get_piece(Position::new(1, 4)).unwrap();
        assert!(!promotes(&board, soldier, Position::new(0, 4)));
    }
}
