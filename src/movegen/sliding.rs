use super::MoveList;
use crate::board::Board;
use crate::core::*;

/// Walks every direction in `directions`, see [`ray`]
pub(crate) fn rays(
    board: &Board,
    piece: &Piece,
    directions: &[Step],
    captures: bool,
    list: &mut MoveList,
) {
    for &dir in directions {
        ray(board, piece, dir, captures, list);
    }
}

/// Adds empty cells along `dir` until the first occupied cell.
///
/// That cell is added too when `captures` is set and it holds an opponent.
pub(crate) fn ray(board: &Board, piece: &Piece, dir: Step, captures: bool, list: &mut MoveList) {
    let mut pos = piece.position() + dir;

    while board.contains(pos) {
        match board.get_piece(pos) {
            None => list.add(pos),
            Some(other) => {
                if captures && other.is_enemy_of(piece) {
                    list.add(pos);
                }
                break;
            }
        }
        pos = pos + dir;
    }
}

/// Adds every opponent reachable along `directions` with exactly one piece
/// (of either side) in between.
pub(crate) fn screen_captures(
    board: &Board,
    piece: &Piece,
    directions: &[Step],
    list: &mut MoveList,
) {
    for &dir in directions {
        let mut pos = piece.position() + dir;
        let mut screened = false;

        while board.contains(pos) {
            if let Some(other) = board.get_piece(pos) {
                if screened {
                    if other.is_enemy_of(piece) {
                        list.add(pos);
                    }
                    break;
                }
                screened = true;
            }
            pos = pos + dir;
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use crate::movegen::{candidate_moves, is_legal_capture_move, is_legal_move};
    use crate::{Board, Piece, PieceKind, Position, Side, Variant};

    #[test]
    fn test_rook_ray_stops_at_blockers() {
        // North rook (4, 4), own pawn (4, 6), enemy pawn (1, 4)
        let board = Board::from_layout(Variant::European, "8/4p3/8/8/4R1P1/8/8/8").unwrap();
        let moves = candidate_moves(&board, Position::new(4, 4));

        assert!(moves.contains(Position::new(4, 5)));
        assert!(!moves.contains(Position::new(4, 6)));
        assert!(!moves.contains(Position::new(4, 7)));
        assert!(moves.contains(Position::new(1, 4)));
        assert!(!moves.contains(Position::new(0, 4)));
        // down 3, up 3, left 4, right 1
        assert_eq!(moves.len(), 11);
    }

    #[test]
    fn test_bishop_and_queen_directions() {
        let board = Board::from_layout(Variant::European, "8/8/8/8/3B4/8/8/Q7").unwrap();
        let bishop = candidate_moves(&board, Position::new(4, 3));
        assert!(bishop.contains(Position::new(0, 7)));
        assert!(!bishop.contains(Position::new(7, 0)));
        assert!(!bishop.contains(Position::new(4, 4)));

        let queen = candidate_moves(&board, Position::new(7, 0));
        assert!(queen.contains(Position::new(0, 0)));
        assert!(queen.contains(Position::new(7, 7)));
        assert!(queen.contains(Position::new(5, 2)));
        assert!(!queen.contains(Position::new(4, 3)));
    }

    #[test]
    fn test_cannon_screen_capture() {
        let mut board = Board::new(Variant::Xiangqi);
        board.add_piece(Piece::new(PieceKind::Cannon, Side::North), Position::new(2, 1));
        board.add_piece(Piece::new(PieceKind::Soldier, Side::South), Position::new(2, 4));
        board.add_piece(Piece::new(PieceKind::Chariot, Side::South), Position::new(2, 7));
        let cannon = *board.get_piece(Position::new(2, 1)).unwrap();

        assert!(is_legal_move(&board, &cannon, Position::new(2, 7)));
        assert!(is_legal_capture_move(&board, &cannon, Position::new(2, 7)));
        assert!(!is_legal_move(&board, &cannon, Position::new(2, 4)));
        assert!(is_legal_move(&board, &cannon, Position::new(2, 3)));

        board.add_piece(Piece::new(PieceKind::Soldier, Side::North), Position::new(2, 5));
        assert!(!is_legal_move(&board, &cannon, Position::new(2, 7)));
    }

    #[test]
    fn test_cannon_does_not_capture_own_piece_over_screen() {
        let mut board = Board::new(Variant::Xiangqi);
        board.add_piece(Piece::new(PieceKind::Cannon, Side::North), Position::new(5, 0));
        board.add_piece(Piece::new(PieceKind::Soldier, Side::South), Position::new(5, 3));
        board.add_piece(Piece::new(PieceKind::Horse, Side::North), Position::new(5, 6));

        let moves = candidate_moves(&board, Position::new(5, 0));
        assert!(!moves.contains(Position::new(5, 6)));
        assert!(!moves.contains(Position::new(5, 3)));
        assert!(moves.contains(Position::new(5, 2)));
    }
}
