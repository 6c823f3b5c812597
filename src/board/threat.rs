use super::Board;
use crate::core::*;
use crate::movegen;

/******************************************\
|==========================================|
|              Threat Queries              |
|==========================================|
\******************************************/

impl Board {
    /// Whether any piece not belonging to `side` could legally move onto `pos`.
    ///
    /// Turn order is ignored. An empty `pos` is threatened by the pieces that
    /// could step onto it; to ask whether a piece of `side` standing on `pos`
    /// would be attacked, query a what-if board with the piece placed there
    /// (see [`Board::with_move`]).
    pub fn square_threatened(&self, pos: Position, side: Side) -> bool {
        self.pieces()
            .filter(|piece| piece.side() != side)
            .any(|piece| movegen::is_legal_move(self, piece, pos))
    }

    /// Pieces not belonging to `side` that could legally move onto `pos`
    pub fn threats_to(&self, pos: Position, side: Side) -> Vec<Position> {
        self.pieces()
            .filter(|piece| piece.side() != side)
            .filter(|piece| movegen::is_legal_move(self, piece, pos))
            .map(Piece::position)
            .collect()
    }

    /// Whether `side`'s King or General is threatened
    pub fn in_check(&self, side: Side) -> bool {
        self.royal_of(side)
            .is_some_and(|royal| self.square_threatened(royal.position(), side))
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
