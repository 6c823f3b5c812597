use super::Board;
use crate::core::*;

impl Board {
    /// Moves the piece on `from` to `to`, returning whatever stood on `to`.
    ///
    /// The piece keeps its id, takes `to` as its position and loses its
    /// first-move status. No legality is checked: this is the low-level
    /// helper the move executor and the what-if boards build on.
    ///
    /// # Panics
    ///
    /// Panics if either position is off the board, or in debug builds if
    /// `from` is empty.
    pub(crate) fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        debug_assert!(self.has_piece(from), "relocate: 'from' square is empty");
        debug_assert_ne!(from, to, "relocate: 'from' and 'to' are the same square");

        let captured = self.remove_piece(to);

        if let Some(mut piece) = self.remove_piece(from) {
            piece.mark_moved();
            self.add_piece(piece, to);
        }

        captured
    }

    /// Replaces the piece on `pos` with a fresh piece of `kind` and the same side.
    ///
    /// The replacement gets a new id and is marked as moved.
    pub(crate) fn replace_piece(&mut self, pos: Position, kind: PieceKind) -> Option<PieceId> {
        let old = self.remove_piece(pos)?;

        let mut piece = Piece::new(kind, old.side());
        piece.mark_moved();
        Some(self.add_piece(piece, pos))
    }

    /// Copy of the board with the piece on `from` moved to `to`.
    ///
    /// Used to ask "what if" questions without touching the live board.
    pub fn with_move(&self, from: Position, to: Position) -> Board {
        let mut board = self.clone();
        board.relocate(from, to);
        board
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
