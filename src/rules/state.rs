use crate::core::Side;

/******************************************\
|==========================================|
|                Game State                |
|==========================================|
\******************************************/

/// Whose turn it is, plus a count of accepted moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    side_to_move: Side,

    plies: u32,
}

impl GameState {
    pub const fn new(first: Side) -> Self {
        GameState {
            side_to_move: first,
            plies: 0,
        }
    }

    #[inline]
    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Number of moves accepted since the game started
    #[inline]
    pub const fn plies(&self) -> u32 {
        self.plies
    }

    /// Hands the turn to the opponent
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.side_to_move = !self.side_to_move;
        self.plies += 1;
    }
}
