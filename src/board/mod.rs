pub mod layout;
pub mod movement;
pub mod threat;
pub mod zones;

pub use layout::{EUROPEAN_START, XIANGQI_START};

use crate::core::*;

/******************************************\
|==========================================|
|                  Board                   |
|==========================================|
\******************************************/

/// # Board
///
/// Fixed `rows x cols` grid holding at most one [`Piece`] per cell.
///
/// The board is pure storage: it never checks whether a placement is legal.
/// Every accessor taking a [`Position`] panics when the position lies
/// outside the grid, since such a call means a caller already broke the
/// in-bounds invariant. Use [`Board::contains`] to test first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    variant: Variant,

    rows: i32,

    cols: i32,

    cells: Vec<Option<Piece>>,

    next_id: u32,
}

/******************************************\
|==========================================|
|           Basic Implementation           |
|==========================================|
\******************************************/

impl Board {
    /// Creates an empty board sized for `variant`
    pub fn new(variant: Variant) -> Board {
        let rows = variant.rows();
        let cols = variant.cols();

        Board {
            variant,
            rows,
            cols,
            cells: vec![None; (rows * cols) as usize],
            next_id: 1,
        }
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn num_rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn num_columns(&self) -> i32 {
        self.cols
    }

    /// Whether `pos` lies on the grid
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.rows).contains(&pos.row) && (0..self.cols).contains(&pos.col)
    }

    #[inline]
    fn slot(&self, pos: Position) -> usize {
        assert!(self.contains(pos), "position {pos} is off the board");
        (pos.row * self.cols + pos.col) as usize
    }

    /// Piece at `pos`, if any
    #[inline]
    pub fn get_piece(&self, pos: Position) -> Option<&Piece> {
        self.cells[self.slot(pos)].as_ref()
    }

    #[inline]
    pub fn has_piece(&self, pos: Position) -> bool {
        self.get_piece(pos).is_some()
    }

    /// Piece at `pos` when `pos` is on the board and occupied
    #[inline]
    pub fn occupant(&self, pos: Position) -> Option<&Piece> {
        if self.contains(pos) {
            self.get_piece(pos)
        } else {
            None
        }
    }

    /// Places `piece` at `pos`, silently destroying any piece already there.
    ///
    /// The piece's position is set to `pos`. A piece that has never been on
    /// a board receives a fresh id; a piece that already has one keeps it.
    pub fn add_piece(&mut self, mut piece: Piece, pos: Position) -> PieceId {
        if piece.id() == PieceId::UNASSIGNED {
            piece.set_id(PieceId(self.next_id));
            self.next_id += 1;
        }
        piece.set_position(pos);

        let slot = self.slot(pos);
        self.cells[slot] = Some(piece);
        piece.id()
    }

    /// Takes the piece off `pos`, returning it
    pub fn remove_piece(&mut self, pos: Position) -> Option<Piece> {
        let slot = self.slot(pos);
        self.cells[slot].take()
    }

    /// Every piece on the board in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().flatten()
    }

    /// Every piece belonging to `side`
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.side() == side)
    }

    /// Looks a piece up by its id
    pub fn find_piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces().find(|piece| piece.id() == id)
    }

    /// The King or General of `side`
    pub fn royal_of(&self, side: Side) -> Option<&Piece> {
        self.pieces_of(side).find(|piece| piece.kind().is_royal())
    }

    /// Number of pieces strictly between `a` and `b`, which must share a row
    /// or column. `None` when they do not.
    pub fn pieces_between(&self, a: Position, b: Position) -> Option<usize> {
        let step = a.line_step(b)?;
        let mut count = 0;
        let mut pos = a + step;

        while pos != b {
            if self.has_piece(pos) {
                count += 1;
            }
            pos = pos + step;
        }

        Some(count)
    }

    /// Empties the board, keeping its dimensions. Ids handed out later never
    /// repeat ones issued before the clear.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = format!("\n     +{}", "---+".repeat(self.cols as usize));

        writeln!(f, "{}", separator)?;

        for row in (0..self.rows).rev() {
            write!(f, " {:>2}  |", row)?;

            for col in 0..self.cols {
                let cell = match self.get_piece(Position::new(row, col)) {
                    Some(piece) => piece.to_string(),
                    None => " ".to_string(),
                };
                write!(f, " {} |", cell)?;
            }

            writeln!(f, "{}", separator)?;
        }

        writeln!(f)?;
        write!(f, "      ")?;
        for col in 0..self.cols {
            write!(f, " {:<3}", col)?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "Variant: {}", self.variant)?;
        writeln!(f, "Layout: {}", self.layout())
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
