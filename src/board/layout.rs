use super::Board;
use crate::core::*;

/******************************************\
|==========================================|
|             Starting Layouts             |
|==========================================|
\******************************************/

// Rows are listed from row 0 upwards. Upper case is North, lower case South.

pub const EUROPEAN_START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub const XIANGQI_START: &str = "rhegxgehr/9/1c5c1/s1s1s1s1s/9/9/S1S1S1S1S/1C5C1/9/RHEGXGEHR";

#[rustfmt::skip]
const EUROPEAN_BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen,
    PieceKind::King, PieceKind::Bishop, PieceKind::Knight, PieceKind::Rook,
];

#[rustfmt::skip]
const XIANGQI_BACK_RANK: [PieceKind; 9] = [
    PieceKind::Chariot, PieceKind::Horse, PieceKind::Elephant, PieceKind::Guard,
    PieceKind::General, PieceKind::Guard, PieceKind::Elephant, PieceKind::Horse,
    PieceKind::Chariot,
];

/******************************************\
|==========================================|
|               Start Game                 |
|==========================================|
\******************************************/

impl Board {
    /// Board holding `variant`'s starting army for both sides
    pub fn start(variant: Variant) -> Board {
        let mut board = Board::new(variant);

        for side in variant.sides() {
            match variant {
                Variant::European => board.place_european(side),
                Variant::Xiangqi => board.place_xiangqi(side),
            }
        }

        board
    }

    fn place_european(&mut self, side: Side) {
        for (lateral, kind) in EUROPEAN_BACK_RANK.into_iter().enumerate() {
            let lateral = lateral as i32;
            let back = self.locate(side, 0, lateral);
            self.add_piece(Piece::new(kind, side), back);

            let pawn = self.locate(side, 1, lateral);
            self.add_piece(Piece::new(PieceKind::Pawn, side), pawn);
        }
    }

    fn place_xiangqi(&mut self, side: Side) {
        for (lateral, kind) in XIANGQI_BACK_RANK.into_iter().enumerate() {
            let pos = self.locate(side, 0, lateral as i32);
            self.add_piece(Piece::new(kind, side), pos);
        }

        for lateral in [1, 7] {
            let pos = self.locate(side, 2, lateral);
            self.add_piece(Piece::new(PieceKind::Cannon, side), pos);
        }

        for lateral in (0..self.width(side)).step_by(2) {
            let pos = self.locate(side, 3, lateral);
            self.add_piece(Piece::new(PieceKind::Soldier, side), pos);
        }
    }
}

/******************************************\
|==========================================|
|              Parse Layout                |
|==========================================|
\******************************************/

impl Board {
    /// Replaces the board contents with the pieces described by `layout`.
    ///
    /// On error the board is left empty.
    pub fn set_layout(&mut self, layout: &str) -> Result<(), LayoutParseError> {
        self.clear();

        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != self.rows as usize {
            return Err(LayoutParseError::InvalidRowCount {
                expected: self.rows as usize,
                found: rows.len(),
            });
        }

        let parsed = rows
            .iter()
            .enumerate()
            .try_for_each(|(row, text)| self.parse_row(row, text));

        if parsed.is_err() {
            self.clear();
        }
        parsed
    }

    /// Builds a `variant` board from a layout string
    ///
    /// ## Examples
    ///
    /// ```
    /// use dualchess::{Board, Variant};
    /// use dualchess::board::EUROPEAN_START;
    ///
    /// let board = Board::from_layout(Variant::European, EUROPEAN_START).unwrap();
    /// assert_eq!(board.layout(), Board::start(Variant::European).layout());
    /// ```
    pub fn from_layout(variant: Variant, layout: &str) -> Result<Self, LayoutParseError> {
        let mut board = Board::new(variant);
        board.set_layout(layout)?;
        Ok(board)
    }

    fn parse_row(&mut self, row: usize, text: &str) -> Result<(), LayoutParseError> {
        let mut col = 0;
        let mut run = 0;

        for c in text.chars() {
            if let Some(digit) = c.to_digit(10) {
                if digit == 0 && run == 0 {
                    return Err(LayoutParseError::ZeroRun(row));
                }
                run = run * 10 + digit as i32;
                if col + run > self.cols {
                    return Err(self.width_error(row, col + run));
                }
                continue;
            }

            col += run;
            run = 0;

            let kind = PieceKind::from_code(self.variant, c)?;
            let side = if c.is_ascii_uppercase() { Side::North } else { Side::South };

            if col >= self.cols {
                return Err(self.width_error(row, col + 1));
            }
            if kind.is_royal() && self.royal_of(side).is_some() {
                return Err(LayoutParseError::DuplicateRoyal(side));
            }

            self.add_piece(Piece::new(kind, side), Position::new(row as i32, col));
            col += 1;
        }

        col += run;
        if col != self.cols {
            return Err(self.width_error(row, col));
        }

        Ok(())
    }

    fn width_error(&self, row: usize, found: i32) -> LayoutParseError {
        LayoutParseError::InvalidRowWidth {
            row,
            expected: self.cols,
            found,
        }
    }

    /// Writes the board as a layout string
    pub fn layout(&self) -> String {
        let mut layout = String::new();

        for row in 0..self.rows {
            let mut empty_count = 0;
            for col in 0..self.cols {
                match self.get_piece(Position::new(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            layout.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        layout.push_str(&piece.to_string());
                    }
                    None => {
                        empty_count += 1;
                    }
                }
            }
            if empty_count > 0 {
                layout.push_str(&empty_count.to_string());
            }
            if row != self.rows - 1 {
                layout.push('/');
            }
        }

        layout
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
