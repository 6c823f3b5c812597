//! Error types for the engine.
//!
//! Rule violations during play are reported as [`MoveRejection`] values; the
//! remaining types cover parsing layouts and loading configuration.

use thiserror::Error;

use super::{PieceKind, Position, Side, Variant};

/******************************************\
|==========================================|
|            Piece Parse Error             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceError {
    #[error("Invalid piece character '{code}' for {variant}")]
    InvalidChar { code: char, variant: Variant },
}

/******************************************\
|==========================================|
|            Layout Parse Error            |
|==========================================|
\******************************************/

/// Errors raised while reading a board layout string
/// (rows from row 0 upwards separated by `/`, digits for empty runs).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutParseError {
    #[error("Layout has {found} rows, expected {expected}")]
    InvalidRowCount { expected: usize, found: usize },

    #[error("Row {row} covers {found} columns, expected {expected}")]
    InvalidRowWidth {
        row: usize,
        expected: i32,
        found: i32,
    },

    #[error("Invalid empty run '0' in row {0}")]
    ZeroRun(usize),

    #[error(transparent)]
    InvalidPiece(#[from] ParsePieceError),

    #[error("{0} already has a royal piece")]
    DuplicateRoyal(Side),
}

/******************************************\
|==========================================|
|               Config Error               |
|==========================================|
\******************************************/

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read rules config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Side {side} does not take part in {variant}")]
    InactiveSide { side: Side, variant: Variant },

    #[error("{0} is not a promotion choice")]
    InvalidPromotion(PieceKind),

    #[error("Invalid starting layout: {0}")]
    Layout(#[from] LayoutParseError),
}

/******************************************\
|==========================================|
|              Move Rejection              |
|==========================================|
\******************************************/

/// Why a move request was refused. The board is unchanged in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("It is {0}'s turn")]
    NotYourTurn(Side),

    #[error("Piece is no longer at {0}")]
    StalePiece(Position),

    #[error("Target {0} is off the board")]
    OutOfBounds(Position),

    #[error("{kind} at {from} cannot move to {to}")]
    IllegalDestination {
        kind: PieceKind,
        from: Position,
        to: Position,
    },

    #[error("Castling to {0} is not allowed")]
    CastleBlocked(Position),

    #[error("{0} is not a promotion choice")]
    InvalidPromotion(PieceKind),
}
