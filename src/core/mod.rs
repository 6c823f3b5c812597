// Core module exports

pub mod errors;
pub mod macros;
pub mod moves;
pub mod piece;
pub mod position;
pub mod types;

// Re-export common types for easier access
pub use errors::{ConfigError, LayoutParseError, MoveRejection, ParsePieceError};
pub use moves::{Move, MoveKind};
pub use piece::{CaptureRule, Leg, MoveShape, PawnRule, Piece, PieceId, PieceKind, Zone};
pub use position::{Position, Step};
pub use types::{Side, Variant};
