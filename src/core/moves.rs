use super::{Piece, PieceId, PieceKind, Position};

/******************************************\
|==========================================|
|                Move Kind                 |
|==========================================|
\******************************************/

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveKind {
    Normal,

    /// King moved two cells, rook moved over it
    Castle { rook_from: Position, rook_to: Position },

    /// Pawn replaced by a new piece of this kind
    Promotion(PieceKind),
}

/******************************************\
|==========================================|
|                   Move                   |
|==========================================|
\******************************************/

/// Record of an executed move
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Move {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }

    #[inline]
    pub const fn promotion(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(kind) => Some(kind),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)?;

        if let Some(kind) = self.promotion() {
            write!(f, "={}", kind.code())?;
        }

        Ok(())
    }
}
