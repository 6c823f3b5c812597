use serde::{Deserialize, Serialize};

use super::position::{
    ALL_DIRECTIONS, DIAGONAL, ELEPHANT_JUMPS, KNIGHT_JUMPS, ORTHOGONAL,
};
use super::{ParsePieceError, Position, Side, Step, Variant};

/******************************************\
|==========================================|
|                Piece Kind                |
|==========================================|
\******************************************/

/// # Piece Kind representation
///
/// - The closed set of piece kinds across both variants. The first six
///   belong to European chess, the rest to Xiangqi.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    Pawn, Knight, Bishop, Rook, Queen, King,
    General, Guard, Elephant, Horse, Chariot, Cannon, Soldier,
}

impl PieceKind {
    /// Number of elements in the PieceKind enum
    pub const NUM: usize = 13;
}

crate::impl_enum_index!(
    PieceKind,
    [
        Pawn, Knight, Bishop, Rook, Queen, King, General, Guard, Elephant, Horse, Chariot,
        Cannon, Soldier
    ]
);
crate::impl_enum_iter!(PieceKind);

/******************************************\
|==========================================|
|              Movement Shape              |
|==========================================|
\******************************************/

/// How a sliding piece takes an opposing piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureRule {
    /// The first occupied cell of a ray is taken if it holds an opponent
    RayEnd,
    /// Rays never capture; captures need exactly one piece in between
    OverScreen,
}

/// Region a stepping piece must stay inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Anywhere,
    /// The mover's side of the river
    OwnHalf,
    /// The 3x3 palace nearest the mover's back rank
    Palace,
}

/// Intervening cell a stepping piece needs empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    None,
    /// The orthogonal cell next to the horse, in the long direction of the jump
    HorseLeg,
    /// The diagonal midpoint of the elephant's jump
    ElephantEye,
}

/// Which pawn-like rule set a piece follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PawnRule {
    European,
    Soldier,
}

/// # Movement Shape
///
/// The geometric family a piece kind belongs to. Move generation dispatches
/// on this rather than on the kind itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveShape {
    Sliding {
        directions: &'static [Step],
        capture: CaptureRule,
    },
    Stepping {
        offsets: &'static [Step],
        zone: Zone,
        leg: Leg,
    },
    PawnLike(PawnRule),
}

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl PieceKind {
    /// Returns the variant the piece kind belongs to
    pub const fn variant(self) -> Variant {
        match self {
            PieceKind::Pawn
            | PieceKind::Knight
            | PieceKind::Bishop
            | PieceKind::Rook
            | PieceKind::Queen
            | PieceKind::King => Variant::European,
            _ => Variant::Xiangqi,
        }
    }

    /// Returns the movement shape of the piece kind
    pub const fn shape(self) -> MoveShape {
        use PieceKind::*;

        match self {
            Pawn => MoveShape::PawnLike(PawnRule::European),
            Soldier => MoveShape::PawnLike(PawnRule::Soldier),
            Rook | Chariot => MoveShape::Sliding {
                directions: &ORTHOGONAL,
                capture: CaptureRule::RayEnd,
            },
            Bishop => MoveShape::Sliding {
                directions: &DIAGONAL,
                capture: CaptureRule::RayEnd,
            },
            Queen => MoveShape::Sliding {
                directions: &ALL_DIRECTIONS,
                capture: CaptureRule::RayEnd,
            },
            Cannon => MoveShape::Sliding {
                directions: &ORTHOGONAL,
                capture: CaptureRule::OverScreen,
            },
            Knight => MoveShape::Stepping {
                offsets: &KNIGHT_JUMPS,
                zone: Zone::Anywhere,
                leg: Leg::None,
            },
            Horse => MoveShape::Stepping {
                offsets: &KNIGHT_JUMPS,
                zone: Zone::Anywhere,
                leg: Leg::HorseLeg,
            },
            King => MoveShape::Stepping {
                offsets: &ALL_DIRECTIONS,
                zone: Zone::Anywhere,
                leg: Leg::None,
            },
            General => MoveShape::Stepping {
                offsets: &ORTHOGONAL,
                zone: Zone::Palace,
                leg: Leg::None,
            },
            Guard => MoveShape::Stepping {
                offsets: &DIAGONAL,
                zone: Zone::Palace,
                leg: Leg::None,
            },
            Elephant => MoveShape::Stepping {
                offsets: &ELEPHANT_JUMPS,
                zone: Zone::OwnHalf,
                leg: Leg::ElephantEye,
            },
        }
    }

    /// King or General
    pub const fn is_royal(self) -> bool {
        matches!(self, PieceKind::King | PieceKind::General)
    }

    /// Whether a pawn may promote into this kind
    pub const fn is_promotion(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook
        )
    }

    /// Human readable name shown by a presentation layer
    pub const fn label(self) -> &'static str {
        use PieceKind::*;

        match self {
            Pawn => "Pawn",
            Knight => "Knight",
            Bishop => "Bishop",
            Rook | Chariot => "Rook",
            Queen => "Queen",
            King => "King",
            General => "Xiangqi king",
            Guard => "Guard",
            Elephant => "Elephant",
            Horse => "Horse",
            Cannon => "Cannon",
            Soldier => "Soldier",
        }
    }

    /// Upper case letter used by the layout format. Unique within a variant.
    pub const fn code(self) -> char {
        use PieceKind::*;

        match self {
            Pawn => 'P',
            Knight => 'N',
            Bishop => 'B',
            Rook | Chariot => 'R',
            Queen => 'Q',
            King => 'K',
            General => 'X',
            Guard => 'G',
            Elephant => 'E',
            Horse => 'H',
            Cannon => 'C',
            Soldier => 'S',
        }
    }

    /// Parses a layout letter (either case) into a kind of `variant`
    ///
    /// ## Examples
    ///
    /// ```
    /// use dualchess::core::{PieceKind, Variant};
    ///
    /// assert_eq!(PieceKind::from_code(Variant::European, 'r'), Ok(PieceKind::Rook));
    /// assert_eq!(PieceKind::from_code(Variant::Xiangqi, 'R'), Ok(PieceKind::Chariot));
    /// assert!(PieceKind::from_code(Variant::European, 'X').is_err());
    /// ```
    pub fn from_code(variant: Variant, code: char) -> Result<Self, ParsePieceError> {
        let upper = code.to_ascii_uppercase();

        PieceKind::iter()
            .find(|kind| kind.variant() == variant && kind.code() == upper)
            .ok_or(ParsePieceError::InvalidChar { code, variant })
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/******************************************\
|==========================================|
|                 Piece Id                 |
|==========================================|
\******************************************/

/// Identity of a piece on a board. Survives every relocation of that piece.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Id of a piece that has never been placed on a board
    pub const UNASSIGNED: PieceId = PieceId(0);
}

/******************************************\
|==========================================|
|                  Piece                   |
|==========================================|
\******************************************/

/// # Piece
///
/// A piece with its kind, owner, location and first-move flag.
///
/// `first_move` is `true` until the piece is relocated for the first time,
/// then stays `false`. [`Piece::has_moved`] reads the flag the intuitive way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    side: Side,
    position: Position,
    first_move: bool,
}

impl Piece {
    /// Creates an unplaced, unmoved piece
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Piece {
            id: PieceId::UNASSIGNED,
            kind,
            side,
            position: Position::new(0, 0),
            first_move: true,
        }
    }

    #[inline]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub const fn first_move(&self) -> bool {
        self.first_move
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        !self.first_move
    }

    #[inline]
    pub const fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Whether `other` belongs to a different side
    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.side != other.side
    }

    #[inline]
    pub(crate) fn set_id(&mut self, id: PieceId) {
        self.id = id;
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    #[inline]
    pub(crate) fn mark_moved(&mut self) {
        self.first_move = false;
    }
}

impl std::fmt::Display for Piece {
    /// Layout letter: upper case for North, lower case otherwise
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.kind.code();
        match self.side {
            Side::North => write!(f, "{}", code),
            _ => write!(f, "{}", code.to_ascii_lowercase()),
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
