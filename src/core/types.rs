use serde::{Deserialize, Serialize};

use super::Step;

/******************************************\
|==========================================|
|                  Sides                   |
|==========================================|
\******************************************/

/// # Side Representation
///
/// The compass edge a player's army starts from. Exactly two sides are
/// active in any one game; both built-in variants use North and South.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    North, South, East, West,
}

impl Side {
    /// Number of elements in the Side enum
    pub const NUM: usize = 4;
}

crate::impl_enum_index!(Side, [North, South, East, West]);
crate::impl_enum_iter!(Side);

/******************************************\
|==========================================|
|                 Variants                 |
|==========================================|
\******************************************/

/// # Variant Representation
///
/// The game being played, which fixes the board dimensions, the set of
/// piece kinds and the starting army.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    European,
    Xiangqi,
}

impl Variant {
    /// Number of elements in the Variant enum
    pub const NUM: usize = 2;
}

crate::impl_enum_index!(Variant, [European, Xiangqi]);
crate::impl_enum_iter!(Variant);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Side {
    /// Returns the forward step for a side
    ///
    /// North armies advance towards row 0, South armies towards the last row.
    pub const fn forward(&self) -> Step {
        match self {
            Side::North => Step::new(-1, 0),
            Side::South => Step::new(1, 0),
            Side::East => Step::new(0, -1),
            Side::West => Step::new(0, 1),
        }
    }

    /// Whether the side advances along the rows (as opposed to the columns)
    pub const fn is_vertical(&self) -> bool {
        matches!(self, Side::North | Side::South)
    }

    /// Lower case name, used by logging and the layout format
    pub const fn name(&self) -> &'static str {
        match self {
            Side::North => "north",
            Side::South => "south",
            Side::East => "east",
            Side::West => "west",
        }
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    /// Returns the opposing side
    fn not(self) -> Self::Output {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
            Side::East => Side::West,
            Side::West => Side::East,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Variant {
    /// Number of rows on this variant's board
    pub const fn rows(&self) -> i32 {
        match self {
            Variant::European => 8,
            Variant::Xiangqi => 10,
        }
    }

    /// Number of columns on this variant's board
    pub const fn cols(&self) -> i32 {
        match self {
            Variant::European => 8,
            Variant::Xiangqi => 9,
        }
    }

    /// The two sides that take part in a game of this variant
    pub const fn sides(&self) -> [Side; 2] {
        [Side::North, Side::South]
    }

    /// Whether `side` takes part in a game of this variant
    pub fn is_active(&self, side: Side) -> bool {
        self.sides().contains(&side)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::European => write!(f, "european"),
            Variant::Xiangqi => write!(f, "xiangqi"),
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
