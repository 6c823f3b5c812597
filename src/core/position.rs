/******************************************\
|==========================================|
|                 Position                 |
|==========================================|
\******************************************/

/// # Position Representation
///
/// A `(row, col)` coordinate on the grid. Coordinates are signed so that
/// offsets may step off the board during generation; only positions the
/// [`Board`](crate::Board) contains are ever reported as candidates.
///
/// Ordering is row first, then column.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Returns the position reached by applying `step` once
    #[inline]
    pub const fn offset(self, step: Step) -> Self {
        Position::new(self.row + step.dr, self.col + step.dc)
    }

    /// Unit step from `self` towards `other` when both share a row or a column
    ///
    /// ## Examples
    ///
    /// ```
    /// use dualchess::core::{Position, Step};
    ///
    /// assert_eq!(Position::new(0, 4).line_step(Position::new(9, 4)), Some(Step::new(1, 0)));
    /// assert_eq!(Position::new(0, 4).line_step(Position::new(1, 5)), None);
    /// ```
    pub const fn line_step(self, other: Position) -> Option<Step> {
        let dr = other.row - self.row;
        let dc = other.col - self.col;

        match (dr, dc) {
            (0, 0) => None,
            (0, c) => Some(Step::new(0, c.signum())),
            (r, 0) => Some(Step::new(r.signum(), 0)),
            _ => None,
        }
    }
}

impl std::ops::Add<Step> for Position {
    type Output = Self;

    fn add(self, rhs: Step) -> Self::Output {
        self.offset(rhs)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/******************************************\
|==========================================|
|                   Step                   |
|==========================================|
\******************************************/

/// # Step Representation
///
/// A `(dr, dc)` offset. Rays repeat a step, stepping pieces apply it once.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub dr: i32,
    pub dc: i32,
}

impl Step {
    #[inline]
    pub const fn new(dr: i32, dc: i32) -> Self {
        Step { dr, dc }
    }

    /// The two steps at right angles to `self`
    #[inline]
    pub const fn perpendicular(self) -> [Step; 2] {
        [Step::new(self.dc, self.dr), Step::new(-self.dc, -self.dr)]
    }

    /// Halves each component, keeping the dominant axis only (horse leg)
    #[inline]
    pub const fn leg(self) -> Step {
        if self.dr.abs() > self.dc.abs() {
            Step::new(self.dr / 2, 0)
        } else {
            Step::new(0, self.dc / 2)
        }
    }

    /// Halves both components (elephant eye)
    #[inline]
    pub const fn midpoint(self) -> Step {
        Step::new(self.dr / 2, self.dc / 2)
    }
}

impl std::ops::Neg for Step {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Step::new(-self.dr, -self.dc)
    }
}

impl std::ops::Mul<i32> for Step {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Step::new(self.dr * rhs, self.dc * rhs)
    }
}

/******************************************\
|==========================================|
|               Step Tables                |
|==========================================|
\******************************************/

#[rustfmt::skip]
pub const ORTHOGONAL: [Step; 4] = [
    Step::new(1, 0), Step::new(-1, 0), Step::new(0, 1), Step::new(0, -1),
];

#[rustfmt::skip]
pub const DIAGONAL: [Step; 4] = [
    Step::new(1, 1), Step::new(1, -1), Step::new(-1, 1), Step::new(-1, -1),
];

#[rustfmt::skip]
pub const ALL_DIRECTIONS: [Step; 8] = [
    Step::new(1, 0), Step::new(-1, 0), Step::new(0, 1), Step::new(0, -1),
    Step::new(1, 1), Step::new(1, -1), Step::new(-1, 1), Step::new(-1, -1),
];

#[rustfmt::skip]
pub const KNIGHT_JUMPS: [Step; 8] = [
    Step::new(2, 1), Step::new(2, -1), Step::new(-2, 1), Step::new(-2, -1),
    Step::new(1, 2), Step::new(1, -2), Step::new(-1, 2), Step::new(-1, -2),
];

#[rustfmt::skip]
pub const ELEPHANT_JUMPS: [Step; 4] = [
    Step::new(2, 2), Step::new(2, -2), Step::new(-2, 2), Step::new(-2, -2),
];

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
