//! Side-relative geometry: ranks, the river and the palace.
//!
//! A position is described relative to a side by its *depth* (distance from
//! that side's back rank, growing in the side's forward direction) and its
//! *lateral* coordinate (the other axis).

use super::Board;
use crate::core::{Position, Side};

impl Board {
    /// Number of ranks along `side`'s forward axis
    #[inline]
    pub fn extent(&self, side: Side) -> i32 {
        if side.is_vertical() { self.rows } else { self.cols }
    }

    /// Number of cells across `side`'s forward axis
    #[inline]
    pub fn width(&self, side: Side) -> i32 {
        if side.is_vertical() { self.cols } else { self.rows }
    }

    /// Distance of `pos` from `side`'s back rank
    pub fn depth(&self, side: Side, pos: Position) -> i32 {
        match side {
            Side::South => pos.row,
            Side::North => self.rows - 1 - pos.row,
            Side::West => pos.col,
            Side::East => self.cols - 1 - pos.col,
        }
    }

    /// Coordinate of `pos` across `side`'s forward axis
    pub fn lateral(&self, side: Side, pos: Position) -> i32 {
        if side.is_vertical() { pos.col } else { pos.row }
    }

    /// Inverse of [`Board::depth`] and [`Board::lateral`]
    pub fn locate(&self, side: Side, depth: i32, lateral: i32) -> Position {
        match side {
            Side::South => Position::new(depth, lateral),
            Side::North => Position::new(self.rows - 1 - depth, lateral),
            Side::West => Position::new(lateral, depth),
            Side::East => Position::new(lateral, self.cols - 1 - depth),
        }
    }

    /// Whether `pos` is on `side`'s back rank
    #[inline]
    pub fn is_back_rank(&self, side: Side, pos: Position) -> bool {
        self.depth(side, pos) == 0
    }

    /// Rank a European pawn of `side` may double-step from
    #[inline]
    pub fn is_pawn_start(&self, side: Side, pos: Position) -> bool {
        self.depth(side, pos) == 1
    }

    /// The opponent's back rank, where pawns promote
    #[inline]
    pub fn is_far_rank(&self, side: Side, pos: Position) -> bool {
        self.depth(side, pos) == self.extent(side) - 1
    }

    /// Whether `pos` is on `side`'s bank of the river
    #[inline]
    pub fn in_own_half(&self, side: Side, pos: Position) -> bool {
        self.depth(side, pos) < self.extent(side) / 2
    }

    /// Whether `pos` lies in `side`'s 3x3 palace
    pub fn in_palace(&self, side: Side, pos: Position) -> bool {
        let centre = self.width(side) / 2;
        self.depth(side, pos) < 3 && (self.lateral(side, pos) - centre).abs() <= 1
    }

    /// Centre cell of `side`'s palace
    pub fn palace_centre(&self, side: Side) -> Position {
        self.locate(side, 1, self.width(side) / 2)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
