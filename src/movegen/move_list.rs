use std::slice;

use crate::core::Position;

/// Upper bound on distinct destinations of one piece on the supported boards
const MAX_DESTINATIONS: usize = 64;

/// Set of destination cells for one piece, in generation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveList {
    targets: [Position; MAX_DESTINATIONS],
    num_targets: usize,
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Position;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.num_targets, "MoveList index out of bounds");

        &self.targets[index]
    }
}

impl MoveList {
    #[inline]
    pub fn new() -> MoveList {
        MoveList {
            targets: [Position::default(); MAX_DESTINATIONS],
            num_targets: 0,
        }
    }

    /// Adds `target` unless it is already present
    #[inline]
    pub(crate) fn add(&mut self, target: Position) {
        if self.contains(target) {
            return;
        }

        debug_assert!(self.num_targets < MAX_DESTINATIONS);

        self.targets[self.num_targets] = target;

        self.num_targets += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.num_targets
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_targets == 0
    }

    #[inline]
    pub fn contains(&self, target: Position) -> bool {
        self.iter().any(|&pos| pos == target)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Position> {
        self.targets[..self.num_targets].iter()
    }

    /// Keeps only the targets for which `keep` holds
    pub fn retain(&mut self, mut keep: impl FnMut(Position) -> bool) {
        let mut kept = 0;

        for index in 0..self.num_targets {
            let target = self.targets[index];
            if keep(target) {
                self.targets[kept] = target;
                kept += 1;
            }
        }

        self.num_targets = kept;
    }

    /// Targets sorted row-major, for stable comparisons
    pub fn sorted(&self) -> Vec<Position> {
        let mut targets: Vec<Position> = self.iter().copied().collect();
        targets.sort();
        targets
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Position;
    type IntoIter = slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
