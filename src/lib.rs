//! # Dualchess
//!
//! A rules engine for European chess and Xiangqi built on one shared model:
//! a bounded grid, typed pieces with per-kind movement shapes, a threat
//! detector, and a turn coordinator that validates and executes moves.
pub mod board;
pub mod core;
pub mod movegen;
pub mod rules;
pub mod utils;

pub use crate::board::Board;
pub use crate::core::*;
pub use crate::rules::{Game, GameState, RulesConfig};
