/// # Module: `utils`
///
/// Development tools built on the public game API.
///
/// ## Submodules
///
/// - `perft`: counts the nodes of the move tree to a fixed depth, used to
///   check move generation against known totals.
pub mod perft;

pub use perft::{perft, perft_divide};
