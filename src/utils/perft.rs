use crate::core::{Piece, Position};
use crate::rules::Game;

/// Every `(piece, destination)` pair the side to move may play
fn moves_to_play(game: &Game) -> Vec<(Piece, Position)> {
    let side = game.side_to_move();

    game.board()
        .pieces_of(side)
        .flat_map(|piece| {
            game.destinations(piece)
                .iter()
                .map(|&to| (*piece, to))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Counts the leaves of the move tree `depth` plies deep.
///
/// Moves are played on clones, so `game` is never changed.
pub fn perft(game: &Game, depth: usize) -> usize {
    let moves = moves_to_play(game);

    if depth <= 1 {
        return if depth == 0 { 1 } else { moves.len() };
    }

    moves
        .into_iter()
        .map(|(piece, to)| {
            let mut child = game.clone();
            if child.make_move(&piece, to.row, to.col) {
                perft(&child, depth - 1)
            } else {
                0
            }
        })
        .sum()
}

/// [`perft`] split by the first move, for locating a miscounting branch
pub fn perft_divide(game: &Game, depth: usize) -> Vec<(Position, Position, usize)> {
    moves_to_play(game)
        .into_iter()
        .map(|(piece, to)| {
            let mut child = game.clone();
            let nodes = if child.make_move(&piece, to.row, to.col) {
                perft(&child, depth.saturating_sub(1))
            } else {
                0
            };
            (piece.position(), to, nodes)
        })
        .collect()
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Side, Variant};

    #[rustfmt::skip]
    const START_COUNTS: &[(Variant, usize, usize)] = &[
        (Variant::European, 1, 20),
        (Variant::European, 2, 400),
        (Variant::European, 3, 8902),
        (Variant::Xiangqi, 1, 44),
    ];

    #[test]
    fn test_start_position_counts() {
        for &(variant, depth, expected) in START_COUNTS {
            let mut game = Game::new(variant);
            game.start_game();
            assert_eq!(perft(&game, depth), expected, "{variant} depth {depth}");
        }
    }

    #[test]
    fn test_perft_does_not_mutate() {
        let mut game = Game::new(Variant::European);
        game.start_game();
        let before = game.clone();
        perft(&game, 2);
        assert_eq!(game, before);
    }

    #[test]
    fn test_divide_sums_to_total() {
        let mut game = Game::new(Variant::Xiangqi);
        game.start_game();

        let divide = perft_divide(&game, 2);
        assert_eq!(divide.len(), 44);
        assert_eq!(
            divide.iter().map(|&(_, _, nodes)| nodes).sum::<usize>(),
            perft(&game, 2)
        );
    }

    #[test]
    fn test_castling_is_counted() {
        let game = Game::from_layout(
            Variant::European,
            "4k3/8/8/8/8/8/8/R3K2R",
            Side::North,
        )
        .unwrap();
        // rooks 10 + 9, king 5 steps + 2 castles
        assert_eq!(perft(&game, 1), 26);
    }
}
