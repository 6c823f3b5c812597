//! Turn coordination: whose move it is, which requests are accepted, and
//! how an accepted request changes the board.

pub mod castling;
pub mod config;
pub mod executor;
pub mod state;

pub use config::RulesConfig;
pub use state::GameState;

use tracing::{debug, info};

use crate::board::Board;
use crate::core::*;
use crate::movegen::{self, MoveList};

/******************************************\
|==========================================|
|                   Game                   |
|==========================================|
\******************************************/

/// # Game
///
/// Owns the board and the turn state of one game and validates every move
/// request against the rules of its variant.
///
/// ## Examples
///
/// ```
/// use dualchess::{Game, Variant};
///
/// let mut game = Game::new(Variant::European);
/// game.start_game();
///
/// let pawn = *game.board().get_piece((6, 4).into()).unwrap();
/// assert!(game.make_move(&pawn, 4, 4));
/// assert!(!game.make_move(&pawn, 3, 4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,

    state: GameState,

    config: RulesConfig,
}

impl Game {
    /// An empty board for `variant` with default settings
    pub fn new(variant: Variant) -> Game {
        let config = RulesConfig::new(variant);

        Game {
            board: Board::new(variant),
            state: GameState::new(config.first_side),
            config,
        }
    }

    /// An empty board configured by `config`, once the config validates
    pub fn with_config(config: RulesConfig) -> Result<Game, ConfigError> {
        config.validate()?;

        Ok(Game {
            board: Board::new(config.variant),
            state: GameState::new(config.first_side),
            config,
        })
    }

    /// A game continuing from an existing board, `first` to move
    pub fn with_board(board: Board, first: Side) -> Result<Game, ConfigError> {
        let config = RulesConfig {
            variant: board.variant(),
            first_side: first,
            ..Default::default()
        };
        config.validate()?;

        Ok(Game {
            board,
            state: GameState::new(first),
            config,
        })
    }

    /// A game continuing from a layout string, `first` to move
    pub fn from_layout(variant: Variant, layout: &str, first: Side) -> Result<Game, ConfigError> {
        Game::with_board(Board::from_layout(variant, layout)?, first)
    }

    /// Sets up the starting army of both sides and hands the turn to the
    /// configured first side
    pub fn start_game(&mut self) {
        self.board = Board::start(self.config.variant);
        self.state = GameState::new(self.config.first_side);

        info!(
            variant = %self.config.variant,
            first = %self.config.first_side,
            "game started"
        );
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.state.side_to_move()
    }

    #[inline]
    pub fn num_rows(&self) -> i32 {
        self.board.num_rows()
    }

    #[inline]
    pub fn num_columns(&self) -> i32 {
        self.board.num_columns()
    }

    /// Whether it is `piece`'s side to move
    #[inline]
    pub fn legal_piece_to_play(&self, piece: &Piece) -> bool {
        piece.side() == self.state.side_to_move()
    }

    /// Whether the player may pick a different piece before committing a
    /// move. Always allowed in both variants.
    #[inline]
    pub fn can_change_selection(&self, _piece: &Piece) -> bool {
        true
    }

    /// Whether `side`'s King or General is threatened
    pub fn in_check(&self, side: Side) -> bool {
        self.board.in_check(side)
    }

    /// Whether `piece` could move to `(row, col)`, ignoring whose turn it is
    pub fn is_legal_move(&self, piece: &Piece, row: i32, col: i32) -> bool {
        movegen::is_legal_move(&self.board, piece, Position::new(row, col))
    }

    /// Every cell `piece` may currently move to, castling included
    pub fn destinations(&self, piece: &Piece) -> MoveList {
        let mut list = movegen::legal_destinations(&self.board, piece);

        if piece.kind() == PieceKind::King && piece.first_move() {
            for to in castling::castle_targets(&self.board, piece) {
                if castling::castle_plan(&self.board, piece, to).is_some() {
                    list.add(to);
                }
            }
        }

        list
    }
}

/******************************************\
|==========================================|
|               Make Move                  |
|==========================================|
\******************************************/

impl Game {
    /// Moves `piece` to `(row, col)` if the rules allow it, promoting pawns to
    /// the configured default. Returns whether the move was made; a refused
    /// move leaves the game untouched.
    pub fn make_move(&mut self, piece: &Piece, row: i32, col: i32) -> bool {
        self.try_move(piece, Position::new(row, col), None).is_ok()
    }

    /// As [`Game::make_move`], promoting a pawn to `promotion`
    pub fn make_move_promoting(
        &mut self,
        piece: &Piece,
        row: i32,
        col: i32,
        promotion: PieceKind,
    ) -> bool {
        self.try_move(piece, Position::new(row, col), Some(promotion))
            .is_ok()
    }

    /// Validates and plays a move, reporting why a refused move was refused.
    ///
    /// An unmoved King asking to go two cells along its back rank is a
    /// castling request and is settled by the castling rules alone.
    pub fn try_move(
        &mut self,
        piece: &Piece,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveRejection> {
        let result = self.validate_and_play(piece, to, promotion);

        match &result {
            Ok(mv) => {
                self.state.advance();
                debug!(side = %piece.side(), mv = %mv, "move played");
            }
            Err(reason) => {
                debug!(side = %piece.side(), %to, %reason, "move refused");
            }
        }

        result
    }

    fn validate_and_play(
        &mut self,
        piece: &Piece,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveRejection> {
        if !self.legal_piece_to_play(piece) {
            return Err(MoveRejection::NotYourTurn(self.state.side_to_move()));
        }

        // Work from the board's copy so flags are current
        let from = piece.position();
        let piece = match self.board.occupant(from) {
            Some(current) if current.id() == piece.id() => *current,
            _ => return Err(MoveRejection::StalePiece(from)),
        };
        let piece = &piece;

        if !self.board.contains(to) {
            return Err(MoveRejection::OutOfBounds(to));
        }

        if castling::is_castle_request(&self.board, piece, to) {
            let plan = castling::castle_plan(&self.board, piece, to)
                .ok_or(MoveRejection::CastleBlocked(to))?;
            return Ok(castling::castle(&mut self.board, piece, plan));
        }

        if !movegen::is_legal_move(&self.board, piece, to) {
            return Err(MoveRejection::IllegalDestination {
                kind: piece.kind(),
                from,
                to,
            });
        }

        let promotion = if executor::promotes(&self.board, piece, to) {
            Some(self.promotion_choice(promotion)?)
        } else {
            None
        };

        Ok(executor::execute(&mut self.board, piece, to, promotion))
    }

    /// The requested promotion, or the configured default when none was asked for
    fn promotion_choice(&self, requested: Option<PieceKind>) -> Result<PieceKind, MoveRejection> {
        match requested {
            Some(kind) if kind.is_promotion() => Ok(kind),
            Some(kind) => Err(MoveRejection::InvalidPromotion(kind)),
            None => Ok(self.config.default_promotion),
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::XIANGQI_START;

    fn piece_at(game: &Game, row: i32, col: i32) -> Piece {
        *game.board().get_piece(Position::new(row, col)).unwrap()
    }

    #[test]
    fn test_start_game_populates_board() {
        let mut game = Game::new(Variant::Xiangqi);
        assert_eq!(game.board().pieces().count(), 0);

        game.start_game();
        assert_eq!(game.board().pieces().count(), 32);
        assert_eq!(game.side_to_move(), Side::North);
        assert_eq!((game.num_rows(), game.num_columns()), (10, 9));
    }

    #[test]
    fn test_north_moves_first() {
        let mut game = Game::new(Variant::European);
        game.start_game();

        let south_pawn = piece_at(&game, 1, 4);
        let north_pawn = piece_at(&game, 6, 4);
        assert!(!game.legal_piece_to_play(&south_pawn));
        assert!(game.legal_piece_to_play(&north_pawn));

        assert!(!game.make_move(&south_pawn, 3, 4));
        assert_eq!(game.side_to_move(), Side::North);
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = Game::new(Variant::European);
        game.start_game();

        assert!(game.make_move(&piece_at(&game, 6, 4), 4, 4));
        assert_eq!(game.side_to_move(), Side::South);
        assert!(game.make_move(&piece_at(&game, 1, 4), 3, 4));
        assert_eq!(game.side_to_move(), Side::North);
        assert_eq!(game.state().plies(), 2);
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut game = Game::new(Variant::European);
        game.start_game();
        let before = game.clone();

        let rook = piece_at(&game, 7, 0);
        assert!(!game.make_move(&rook, 5, 0));
        assert!(!game.make_move(&rook, 8, 0));
        assert_eq!(game, before);
    }

    #[test]
    fn test_rejection_reasons() {
        let mut game = Game::new(Variant::European);
        game.start_game();

        let south = piece_at(&game, 1, 0);
        assert_eq!(
            game.try_move(&south, Position::new(2, 0), None),
            Err(MoveRejection::NotYourTurn(Side::North))
        );

        let rook = piece_at(&game, 7, 0);
        assert_eq!(
            game.try_move(&rook, Position::new(-1, 0), None),
            Err(MoveRejection::OutOfBounds(Position::new(-1, 0)))
        );
        assert!(matches!(
            game.try_move(&rook, Position::new(5, 0), None),
            Err(MoveRejection::IllegalDestination { .. })
        ));

        let king = piece_at(&game, 7, 4);
        assert_eq!(
            game.try_move(&king, Position::new(7, 6), None),
            Err(MoveRejection::CastleBlocked(Position::new(7, 6)))
        );
    }

    #[test]
    fn test_stale_piece_is_refused() {
        let mut game = Game::new(Variant::European);
        game.start_game();

        let pawn = piece_at(&game, 6, 4);
        assert!(game.make_move(&pawn, 4, 4));
        assert!(game.make_move(&piece_at(&game, 1, 4), 3, 4));

        assert_eq!(
            game.try_move(&pawn, Position::new(5, 4), None),
            Err(MoveRejection::StalePiece(Position::new(6, 4)))
        );
    }

    #[test]
    fn test_castling_through_game() {
        let mut game =
            Game::from_layout(Variant::European, "r3k2r/8/8/8/8/8/8/R3K2R", Side::North).unwrap();

        let king = piece_at(&game, 7, 4);
        assert!(game.destinations(&king).contains(Position::new(7, 6)));
        assert!(game.make_move(&king, 7, 6));
        assert_eq!(piece_at(&game, 7, 5).kind(), PieceKind::Rook);
        assert_eq!(game.side_to_move(), Side::South);

        let king = piece_at(&game, 0, 4);
        let mv = game.try_move(&king, Position::new(0, 2), None).unwrap();
        assert_eq!(
            mv.kind,
            MoveKind::Castle {
                rook_from: Position::new(0, 0),
                rook_to: Position::new(0, 3)
            }
        );
    }

    #[test]
    fn test_failed_castle_does_not_fall_through() {
        let mut game =
            Game::from_layout(Variant::European, "k4r2/8/8/8/8/8/8/R3K2R", Side::North).unwrap();
        let before = game.clone();

        let king = piece_at(&game, 7, 4);
        assert!(!game.make_move(&king, 7, 6));
        assert_eq!(game, before);
    }

    #[test]
    fn test_castle_onto_own_rook_leaves_game_unchanged() {
        let mut game =
            Game::from_layout(Variant::European, "4k3/8/8/8/8/8/8/5K1R", Side::North).unwrap();
        let before = game.clone();

        let king = piece_at(&game, 7, 5);
        assert_eq!(
            game.try_move(&king, Position::new(7, 7), None),
            Err(MoveRejection::CastleBlocked(Position::new(7, 7)))
        );
        assert_eq!(game, before);
        assert_eq!(piece_at(&game, 7, 7).kind(), PieceKind::Rook);
        assert!(!game.destinations(&king).contains(Position::new(7, 7)));
    }

    #[test]
    fn test_promotion_choices() {
        let layout = "4k3/P7/8/8/8/8/8/4K3";

        let mut game = Game::from_layout(Variant::European, layout, Side::North).unwrap();
        assert!(game.make_move(&piece_at(&game, 1, 0), 0, 0));
        assert_eq!(piece_at(&game, 0, 0).kind(), PieceKind::Queen);

        let mut game = Game::from_layout(Variant::European, layout, Side::North).unwrap();
        assert!(game.make_move_promoting(&piece_at(&game, 1, 0), 0, 0, PieceKind::Rook));
        assert_eq!(piece_at(&game, 0, 0).kind(), PieceKind::Rook);

        let mut game = Game::from_layout(Variant::European, layout, Side::North).unwrap();
        let before = game.clone();
        assert_eq!(
            game.try_move(&piece_at(&game, 1, 0), Position::new(0, 0), Some(PieceKind::King)),
            Err(MoveRejection::InvalidPromotion(PieceKind::King))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_configured_promotion() {
        let config = RulesConfig {
            default_promotion: PieceKind::Knight,
            ..Default::default()
        };
        let mut game = Game::with_config(config).unwrap();
        game.start_game();
        assert_eq!(game.config().default_promotion, PieceKind::Knight);
    }

    #[test]
    fn test_inactive_first_side_is_rejected() {
        let config = RulesConfig {
            first_side: Side::East,
            ..Default::default()
        };
        assert!(matches!(
            Game::with_config(config),
            Err(ConfigError::InactiveSide {
                side: Side::East,
                variant: Variant::European
            })
        ));

        let config = RulesConfig {
            default_promotion: PieceKind::Pawn,
            ..Default::default()
        };
        assert!(matches!(
            Game::with_config(config),
            Err(ConfigError::InvalidPromotion(PieceKind::Pawn))
        ));

        assert!(matches!(
            Game::from_layout(Variant::Xiangqi, XIANGQI_START, Side::West),
            Err(ConfigError::InactiveSide { side: Side::West, .. })
        ));
        assert!(matches!(
            Game::from_layout(Variant::European, "8/8", Side::North),
            Err(ConfigError::Layout(LayoutParseError::InvalidRowCount { .. }))
        ));
    }

    #[test]
    fn test_promotion_choice_ignored_without_promotion() {
        let mut game = Game::new(Variant::European);
        game.start_game();

        // A knight move and a pawn push never reach the far rank
        let knight = piece_at(&game, 7, 1);
        assert_eq!(
            game.try_move(&knight, Position::new(5, 2), Some(PieceKind::King))
                .map(|mv| mv.kind),
            Ok(MoveKind::Normal)
        );

        let pawn = piece_at(&game, 1, 4);
        assert!(game.make_move_promoting(&pawn, 3, 4, PieceKind::Soldier));
        assert_eq!(piece_at(&game, 3, 4).kind(), PieceKind::Pawn);
    }

    #[test]
    fn test_south_first_config() {
        let config = RulesConfig {
            first_side: Side::South,
            ..Default::default()
        };
        let mut game = Game::with_config(config).unwrap();
        game.start_game();
        assert!(game.legal_piece_to_play(&piece_at(&game, 1, 0)));
        assert!(!game.legal_piece_to_play(&piece_at(&game, 6, 0)));
    }

    #[test]
    fn test_selection_always_changeable() {
        let mut game = Game::new(Variant::Xiangqi);
        game.start_game();
        for piece in game.board().pieces() {
            assert!(game.can_change_selection(piece));
        }
    }

    #[test]
    fn test_flying_general_capture_through_game() {
        let mut game =
            Game::from_layout(Variant::Xiangqi, "3x5/9/9/9/9/9/9/9/9/3X5", Side::North).unwrap();
        let general = piece_at(&game, 9, 3);
        assert!(game.make_move(&general, 0, 3));
        assert!(game.board().royal_of(Side::South).is_none());
    }
}
