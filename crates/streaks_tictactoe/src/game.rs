//! Game engine for tic-tac-toe.

use super::action::{Move, MoveError};
use super::config::{OccupiedPolicy, RuleSet};
use super::rules::find_streak;
use super::{GameStatus, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Number of cells on the board, and the most moves a game can hold.
pub const BOARD_CELLS: usize = 9;

/// Fewest moves after which a streak is possible.
const MIN_MOVES_FOR_STREAK: usize = 5;

/// Tic-tac-toe game engine.
///
/// Holds the positions played so far in submission order. Turn ownership
/// is not stored: even indices belong to [`Player::First`], odd indices to
/// [`Player::Second`]. Status is recomputed from the whole history after
/// every move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    history: Vec<Position>,
    rules: RuleSet,
}

impl Game {
    /// Creates a new game with the reference rules.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rules(RuleSet::reference())
    }

    /// Creates a new game with the given rules.
    #[instrument]
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            history: Vec::with_capacity(BOARD_CELLS),
            rules,
        }
    }

    /// Plays `moves` on a fresh game.
    ///
    /// Returns the game and the result of the last submission, which is
    /// `None` if that submission was rejected or `moves` is empty.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(rules: RuleSet, moves: &[Position]) -> (Self, Option<GameStatus>) {
        let mut game = Self::with_rules(rules);
        let mut last = None;
        for &position in moves {
            last = game.submit_move(position);
        }
        (game, last)
    }

    /// Returns the rules this game runs under.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Submits the next move.
    ///
    /// Returns the status after the move, or `None` if the move was
    /// rejected. Under the reference rules the only rejection is a full
    /// board.
    pub fn submit_move(&mut self, position: Position) -> Option<GameStatus> {
        self.try_move(position).ok()
    }

    /// Submits the next move, reporting why it was refused.
    ///
    /// # Errors
    ///
    /// - [`MoveError::BoardFull`] once nine moves have been accepted.
    /// - [`MoveError::SquareOccupied`] if `position` was already played and
    ///   the rules use [`OccupiedPolicy::Reject`].
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn try_move(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.is_full() {
            warn!(%position, "Move rejected, board is full");
            return Err(MoveError::BoardFull);
        }

        if self.rules.occupied() == OccupiedPolicy::Reject && self.history.contains(&position) {
            warn!(%position, "Move rejected, square already played");
            return Err(MoveError::SquareOccupied(position));
        }

        let player = Player::for_move(self.history.len());
        self.history.push(position);
        debug!(%player, coordinate = %position.coordinate(), "Move accepted");

        let status = self.status();
        if status.is_over() {
            info!(%status, moves = self.history.len(), "Game status resolved");
        }
        Ok(status)
    }

    /// Computes the status from the full history.
    ///
    /// With fewer than five moves nobody can hold three cells, so the game
    /// is in progress. Otherwise First's partition is checked before
    /// Second's, and a history where neither holds a streak is a draw even
    /// if cells remain.
    #[instrument(skip(self), level = "debug")]
    pub fn status(&self) -> GameStatus {
        if self.history.len() < MIN_MOVES_FOR_STREAK {
            return GameStatus::InProgress;
        }

        let window = self.rules.window();
        for player in [Player::First, Player::Second] {
            if let Some(streak) = find_streak(&self.partition(player), window) {
                return GameStatus::Win(player, streak);
            }
        }

        GameStatus::Draw
    }

    /// Returns the positions played, in submission order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the moves played with their owners.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history
            .iter()
            .enumerate()
            .map(|(index, &position)| Move::new(Player::for_move(index), position))
    }

    /// Returns one player's moves, in submission order.
    pub fn partition(&self, player: Player) -> Vec<Position> {
        self.moves()
            .filter(|action| action.player() == player)
            .map(|action| action.position())
            .collect()
    }

    /// Returns the player whose move is next, or `None` if the board is full.
    pub fn to_move(&self) -> Option<Player> {
        (!self.is_full()).then(|| Player::for_move(self.history.len()))
    }

    /// Returns the number of accepted moves.
    pub fn moves_made(&self) -> usize {
        self.history.len()
    }

    /// Returns true once nine moves have been accepted.
    pub fn is_full(&self) -> bool {
        self.history.len() >= BOARD_CELLS
    }
}
