//! The game loop.
//!
//! A game alternates between the human and the computer until the board is
//! empty. The human's turn keeps asking for input until a move is both well
//! formed and legal; the computer's turn hands the board to the policy.

use im::Vector;
use log::{debug, info};

use crate::core::{Board, Move, MoveRecord, NimError, Player, Result};
use crate::rules::{GameResult, NormalPlay, RulesEngine};
use crate::strategy::{MovePolicy, ParityPolicy};

use super::io::{BoardDisplay, MoveSource};

/// Where the game is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the human's move.
    AwaitingPlayerMove,
    /// The computer moves next.
    AwaitingComputerMove,
    /// Someone took the last stick.
    GameOver(GameResult),
}

impl GamePhase {
    fn to_move(player: Player) -> Self {
        match player {
            Player::Human => GamePhase::AwaitingPlayerMove,
            Player::Computer => GamePhase::AwaitingComputerMove,
        }
    }
}

/// A single game of Nim.
///
/// Owns the board for the whole game. `P` picks the computer's moves and
/// `R` decides legality and the winner.
#[derive(Clone, Debug)]
pub struct Game<P = ParityPolicy, R = NormalPlay> {
    board: Board,
    phase: GamePhase,
    policy: P,
    rules: R,
    history: Vector<MoveRecord>,
}

impl Game {
    /// Start a game on `board` with perfect computer play; the human moves first.
    pub fn new(board: Board) -> Result<Self> {
        Self::with_parts(board, ParityPolicy, NormalPlay)
    }
}

impl<P: MovePolicy, R: RulesEngine> Game<P, R> {
    /// Start a game with a custom policy and rules; the human moves first.
    ///
    /// Fails with `InvalidState` on an empty board: nobody could move.
    pub fn with_parts(board: Board, policy: P, rules: R) -> Result<Self> {
        if board.is_empty() {
            return Err(NimError::InvalidState(
                "cannot start a game on an empty board".to_string(),
            ));
        }
        Ok(Self {
            board,
            phase: GamePhase::to_move(Player::Human),
            policy,
            rules,
            history: Vector::new(),
        })
    }

    /// Let `first` open instead of the human.
    #[must_use]
    pub fn starting_with(mut self, first: Player) -> Self {
        if self.history.is_empty() {
            self.phase = GamePhase::to_move(first);
        }
        self
    }

    // === Accessors ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vector<MoveRecord> {
        self.history.clone()
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            GamePhase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    /// Has someone won?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    // === Single steps ===

    /// Apply the human's move.
    ///
    /// Fails with `InvalidMove` (board unchanged) if the move is illegal, or
    /// `InvalidState` if it is not the human's turn.
    pub fn play_player_move(&mut self, mv: Move) -> Result<Option<GameResult>> {
        if self.phase != GamePhase::AwaitingPlayerMove {
            return Err(NimError::InvalidState(format!(
                "player move {} during {:?}",
                mv, self.phase
            )));
        }
        self.rules.apply_move(&mut self.board, mv)?;
        Ok(self.finish_move(Player::Human, mv))
    }

    /// Let the policy choose and apply the computer's move.
    ///
    /// Fails with `InvalidState` if it is not the computer's turn.
    pub fn play_computer_move(&mut self) -> Result<Move> {
        if self.phase != GamePhase::AwaitingComputerMove {
            return Err(NimError::InvalidState(format!(
                "computer move during {:?}",
                self.phase
            )));
        }
        let mv = self.policy.choose_move(&mut self.board)?;
        self.finish_move(Player::Computer, mv);
        Ok(mv)
    }

    fn finish_move(&mut self, player: Player, mv: Move) -> Option<GameResult> {
        let sequence = self.history.len() as u32 + 1;
        self.history.push_back(MoveRecord::new(player, mv, sequence));
        debug!("#{} {} took {} -> {:?}", sequence, player, mv, self.board.rows());

        match self.rules.is_terminal(&self.board, player) {
            Some(result) => {
                self.phase = GamePhase::GameOver(result);
                Some(result)
            }
            None => {
                self.phase = GamePhase::to_move(player.opponent());
                None
            }
        }
    }

    // === Turns against a front end ===

    /// Ask for moves until one is applied, then show the board.
    pub fn player_turn<IO>(&mut self, io: &mut IO) -> Result<Option<GameResult>>
    where
        IO: MoveSource + BoardDisplay,
    {
        loop {
            let token = io.next_move_token(&self.board)?;
            let attempt = token
                .parse::<Move>()
                .and_then(|mv| self.play_player_move(mv).map(|result| (mv, result)));

            match attempt {
                Ok((mv, result)) => {
                    io.show_move(Player::Human, mv)?;
                    io.show_rows(self.board.rows())?;
                    return Ok(result);
                }
                Err(e) if e.is_recoverable() => {
                    debug!("rejected move token {:?}: {}", token.trim(), e);
                    io.show_error(&e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Play the computer's move and show it.
    pub fn computer_turn<IO>(&mut self, io: &mut IO) -> Result<Option<GameResult>>
    where
        IO: BoardDisplay,
    {
        let mv = self.play_computer_move()?;
        io.show_move(Player::Computer, mv)?;
        io.show_rows(self.board.rows())?;
        Ok(self.result())
    }

    /// Alternate turns until someone wins.
    pub fn run<IO>(&mut self, io: &mut IO) -> Result<GameResult>
    where
        IO: MoveSource + BoardDisplay,
    {
        io.show_rows(self.board.rows())?;

        let result = loop {
            match self.phase {
                GamePhase::AwaitingPlayerMove => self.player_turn(io)?,
                GamePhase::AwaitingComputerMove => self.computer_turn(io)?,
                GamePhase::GameOver(result) => break result,
            };
        };

        info!("{} after {} moves", result, self.history.len());
        io.show_result(&result)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(rows: &[u32]) -> Game {
        Game::new(Board::new(rows, 8).unwrap()).unwrap()
    }

    #[test]
    fn test_new_game() {
        let g = game(&[7, 5, 3]);
        assert_eq!(g.phase(), GamePhase::AwaitingPlayerMove);
        assert_eq!(g.board().rows(), &[7, 5, 3]);
        assert!(g.history().is_empty());
        assert!(!g.is_over());
    }

    #[test]
    fn test_empty_board_rejected() {
        let err = Game::new(Board::new(&[0, 0], 8).unwrap()).unwrap_err();
        assert!(matches!(err, NimError::InvalidState(_)));
    }

    #[test]
    fn test_turns_alternate() {
        let mut g = game(&[7, 5, 3]);

        assert_eq!(g.play_player_move(Move::new(2, 1)).unwrap(), None);
        assert_eq!(g.phase(), GamePhase::AwaitingComputerMove);

        let mv = g.play_computer_move().unwrap();
        assert_eq!(g.phase(), GamePhase::AwaitingPlayerMove);

        let history = g.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], MoveRecord::new(Player::Human, Move::new(2, 1), 1));
        assert_eq!(history[1], MoveRecord::new(Player::Computer, mv, 2));
    }

    #[test]
    fn test_out_of_turn() {
        let mut g = game(&[7, 5, 3]);
        assert!(matches!(g.play_computer_move(), Err(NimError::InvalidState(_))));

        g.play_player_move(Move::new(1, 0)).unwrap();
        assert!(matches!(
            g.play_player_move(Move::new(1, 0)),
            Err(NimError::InvalidState(_))
        ));
    }

    #[test]
    fn test_invalid_move_keeps_turn() {
        let mut g = game(&[7, 5, 3]);
        let err = g.play_player_move(Move::new(8, 0)).unwrap_err();

        assert!(matches!(err, NimError::InvalidMove { .. }));
        assert_eq!(g.board().rows(), &[7, 5, 3]);
        assert_eq!(g.phase(), GamePhase::AwaitingPlayerMove);
        assert!(g.history().is_empty());
    }

    #[test]
    fn test_player_wins_on_last_stick() {
        let mut g = game(&[4]);
        let result = g.play_player_move(Move::new(4, 0)).unwrap();

        assert_eq!(result, Some(GameResult::Winner(Player::Human)));
        assert!(g.is_over());
        assert!(matches!(g.play_computer_move(), Err(NimError::InvalidState(_))));
    }

    #[test]
    fn test_with_parts_opens_with_human() {
        let board = Board::new(&[7, 5, 3], 8).unwrap();
        let g = Game::with_parts(board, ParityPolicy, NormalPlay).unwrap();
        assert_eq!(g.phase(), GamePhase::AwaitingPlayerMove);

        let empty = Board::new(&[0, 0], 8).unwrap();
        assert!(matches!(
            Game::with_parts(empty, ParityPolicy, NormalPlay),
            Err(NimError::InvalidState(_))
        ));
    }

    #[test]
    fn test_computer_first() {
        let mut g = game(&[7, 5, 3]).starting_with(Player::Computer);
        assert_eq!(g.phase(), GamePhase::AwaitingComputerMove);

        assert_eq!(g.play_computer_move().unwrap(), Move::new(1, 0));
        assert_eq!(g.board().rows(), &[6, 5, 3]);
    }

    #[test]
    fn test_computer_wins_on_last_stick() {
        let mut g = game(&[2, 3]);
        g.play_player_move(Move::new(2, 0)).unwrap();

        assert_eq!(g.play_computer_move().unwrap(), Move::new(3, 1));
        assert_eq!(g.result(), Some(GameResult::Winner(Player::Computer)));
    }
}
