use tracing::{debug, info};

use super::board::{Board, BoardError, COLS};
use super::events::{GameEvent, Observers, SubscriptionId};
use super::player::{Player, Players, Seat};
use super::win::{find_win, WinInfo};
use crate::error::EngineError;

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    Win { winner: Player, info: WinInfo },
    Tie,
}

impl GameResult {
    /// The winning player, `None` for a tie
    pub fn winner(&self) -> Option<&Player> {
        match self {
            GameResult::Win { winner, .. } => Some(winner),
            GameResult::Tie => None,
        }
    }

    pub fn win_info(&self) -> Option<&WinInfo> {
        match self {
            GameResult::Win { info, .. } => Some(info),
            GameResult::Tie => None,
        }
    }
}

/// Evaluation of the board right after a disc was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NoWin,
    Win(WinInfo),
    Tie,
}

/// What a call to [`GameEngine::attempt_move`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Disc placed, game continues with the other player.
    Accepted { column: usize, row: usize },
    /// Column already full; nothing changed.
    ColumnFull { column: usize },
    /// Disc placed and it ended the game.
    GameEnded {
        column: usize,
        row: usize,
        result: GameResult,
    },
    /// The game is over; nothing changed.
    Rejected,
}

/// Two-player Connect Four state machine.
///
/// Not meant for concurrent use: every call runs to completion, including
/// observer dispatch, before returning.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    players: Players,
    current: Seat,
    turns_passed: usize,
    result: Option<GameResult>,
    observers: Observers,
}

impl GameEngine {
    pub fn new(players: Players) -> Self {
        GameEngine {
            board: Board::new(),
            players,
            current: Seat::First,
            turns_passed: 1,
            result: None,
            observers: Observers::new(),
        }
    }

    pub fn with_labels(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::new(Players::new(first, second))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        self.players.get(seat)
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.players.get(self.current)
    }

    /// Completed rounds plus one; a round is one move by each player.
    pub fn turns_passed(&self) -> usize {
        self.turns_passed
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Result of the finished game, `None` while in progress
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Get list of columns a move may currently go into
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Drop the current player's disc into `column`.
    ///
    /// Full columns and moves after the game ended are ordinary outcomes; only
    /// a column outside `0..7` is an error.
    pub fn attempt_move(&mut self, column: usize) -> Result<MoveOutcome, EngineError> {
        if column >= COLS {
            return Err(EngineError::InvalidColumn { column });
        }
        if self.is_game_over() {
            debug!(column, "move ignored, game is over");
            return Ok(MoveOutcome::Rejected);
        }

        let disc = match self.board.drop_disc(column, self.current) {
            Ok(disc) => disc,
            Err(BoardError::ColumnFull(_)) => {
                debug!(column, "column full");
                self.observers.emit(&GameEvent::ColumnFull { column });
                return Ok(MoveOutcome::ColumnFull { column });
            }
            Err(BoardError::InvalidColumn(_)) => {
                return Err(EngineError::InvalidColumn { column });
            }
        };

        debug!(
            column,
            row = disc.y,
            player = self.current_player().label(),
            "disc placed"
        );
        self.observers.emit(&GameEvent::MoveMade {
            column,
            row: disc.y,
            seat: disc.owner,
        });

        let result = match self.evaluate() {
            Verdict::Win(info) => GameResult::Win {
                winner: self.current_player().clone(),
                info,
            },
            Verdict::Tie => GameResult::Tie,
            Verdict::NoWin => {
                self.switch_player();
                return Ok(MoveOutcome::Accepted {
                    column,
                    row: disc.y,
                });
            }
        };

        match &result {
            GameResult::Win { winner, info } => info!(
                winner = winner.label(),
                direction = info.direction.name(),
                turn = info.turn,
                "game won"
            ),
            GameResult::Tie => info!(turn = self.turns_passed, "game tied"),
        }
        self.result = Some(result.clone());
        self.observers.emit(&GameEvent::GameEnded(result.clone()));

        Ok(MoveOutcome::GameEnded {
            column,
            row: disc.y,
            result,
        })
    }

    /// Start over with an empty board; the players stay the same.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Seat::First;
        self.turns_passed = 1;
        self.result = None;
        info!("game restarted");
        self.observers.emit(&GameEvent::GameRestarted);
    }

    /// Win takes precedence over a full board.
    fn evaluate(&self) -> Verdict {
        if let Some(info) = find_win(&self.board, self.turns_passed) {
            Verdict::Win(info)
        } else if self.board.is_full() {
            Verdict::Tie
        } else {
            Verdict::NoWin
        }
    }

    fn switch_player(&mut self) {
        self.current = self.current.other();
        self.observers.emit(&GameEvent::SwitchedPlayer {
            current: self.current,
        });
        // A round completes once the second player has moved
        if self.current == Seat::First {
            self.turns_passed += 1;
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Players::default())
    }
}
