use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub const fn result(self) -> Option<GameResult> {
        match self {
            Self::InProgress => None,
            Self::Won(mark) => Some(GameResult::Win(mark)),
            Self::Draw => Some(GameResult::Draw),
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

impl From<GameResult> for GameStatus {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::Win(mark) => Self::Won(mark),
            GameResult::Draw => Self::Draw,
        }
    }
}

/// Notifications produced by an accepted move, for display only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Vanished { player: Mark, index: CellIndex },
    Finished(GameResult),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    placed: Option<(Mark, CellIndex)>,
    events: SmallVec<[GameEvent; 2]>,
}

impl MoveOutcome {
    pub fn has_update(&self) -> bool {
        self.placed.is_some()
    }

    pub fn placed(&self) -> Option<(Mark, CellIndex)> {
        self.placed
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn vanished(&self) -> Option<CellIndex> {
        self.events.iter().find_map(|event| match *event {
            GameEvent::Vanished { index, .. } => Some(index),
            GameEvent::Finished(_) => None,
        })
    }

    pub fn result(&self) -> Option<GameResult> {
        self.events.iter().find_map(|event| match *event {
            GameEvent::Finished(result) => Some(result),
            GameEvent::Vanished { .. } => None,
        })
    }
}

/// Read-only view of the engine handed to renderers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub cells: [Option<Mark>; BOARD_CELLS],
    pub turn: Mark,
    pub status: GameStatus,
    pub vanish_warning: bool,
    pub next_to_vanish: Option<CellIndex>,
    pub winning_line: Option<Line>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    x_history: MoveHistory,
    o_history: MoveHistory,
    turn: Mark,
    status: GameStatus,
    move_seq: MoveSeq,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, index: CellIndex) -> Cell {
        self.board[index]
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Accepted moves since the last reset.
    pub fn move_count(&self) -> MoveSeq {
        self.move_seq
    }

    pub fn history(&self, mark: Mark) -> &MoveHistory {
        match mark {
            Mark::X => &self.x_history,
            Mark::O => &self.o_history,
        }
    }

    fn history_mut(&mut self, mark: Mark) -> &mut MoveHistory {
        match mark {
            Mark::X => &mut self.x_history,
            Mark::O => &mut self.o_history,
        }
    }

    pub fn can_play_at(&self, index: usize) -> bool {
        self.check_playable(index).is_ok()
    }

    /// Whether the player to move will lose their oldest mark by moving.
    pub fn vanish_warning(&self) -> bool {
        !self.is_finished() && self.history(self.turn).is_at_capacity()
    }

    /// Cell the next move will clear, when [`Self::vanish_warning`] holds.
    pub fn next_to_vanish(&self) -> Option<CellIndex> {
        if self.vanish_warning() {
            self.history(self.turn).oldest()
        } else {
            None
        }
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::Won(mark) => self
                .board
                .winning_line()
                .filter(|&(line_mark, _)| line_mark == mark)
                .map(|(_, line)| line),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: self.board.marks(),
            turn: self.turn,
            status: self.status,
            vanish_warning: self.vanish_warning(),
            next_to_vanish: self.next_to_vanish(),
            winning_line: self.winning_line(),
        }
    }

    /// Plays the current player's mark at `index`.
    ///
    /// Invalid requests leave the engine untouched and return an outcome without update.
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        self.try_apply_move(index).unwrap_or_else(|err| {
            log::trace!("move at {} rejected: {}", index, err);
            MoveOutcome::default()
        })
    }

    pub fn try_apply_move(&mut self, index: usize) -> Result<MoveOutcome> {
        let index = self.check_playable(index)?;
        let player = self.turn;

        self.move_seq += 1;
        self.board.place(index, player, self.move_seq);
        log::debug!("{} placed at {} (move {})", player, index, self.move_seq);

        let mut outcome = MoveOutcome {
            placed: Some((player, index)),
            events: SmallVec::new(),
        };

        if let Some(vanished) = self.history_mut(player).push(index) {
            self.board.clear(vanished);
            log::info!("{}'s mark at {} vanished", player, vanished);
            outcome.events.push(GameEvent::Vanished {
                player,
                index: vanished,
            });
        }

        match self.board.evaluate() {
            Some(result) => {
                self.status = result.into();
                log::info!("game over: {:?}\n{}", result, self.board);
                outcome.events.push(GameEvent::Finished(result));
            }
            None => self.turn = player.opponent(),
        }

        Ok(outcome)
    }

    pub fn reset(&mut self) {
        log::debug!("reset after {} moves", self.move_seq);
        *self = Self::new();
    }

    fn check_playable(&self, index: usize) -> Result<CellIndex> {
        if self.is_finished() {
            return Err(GameError::AlreadyEnded);
        }

        let index = to_cell_index(index).ok_or(GameError::InvalidIndex)?;
        if self.board[index].is_empty() {
            Ok(index)
        } else {
            Err(GameError::Occupied)
        }
    }
}
