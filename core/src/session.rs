use crate::*;

/// Generation number of a board load.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardId(u32);

impl BoardId {
    pub const fn get(self) -> u32 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionPhase {
    Idle,
    Loading(BoardId),
    Ready(BoardId),
    Failed(TriviaError),
}

/// Start/restart lifecycle of one player's game.
///
/// Owns the current board. A board only becomes visible through
/// [`GameSession::board`] once the load for it finished completely, and clicks
/// are only routed to the board they were rendered from.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    phase: SessionPhase,
    board: Option<Board>,
    next_id: u32,
}

impl GameSession {
    pub const fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            board: None,
            next_id: 0,
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Loading(_))
    }

    pub fn error(&self) -> Option<&TriviaError> {
        match &self.phase {
            SessionPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// The board ready to be played, if any.
    pub fn board(&self) -> Option<(BoardId, &Board)> {
        match (&self.phase, &self.board) {
            (SessionPhase::Ready(id), Some(board)) => Some((*id, board)),
            _ => None,
        }
    }

    /// Discards the current board and begins a new load.
    ///
    /// Returns `None` while a load is already in flight; the caller only starts
    /// fetching when it gets an id back.
    pub fn start_or_restart(&mut self) -> Option<BoardId> {
        if self.is_loading() {
            log::debug!("load already in flight, ignoring trigger");
            return None;
        }

        let id = BoardId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.board = None;
        self.phase = SessionPhase::Loading(id);
        log::debug!("loading board {}", id.get());
        Some(id)
    }

    /// Completes the load started for `id`; anything else is ignored.
    pub fn finish_loading(&mut self, id: BoardId, result: Result<Board>) -> bool {
        if self.phase != SessionPhase::Loading(id) {
            log::warn!("dropping result of stale load {}", id.get());
            return false;
        }

        match result {
            Ok(board) => {
                log::info!("board {} ready", id.get());
                self.board = Some(board);
                self.phase = SessionPhase::Ready(id);
            }
            Err(err) => {
                log::error!("board {} failed to load: {}", id.get(), err);
                self.phase = SessionPhase::Failed(err);
            }
        }
        true
    }

    /// Routes a click on cell `coords` of board `id` to its clue.
    pub fn reveal(&mut self, id: BoardId, coords: Coord2) -> RevealOutcome {
        let board = match (&self.phase, &mut self.board) {
            (SessionPhase::Ready(current), Some(board)) if *current == id => board,
            _ => {
                log::trace!("stale click on board {} at {:?}", id.get(), coords);
                return RevealOutcome::NoChange;
            }
        };

        let outcome = board.reveal(coords);
        if outcome.has_update() {
            log::debug!("cell {:?} -> {:?}", coords, outcome);
        }
        outcome
    }

    pub fn trigger_label(&self) -> &'static str {
        use SessionPhase::*;
        match self.phase {
            Idle => "Start!",
            Loading(_) => "Loading…",
            Ready(_) => "Restart?",
            Failed(_) => "Try again",
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
