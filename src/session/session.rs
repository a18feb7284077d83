//! Session state machine

use std::time::Duration;

use im::Vector;
use tracing::{debug, info, instrument, warn};

use super::{GameMode, GameStatus, PendingOp, Piece, SkillKind, AI_PLAYER, STARTING_PLAYER};
use crate::board::{Board, Pos, Stone};
use crate::config::{AppConfig, Timings};
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::rules::{check_draw, check_win, winning_line};

/// Full mutable state of one playthrough.
///
/// Invariant: `board` is exactly the superposition of `pieces`.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    /// Placement order
    pieces: Vector<Piece>,
    /// Piece-list snapshots, one pushed before every placement
    history: Vec<Vector<Piece>>,
    current: Stone,
    status: GameStatus,
    mode: GameMode,
    selected: Option<SkillKind>,
    pending: Option<PendingOp>,
    next_piece_id: u64,
    last_move: Option<Pos>,
    winning_line: Option<Vec<Pos>>,
    last_ai_result: Option<MoveResult>,
    ai: AIEngine,
    timings: Timings,
}

impl Session {
    /// New game with default timings and an entropy-seeded AI
    pub fn new(mode: GameMode) -> Self {
        Self::with_engine(mode, Timings::default(), AIEngine::new())
    }

    /// New game configured from an [`AppConfig`]
    pub fn with_config(mode: GameMode, config: &AppConfig) -> Self {
        let ai = match config.ai.seed {
            Some(seed) => AIEngine::with_seed(seed),
            None => AIEngine::new(),
        };
        Self::with_engine(mode, config.timings, ai)
    }

    pub fn with_engine(mode: GameMode, timings: Timings, ai: AIEngine) -> Self {
        Self {
            board: Board::new(),
            pieces: Vector::new(),
            history: Vec::new(),
            current: STARTING_PLAYER,
            status: GameStatus::Playing,
            mode,
            selected: None,
            pending: None,
            next_piece_id: 0,
            last_move: None,
            winning_line: None,
            last_ai_result: None,
            ai,
            timings,
        }
    }

    // ---- queries ----

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Live pieces in placement order
    pub fn pieces(&self) -> &Vector<Piece> {
        &self.pieces
    }

    pub fn piece_at(&self, pos: Pos) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.pos == pos)
    }

    pub fn current_player(&self) -> Stone {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Currently selected (armed) skill
    pub fn active_skill(&self) -> Option<SkillKind> {
        self.selected
    }

    /// An operation has begun and not yet been committed
    pub fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<PendingOp> {
        self.pending
    }

    /// How long the caller should wait before committing the pending operation
    pub fn pending_delay(&self) -> Option<Duration> {
        self.pending.map(|op| op.delay(&self.timings))
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Run of five or more that ended the game, if it was won on the board
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// The side to move is played by the computer
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::PvAI && self.current == AI_PLAYER
    }

    /// The driver should begin the AI turn now
    pub fn needs_ai_move(&self) -> bool {
        self.is_ai_turn()
            && self.status == GameStatus::Playing
            && self.pending.is_none()
            && self.selected != Some(SkillKind::Delete)
    }

    /// Whether `kind` could be selected right now
    pub fn can_use(&self, kind: SkillKind) -> bool {
        self.admit_human().is_ok() && self.skill_available(kind)
    }

    /// Board and piece list agree: every piece sits on a cell of its colour
    /// and no other cell is occupied.
    pub fn is_consistent(&self) -> bool {
        let rebuilt = Board::from_stones(self.pieces.iter().map(|p| (p.pos, p.stone)));
        rebuilt == self.board && rebuilt.stone_count() as usize == self.pieces.len()
    }

    // ---- commands ----

    /// Place a stone for the side to move at `(row, col)`.
    #[instrument(skip(self), fields(player = ?self.current))]
    pub fn place_move(&mut self, row: usize, col: usize) -> Result<Piece, GameError> {
        let pos = Pos::checked(row, col).ok_or(GameError::OutOfBounds { row, col })?;
        self.admit()?;
        if self.selected == Some(SkillKind::Delete) {
            return Err(GameError::RemovalArmed);
        }
        self.admit_human()?;
        self.apply_move(pos)
    }

    /// Arm `kind`, or disarm it if it is already selected.
    #[instrument(skip(self))]
    pub fn select_skill(&mut self, kind: SkillKind) -> Result<(), GameError> {
        self.admit_human()?;
        if self.selected == Some(kind) {
            debug!(?kind, "skill disarmed");
            self.selected = None;
            return Ok(());
        }
        if !self.skill_available(kind) {
            return Err(GameError::SkillUnavailable(kind));
        }
        debug!(?kind, "skill armed");
        self.selected = Some(kind);
        Ok(())
    }

    /// Begin removing the piece `piece_id` with the armed removal skill.
    #[instrument(skip(self))]
    pub fn trigger_skill_on_piece(&mut self, piece_id: u64) -> Result<(), GameError> {
        self.admit_human()?;
        if self.selected != Some(SkillKind::Delete) {
            return Err(GameError::NoSkillSelected);
        }
        let piece = self
            .pieces
            .iter_mut()
            .find(|p| p.id == piece_id)
            .ok_or(GameError::PieceNotFound(piece_id))?;
        piece.removing = true;
        debug!(piece_id, row = piece.pos.row, col = piece.pos.col, "removal begun");
        self.pending = Some(PendingOp::Remove { piece_id });
        Ok(())
    }

    /// Begin the selected session-wide skill (undo, clear or instant win).
    #[instrument(skip(self))]
    pub fn trigger_skill_session(&mut self) -> Result<(), GameError> {
        self.admit_human()?;
        let kind = self.selected.ok_or(GameError::NoSkillSelected)?;
        let op = match kind {
            SkillKind::Delete => return Err(GameError::NeedsTarget(kind)),
            SkillKind::Undo => {
                if self.history.is_empty() {
                    return Err(GameError::NothingToUndo);
                }
                PendingOp::Undo
            }
            SkillKind::Clear => {
                if self.pieces.is_empty() {
                    return Err(GameError::SkillUnavailable(kind));
                }
                for piece in self.pieces.iter_mut() {
                    piece.clearing = true;
                }
                PendingOp::Clear
            }
            SkillKind::InstantWin => PendingOp::InstantWin,
        };
        debug!(?op, "skill begun");
        self.pending = Some(op);
        Ok(())
    }

    /// Select and fire a skill in one step, the way a skill button does.
    ///
    /// The removal skill only arms (or disarms); it still needs a target.
    pub fn use_skill(&mut self, kind: SkillKind) -> Result<(), GameError> {
        if kind.needs_target() {
            return self.select_skill(kind);
        }
        let previous = self.selected;
        if previous != Some(kind) {
            self.select_skill(kind)?;
        }
        match self.trigger_skill_session() {
            Ok(()) => Ok(()),
            Err(err) => {
                self.selected = previous;
                Err(err)
            }
        }
    }

    /// Begin the computer's move. The move is chosen at commit time.
    #[instrument(skip(self))]
    pub fn begin_ai_turn(&mut self) -> Result<(), GameError> {
        self.admit()?;
        if !self.is_ai_turn() {
            return Err(GameError::NotYourTurn);
        }
        if self.selected == Some(SkillKind::Delete) {
            return Err(GameError::RemovalArmed);
        }
        self.pending = Some(PendingOp::AiMove);
        Ok(())
    }

    /// Apply the pending operation. Returns the operation that was committed.
    #[instrument(skip(self))]
    pub fn commit(&mut self) -> Result<PendingOp, GameError> {
        let op = self.pending.take().ok_or(GameError::NothingPending)?;
        match op {
            PendingOp::Remove { piece_id } => {
                self.commit_remove(piece_id);
                self.selected = None;
            }
            PendingOp::Undo => {
                self.commit_undo();
                self.selected = None;
            }
            PendingOp::Clear => {
                self.pieces.clear();
                self.board = Board::new();
                self.history.clear();
                self.last_move = None;
                self.selected = None;
                info!("board cleared");
            }
            PendingOp::InstantWin => {
                self.status = GameStatus::Won(self.current);
                self.winning_line = None;
                self.selected = None;
                info!(winner = ?self.current, "instant win");
            }
            PendingOp::AiMove => self.commit_ai_move(),
        }
        debug_assert!(self.is_consistent(), "board diverged from piece list");
        Ok(op)
    }

    /// Start over: empty board, Black to move, no history, nothing pending.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.pieces.clear();
        self.history.clear();
        self.current = STARTING_PLAYER;
        self.status = GameStatus::Playing;
        self.selected = None;
        self.pending = None;
        self.last_move = None;
        self.winning_line = None;
        self.last_ai_result = None;
        info!(mode = ?self.mode, "new game");
    }

    /// Switch mode and start a new game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    // ---- internals ----

    /// Common admission gate: game still running and nothing in flight.
    fn admit(&self) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if self.pending.is_some() {
            return Err(GameError::Busy);
        }
        Ok(())
    }

    /// Gate for commands only the human side may issue: in PvAI the AI's
    /// turn belongs to the AI.
    fn admit_human(&self) -> Result<(), GameError> {
        self.admit()?;
        if self.is_ai_turn() {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    fn skill_available(&self, kind: SkillKind) -> bool {
        match kind {
            SkillKind::Delete | SkillKind::Clear => !self.pieces.is_empty(),
            SkillKind::Undo => !self.history.is_empty(),
            SkillKind::InstantWin => true,
        }
    }

    /// Shared placement path for human and AI moves.
    fn apply_move(&mut self, pos: Pos) -> Result<Piece, GameError> {
        if self.selected == Some(SkillKind::Delete) {
            return Err(GameError::RemovalArmed);
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::CellOccupied(pos));
        }
        let color = self.current;

        self.history.push(self.pieces.clone());
        let piece = Piece::new(self.next_piece_id, pos, color);
        self.next_piece_id += 1;
        self.board.place_stone(pos, color);
        self.pieces.push_back(piece.clone());
        self.last_move = Some(pos);

        if check_win(&self.board, pos, color) {
            self.status = GameStatus::Won(color);
            self.winning_line = winning_line(&self.board, pos, color);
            info!(winner = ?color, row = pos.row, col = pos.col, "five in a row");
        } else if check_draw(&self.board) {
            self.status = GameStatus::Draw;
            info!("board full, draw");
        } else {
            self.current = color.opponent();
        }
        Ok(piece)
    }

    fn commit_remove(&mut self, piece_id: u64) {
        let Some(idx) = self.pieces.iter().position(|p| p.id == piece_id) else {
            warn!(piece_id, "piece vanished before removal commit");
            return;
        };
        let piece = self.pieces.remove(idx);
        self.board.remove_stone(piece.pos);
        if self.last_move == Some(piece.pos) {
            self.last_move = None;
        }
        info!(piece_id, row = piece.pos.row, col = piece.pos.col, "piece removed");
    }

    fn commit_undo(&mut self) {
        let Some(snapshot) = self.history.pop() else {
            warn!("undo committed with empty history");
            return;
        };
        self.board = Board::from_stones(snapshot.iter().map(|p| (p.pos, p.stone)));
        self.last_move = snapshot.back().map(|p| p.pos);
        self.pieces = snapshot;
        self.current = self.current.opponent();
        info!(pieces = self.pieces.len(), to_move = ?self.current, "move undone");
    }

    fn commit_ai_move(&mut self) {
        if self.status.is_over() || !self.is_ai_turn() {
            warn!("AI commit without an AI turn");
            return;
        }
        let result = self.ai.get_move_with_stats(&self.board, self.current);
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        match best_move {
            Some(pos) => {
                if let Err(err) = self.apply_move(pos) {
                    warn!(%err, "AI move rejected");
                }
            }
            None => warn!("AI found no move"),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
