//! Presentation driver for the GUI
//!
//! Owns the clock the session deliberately does not: it notes when a
//! deferred operation began, commits it once its delay has passed, and
//! starts the AI turn whenever the session asks for one. Input events are
//! routed here and translated into session commands.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::session::{GameMode, PendingOp, Session, SkillKind};
use crate::{GameError, Pos};

/// Session plus the timing state needed to drive it
pub struct GameState {
    pub session: Session,
    /// When the current pending operation began
    pending_since: Option<Instant>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            pending_since: None,
            message: None,
        }
    }

    /// Advance timers: commit a due operation, then begin the AI turn if
    /// one is owed.
    pub fn tick(&mut self, now: Instant) {
        self.track_pending(now);

        if let (Some(since), Some(delay)) = (self.pending_since, self.session.pending_delay()) {
            if now.saturating_duration_since(since) >= delay {
                self.pending_since = None;
                if let Err(err) = self.session.commit() {
                    self.reject(err);
                }
            }
        }

        if self.session.needs_ai_move() {
            if let Err(err) = self.session.begin_ai_turn() {
                self.reject(err);
            }
        }
        self.track_pending(now);
    }

    /// A click on the board: a piece pick while removal is armed,
    /// otherwise a placement.
    pub fn click_cell(&mut self, pos: Pos, now: Instant) {
        let result = if self.session.active_skill() == Some(SkillKind::Delete) {
            match self.session.piece_at(pos).map(|p| p.id) {
                Some(id) => self.session.trigger_skill_on_piece(id),
                // empty cell while armed: ignored, stays armed
                None => Ok(()),
            }
        } else {
            self.session
                .place_move(pos.row as usize, pos.col as usize)
                .map(|_| ())
        };
        self.finish(result, now);
    }

    /// A skill button press
    pub fn press_skill(&mut self, kind: SkillKind, now: Instant) {
        let result = self.session.use_skill(kind);
        self.finish(result, now);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.session.set_mode(mode);
        self.pending_since = None;
        self.message = None;
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.pending_since = None;
        self.message = None;
    }

    /// Fraction of the pending operation's delay that has elapsed (0.0..=1.0)
    pub fn pending_progress(&self, now: Instant) -> Option<(PendingOp, f32)> {
        let op = self.session.pending()?;
        let delay = self.session.pending_delay().unwrap_or(Duration::ZERO);
        let elapsed = self
            .pending_since
            .map_or(Duration::ZERO, |since| now.saturating_duration_since(since));
        let progress = if delay.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / delay.as_secs_f32()).min(1.0)
        };
        Some((op, progress))
    }

    /// AI move has begun and not yet landed
    pub fn is_ai_thinking(&self) -> bool {
        self.session.pending() == Some(PendingOp::AiMove)
    }

    /// Something is animating or waiting on the clock
    pub fn wants_repaint(&self) -> bool {
        self.session.is_processing() || self.session.needs_ai_move()
    }

    fn finish(&mut self, result: Result<(), GameError>, now: Instant) {
        match result {
            Ok(()) => self.message = None,
            Err(err) => self.reject(err),
        }
        self.track_pending(now);
    }

    fn reject(&mut self, err: GameError) {
        debug!(%err, "input ignored");
        self.message = Some(err.to_string());
    }

    fn track_pending(&mut self, now: Instant) {
        match (self.session.is_processing(), self.pending_since) {
            (true, None) => self.pending_since = Some(now),
            (false, Some(_)) => self.pending_since = None,
            _ => {}
        }
    }
}
