//! Game session: turn order, skills, and the two-phase operations that
//! drive them.
//!
//! A [`Session`] owns the board, the ordered piece list, and the undo
//! history. Placements apply immediately. Skill effects and the AI move are
//! deferred: a command *begins* the operation (recorded as a [`PendingOp`]),
//! and the caller invokes [`Session::commit`] once the operation's delay has
//! elapsed. While an operation is pending every other command is refused.

mod session;


use std::time::Duration;

use crate::board::{Pos, Stone};
use crate::config::Timings;

pub use session::Session;

/// Side that moves first after every reset
pub const STARTING_PLAYER: Stone = Stone::Black;

/// Side the computer plays in [`GameMode::PvAI`]
pub const AI_PLAYER: Stone = Stone::White;

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won(Stone),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Playing
    }
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Two humans on one board
    PvP,
    /// Human plays Black, the AI plays White
    #[default]
    PvAI,
}

/// The four one-shot skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillKind {
    /// 飞沙走石: remove one piece of your choice
    Delete,
    /// 时光倒流: take back the last placement
    Undo,
    /// 保洁上门: wipe the board and the undo history
    Clear,
    /// 力拔山兮: win on the spot
    InstantWin,
}

impl SkillKind {
    pub const ALL: [SkillKind; 4] = [
        SkillKind::Delete,
        SkillKind::Undo,
        SkillKind::Clear,
        SkillKind::InstantWin,
    ];

    /// Whether the skill fires on a chosen piece rather than on the session
    #[inline]
    pub fn needs_target(self) -> bool {
        self == SkillKind::Delete
    }
}

/// A stone on the board together with its identity and transient
/// presentation flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Unique for the lifetime of the session, never reused
    pub id: u64,
    pub pos: Pos,
    pub stone: Stone,
    /// Picked by the removal skill, waiting for commit
    pub removing: bool,
    /// Swept by the clear skill, waiting for commit
    pub clearing: bool,
}

impl Piece {
    fn new(id: u64, pos: Pos, stone: Stone) -> Self {
        Self {
            id,
            pos,
            stone,
            removing: false,
            clearing: false,
        }
    }
}

/// Deferred operation waiting for [`Session::commit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOp {
    Remove { piece_id: u64 },
    Undo,
    Clear,
    InstantWin,
    AiMove,
}

impl PendingOp {
    /// Presentation delay before the commit may run
    pub fn delay(self, timings: &Timings) -> Duration {
        match self {
            PendingOp::Remove { .. } => timings.remove(),
            PendingOp::Undo => timings.undo(),
            PendingOp::Clear => timings.clear(),
            PendingOp::InstantWin => timings.instant_win(),
            PendingOp::AiMove => timings.ai_move(),
        }
    }
}
