//! Skill Gomoku
//!
//! Freestyle Gomoku on a 13x13 board where each side may also spend
//! skills that bend the rules:
//! - 飞沙走石 removes any single piece
//! - 时光倒流 takes back the last placement
//! - 保洁上门 wipes the board and the undo history
//! - 力拔山兮 wins on the spot
//!
//! Five or more in a row wins. A full board with no winner is a draw.
//!
//! # Architecture
//!
//! - [`board`]: bitboard grid and coordinates
//! - [`rules`]: win and draw detection
//! - [`eval`]: line-shape scoring of candidate cells
//! - [`engine`]: one-ply heuristic AI with seeded tie-breaks
//! - [`session`]: turn order, skills and the two-phase deferred operations
//! - [`config`]: timing and AI settings loaded from TOML
//! - [`ui`]: egui front end that drives a session in real time
//!
//! # Quick Start
//!
//! ```
//! use skill_gomoku::{GameMode, GameStatus, Session, SkillKind, Stone};
//!
//! let mut session = Session::new(GameMode::PvP);
//! session.place_move(6, 6).unwrap();
//!
//! // White has had enough
//! session.use_skill(SkillKind::InstantWin).unwrap();
//! assert!(session.is_processing());
//!
//! // The driver commits once the skill's delay has elapsed
//! session.commit().unwrap();
//! assert_eq!(session.status(), GameStatus::Won(Stone::White));
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod session;
pub mod ui;

pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::AppConfig;
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, GameError};
pub use session::{GameMode, GameStatus, PendingOp, Piece, Session, SkillKind};
