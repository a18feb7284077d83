//! GUI front end
//!
//! A native egui/eframe window that drives a [`crate::Session`] in real
//! time. The session never sleeps; [`GameState`] owns the clock and
//! commits deferred operations once their delay has passed.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::SkillGomokuApp;
pub use game_state::GameState;
