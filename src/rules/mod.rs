//! Game rules: five-in-a-row wins, a full board draws.

pub mod win;

pub use win::{check_draw, check_win, winning_line, DIRECTIONS};
