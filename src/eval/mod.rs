//! Evaluation module for candidate moves
//!
//! Scores an empty cell by the line shapes a stone there would join:
//! - Run length through the cell in each of the four directions
//! - Number of ends blocked by the edge or an opposing stone

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_position, line_shape};
pub use patterns::{LineShape, PatternScore};
