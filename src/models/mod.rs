//! Data models for keypads, knight moves and cost-bucketed transitions.
//!
//! Models are immutable once built and carry no I/O or CLI concerns.

pub mod count_matrix;
pub mod grouped_moves;
pub mod keypad;
pub mod move_graph;
pub mod transition_family;

// Re-export all model types
pub use count_matrix::{ArithmeticOverflow, CountMatrix};
pub use grouped_moves::GroupedMoves;
pub use keypad::{Key, Keypad, KeypadError, Position};
pub use move_graph::{CostModel, KeypadGraph, Move, KNIGHT_OFFSETS};
pub use transition_family::TransitionFamily;
