//! Core module - pure game logic with no external dependencies
//!
//! Game rules, state management, and timing. Zero dependencies on UI or
//! I/O; everything is deterministic given a seed and a stream of commands
//! and elapsed-time ticks.

pub mod board;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use pieces::{base_cells, rotated, try_rotate};
pub use rng::{PieceGen, SimpleRng};
pub use session::{GameSession, Piece};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
