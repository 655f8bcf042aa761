//! Blockfall: a terminal falling-block puzzle.
//!
//! The simulation core lives in [`core`] and is pure: it consumes discrete
//! [`types::GameAction`] commands and elapsed-time ticks, and exposes
//! snapshots for a renderer. The [`term`] and [`input`] modules are the
//! terminal presentation glue around it.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
