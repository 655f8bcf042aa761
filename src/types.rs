//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Frame pacing for the driving loop (milliseconds)
pub const TICK_MS: u32 = 16;

/// Gravity curve: the interval starts at `BASE_DROP_MS` and loses
/// `DROP_STEP_MS` per level above 1, clamped at `DROP_FLOOR_MS`.
pub const BASE_DROP_MS: u32 = 500;
pub const DROP_STEP_MS: u32 = 40;
pub const DROP_FLOOR_MS: u32 = 50;

/// Row-clear flash: lit/unlit toggle count and toggle period.
pub const CLEAR_FLASH_TICKS: u8 = 6;
pub const CLEAR_FLASH_INTERVAL_MS: u32 = 60;

/// Line clear scoring, indexed by simultaneous-clear count (multiplied by level)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Game commands, all zero-argument; the session guards invalid calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    TogglePause,
    Restart,
}

/// Session phase.
///
/// `Paused` is reachable from `Falling` only. `Clearing` is the timed
/// row-flash sub-phase between lock and removal. `GameOver` is terminal
/// until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Ready,
    Falling,
    Clearing,
    Paused,
    GameOver,
}
