//! Pieces module - shape tables and formula-based rotation
//!
//! Every shape is 4 cells inside a 4x4 box, anchored at its top-left.
//! Rotation is a single 90-degree turn around the bounding-box center of
//! the *current* cell set, not a per-shape orientation table. The formula
//! is only visually correct for these 7 layouts; it is not a general
//! rotation system. Failed rotations fall back to a short ladder of
//! horizontal wall kicks and are otherwise dropped without error.

use crate::types::PieceKind;

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// A piece's cell set - 4 offsets from the anchor
pub type PieceCells = [CellOffset; 4];

/// Spawn anchor column, centered for a 4-wide box.
///
/// Every shape spawns here regardless of its true width, so narrower
/// shapes sit slightly left of visual center. Kept for compatibility.
pub const SPAWN_X: i8 = (crate::types::BOARD_WIDTH as i8 - 4) / 2;

/// Horizontal kick offsets tried after a rotation, in priority order
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// All piece kinds, in spawn-table order
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
];

/// Base (spawn orientation) cell set for a piece kind
pub fn base_cells(kind: PieceKind) -> PieceCells {
    match kind {
        PieceKind::I => [(0, 0), (1, 0), (2, 0), (3, 0)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::T => [(0, 0), (1, 0), (2, 0), (1, 1)],
        PieceKind::S => [(1, 0), (2, 0), (0, 1), (1, 1)],
        PieceKind::Z => [(0, 0), (1, 0), (1, 1), (2, 1)],
        PieceKind::J => [(0, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::L => [(2, 0), (0, 1), (1, 1), (2, 1)],
    }
}

/// Rotate a cell set 90 degrees clockwise around its bounding-box center.
///
/// With (cx, cy) = (max_x / 2, max_y / 2), each cell maps to
/// (cx + cy - y, cy - cx + x) rounded to the nearest integer, halves up.
/// Computed in doubled coordinates so the half-cell center needs no
/// floating point.
pub fn rotated(cells: &PieceCells) -> PieceCells {
    let max_x = cells.iter().map(|c| c.0).max().unwrap_or(0) as i16;
    let max_y = cells.iter().map(|c| c.1).max().unwrap_or(0) as i16;

    let mut out = [(0i8, 0i8); 4];
    for (i, &(x, y)) in cells.iter().enumerate() {
        let nx2 = max_x + max_y - 2 * y as i16;
        let ny2 = max_y - max_x + 2 * x as i16;
        out[i] = (round_half_up(nx2), round_half_up(ny2));
    }
    out
}

/// Round a doubled coordinate to the nearest integer, halves toward +inf
#[inline]
fn round_half_up(doubled: i16) -> i8 {
    (doubled + 1).div_euclid(2) as i8
}

/// Try to rotate a piece at anchor (x, y), kicking horizontally on failure.
///
/// `is_open` reports whether a board position can host a cell. Returns the
/// rotated cell set and the committed kick offset, or None when every kick
/// fails (the caller leaves the piece untouched).
pub fn try_rotate(
    cells: &PieceCells,
    x: i8,
    y: i8,
    is_open: impl Fn(i8, i8) -> bool,
) -> Option<(PieceCells, i8)> {
    let turned = rotated(cells);

    for &kick in KICK_OFFSETS.iter() {
        let nx = x + kick;
        let fits = turned.iter().all(|&(cx, cy)| is_open(nx + cx, y + cy));
        if fits {
            return Some((turned, kick));
        }
    }

    None
}
