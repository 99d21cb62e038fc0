//! Lock-free state cells for single-writer/multi-reader agent fields.
//!
//! # Why atomics and not a mutex
//!
//! Each cell is written by exactly one task and read by any number of
//! others.  A reader must never observe a torn value — in particular a
//! position whose row was updated but whose column was not, which would
//! place the agent in a cell it never occupied.  Packing the pair into one
//! `AtomicU64` makes every position update indivisible; Release on the
//! writer and Acquire on readers orders each load after the store it
//! observes.  Readers never block the writer and the writer never blocks
//! readers, which is exactly the "no task ever stalls another" requirement
//! of the scheduling model.

use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};

use pursuit_core::{Direction, Position, PursuerMode};

// ── PositionCell ──────────────────────────────────────────────────────────────

/// An atomically replaceable `(row, col)` pair.
///
/// Row and column are packed as two `u32` bit patterns into one `u64`, so a
/// load always yields a pair the writer actually stored.
#[derive(Debug)]
pub struct PositionCell(AtomicU64);

impl PositionCell {
    pub fn new(pos: Position) -> Self {
        Self(AtomicU64::new(pack(pos)))
    }

    #[inline]
    pub fn load(&self) -> Position {
        unpack(self.0.load(Ordering::Acquire))
    }

    /// Writer-side only: the owning task replaces the whole pair at once.
    #[inline]
    pub fn store(&self, pos: Position) {
        self.0.store(pack(pos), Ordering::Release);
    }
}

#[inline]
fn pack(pos: Position) -> u64 {
    ((pos.row as u32 as u64) << 32) | (pos.col as u32 as u64)
}

#[inline]
fn unpack(bits: u64) -> Position {
    Position::new((bits >> 32) as u32 as i32, bits as u32 as i32)
}

// ── DirectionCell ─────────────────────────────────────────────────────────────

/// An atomically replaceable [`Direction`].
#[derive(Debug)]
pub struct DirectionCell(AtomicU8);

impl DirectionCell {
    pub fn new(dir: Direction) -> Self {
        Self(AtomicU8::new(dir_to_u8(dir)))
    }

    #[inline]
    pub fn load(&self) -> Direction {
        dir_from_u8(self.0.load(Ordering::Acquire))
    }

    #[inline]
    pub fn store(&self, dir: Direction) {
        self.0.store(dir_to_u8(dir), Ordering::Release);
    }
}

fn dir_to_u8(dir: Direction) -> u8 {
    match dir {
        Direction::None => 0,
        Direction::Up => 1,
        Direction::Down => 2,
        Direction::Left => 3,
        Direction::Right => 4,
    }
}

fn dir_from_u8(bits: u8) -> Direction {
    match bits {
        1 => Direction::Up,
        2 => Direction::Down,
        3 => Direction::Left,
        4 => Direction::Right,
        _ => Direction::None,
    }
}

// ── ModeCell ──────────────────────────────────────────────────────────────────

/// An atomically replaceable [`PursuerMode`].
///
/// Written only by the pursuit coordinator; presentation reads it to pick
/// the sprite variant.
#[derive(Debug)]
pub struct ModeCell(AtomicU8);

impl ModeCell {
    pub fn new(mode: PursuerMode) -> Self {
        Self(AtomicU8::new(mode_to_u8(mode)))
    }

    #[inline]
    pub fn load(&self) -> PursuerMode {
        mode_from_u8(self.0.load(Ordering::Acquire))
    }

    #[inline]
    pub fn store(&self, mode: PursuerMode) {
        self.0.store(mode_to_u8(mode), Ordering::Release);
    }
}

fn mode_to_u8(mode: PursuerMode) -> u8 {
    match mode {
        PursuerMode::Chase => 0,
        PursuerMode::Scatter => 1,
        PursuerMode::Frightened => 2,
        PursuerMode::Eaten => 3,
    }
}

fn mode_from_u8(bits: u8) -> PursuerMode {
    match bits {
        0 => PursuerMode::Chase,
        2 => PursuerMode::Frightened,
        3 => PursuerMode::Eaten,
        _ => PursuerMode::Scatter,
    }
}

// ── FrameCell ─────────────────────────────────────────────────────────────────

/// A wrapping animation-frame counter.
///
/// `advance` is writer-side only; presentation polls `load` to pick the
/// sprite frame.
#[derive(Debug)]
pub struct FrameCell {
    frame: AtomicU8,
    count: u8,
}

impl FrameCell {
    /// `count` is the number of frames in the agent's animation cycle and
    /// must be at least 1.
    pub fn new(count: u8) -> Self {
        Self {
            frame: AtomicU8::new(0),
            count: count.max(1),
        }
    }

    #[inline]
    pub fn load(&self) -> u8 {
        self.frame.load(Ordering::Acquire)
    }

    /// Step to the next frame, wrapping at the cycle length.
    pub fn advance(&self) {
        let next = (self.frame.load(Ordering::Acquire) + 1) % self.count;
        self.frame.store(next, Ordering::Release);
    }
}
