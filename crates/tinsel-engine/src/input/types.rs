use std::fmt;

use crate::coords::Vec2;

/// Stable identifier of one contact for the duration of its down-to-up gesture.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PointerId(pub u64);

impl PointerId {
    /// Id used for mouse-driven gestures. Touch ids reported by hosts are small
    /// counters, so the top of the range stays free.
    pub const MOUSE: PointerId = PointerId(u64::MAX);
}

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == PointerId::MOUSE {
            f.write_str("mouse")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MotionKind {
    Down,
    Move,
    Up,
}

/// A queued pointer event, in screen space.
///
/// `delta` is zero for `Down` and `Up`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PendingMotionEvent {
    pub kind: MotionKind,
    pub pointer: PointerId,
    pub pos: Vec2,
    pub delta: Vec2,
}

impl Default for PendingMotionEvent {
    fn default() -> Self {
        Self {
            kind: MotionKind::Move,
            pointer: PointerId(0),
            pos: Vec2::ZERO,
            delta: Vec2::ZERO,
        }
    }
}

/// What a multi-touch batch reports beyond the pointer positions.
///
/// `Down`/`Up` carry the index (into [`TouchBatch::pointers`]) of the pointer
/// that changed state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchAction {
    Down { index: usize },
    Move,
    Up { index: usize },
    /// The gesture was aborted by the host; every pointer in the batch ends.
    Cancel,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchPoint {
    pub id: PointerId,
    pub pos: Vec2,
}

impl TouchPoint {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id: PointerId(id), pos: Vec2::new(x, y) }
    }
}

/// One host touch report: the positions of all active pointers, in scan order,
/// plus the state change that triggered it.
#[derive(Debug, Copy, Clone)]
pub struct TouchBatch<'a> {
    pub action: TouchAction,
    pub pointers: &'a [TouchPoint],
}

/// Keyboard key identifier.
///
/// Only keys the engine itself cares about are named; everything else arrives as
/// `Character` (printable) or `Unknown` with the host's scancode.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    /// Platform "back" navigation. Never consumed by the engine.
    Back,
    Escape,
    Enter,
    Space,
    Tab,
    Backspace,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Printable key, lowercase.
    Character(char),
    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Character(c) => write!(f, "'{c}'"),
            other => write!(f, "{other:?}"),
        }
    }
}
