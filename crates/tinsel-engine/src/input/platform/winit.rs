use winit::dpi::PhysicalPosition;
use winit::event::{KeyEvent, Touch, TouchPhase};
use winit::keyboard::{Key as WinitKey, NamedKey, PhysicalKey};

use crate::coords::Vec2;
use crate::input::{Key, MotionKind, PointerId};

/// Maps a winit touch report to a single queued pointer event.
///
/// winit delivers one report per contact, so a cancelled contact is reported as
/// a plain `Up`. Positions stay in physical pixels (screen space).
pub fn translate_touch(touch: &Touch) -> (MotionKind, PointerId, Vec2) {
    let kind = match touch.phase {
        TouchPhase::Started => MotionKind::Down,
        TouchPhase::Moved => MotionKind::Move,
        TouchPhase::Ended | TouchPhase::Cancelled => MotionKind::Up,
    };
    (kind, PointerId(touch.id), to_screen(touch.location))
}

#[inline]
pub fn to_screen(pos: PhysicalPosition<f64>) -> Vec2 {
    Vec2::new(pos.x as f32, pos.y as f32)
}

/// Maps a winit key event to an engine key.
///
/// The logical key is preferred so layouts map printable keys correctly; keys
/// with no logical meaning fall back to the physical scancode.
pub fn translate_key(event: &KeyEvent) -> Key {
    match &event.logical_key {
        WinitKey::Named(named) => match named {
            NamedKey::BrowserBack | NamedKey::GoBack => Key::Back,
            NamedKey::Escape => Key::Escape,
            NamedKey::Enter => Key::Enter,
            NamedKey::Space => Key::Space,
            NamedKey::Tab => Key::Tab,
            NamedKey::Backspace => Key::Backspace,
            NamedKey::ArrowUp => Key::ArrowUp,
            NamedKey::ArrowDown => Key::ArrowDown,
            NamedKey::ArrowLeft => Key::ArrowLeft,
            NamedKey::ArrowRight => Key::ArrowRight,
            _ => physical_fallback(event.physical_key),
        },
        WinitKey::Character(text) => match text.chars().next() {
            Some(' ') => Key::Space,
            Some(c) => Key::Character(c.to_ascii_lowercase()),
            None => physical_fallback(event.physical_key),
        },
        _ => physical_fallback(event.physical_key),
    }
}

fn physical_fallback(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => Key::Unknown(code as u32),
        // NativeKeyCode carries no stable numeric.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}
