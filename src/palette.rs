//! 256-color escape encoding for the style tables.
//!
//! A [`ColorSpec`] is either a bare xterm palette index or an index paired
//! with a display modifier (bold). Encoding wraps text in a
//! foreground-set/reset pair; a modifier gets its own escape in front of the
//! color escape and its own reset at the end, so the emitted bytes match what
//! the capture tooling's terminals already expect.

use std::fmt::Write;

/// Palette indices used by the style tables, picked for legibility on dark
/// terminals.
pub mod color {
    pub const BLACK: u8 = 0;
    pub const RED: u8 = 160;
    pub const GREEN: u8 = 28;
    pub const YELLOW: u8 = 220;
    pub const BLUE: u8 = 12;
    pub const PURPLE: u8 = 126;
    pub const CYAN: u8 = 45;
    pub const GREY: u8 = 239;
    pub const ORANGE: u8 = 214;
}

/// Display modifier emitted in front of the color escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Modifier {
    Normal = 0,
    Bold = 1,
}

/// A foreground color choice from the style tables.
///
/// Immutable value type; produced only by the tables in
/// [`styles`](crate::styles).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    /// Bare palette index (0–255).
    Plain(u8),
    /// Palette index plus a display modifier.
    Styled(u8, Modifier),
}

impl ColorSpec {
    /// Wrap `text` in the escape sequences selecting this color.
    ///
    /// The styled form emits the modifier escape first, then the color
    /// escape, then the text, then one reset per escape.
    pub fn paint(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 24);
        self.paint_into(text, &mut out);
        out
    }

    /// Same as [`paint`](Self::paint) but appends to an existing buffer.
    pub fn paint_into(&self, text: &str, out: &mut String) {
        match *self {
            Self::Plain(c) => {
                let _ = write!(out, "\x1b[38;5;{c}m{text}\x1b[0m");
            }
            Self::Styled(c, modifier) => {
                let _ = write!(
                    out,
                    "\x1b[{}m\x1b[38;5;{c}m{text}\x1b[0m\x1b[0m",
                    modifier as u8
                );
            }
        }
    }
}
