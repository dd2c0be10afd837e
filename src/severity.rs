//! Severity codes carried in the bracketed `[lvl]` log header.
//!
//! The firmware encodes severity as small hex codes. They are not linearly
//! ordered — a higher numeric value does not mean a higher severity — so the
//! style tables key on exact codes rather than comparing them. Lines admitted
//! only by the `musb`/`B64` fallback keywords carry no header at all; those
//! get the non-numeric [`Level::Musb`] sentinel instead of a code.

use std::fmt;

/// A log line's severity: a numeric firmware code or the fallback sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Numeric code parsed from the `[lvl]` header.
    Code(u32),
    /// Sentinel for keyword-matched lines without a header.
    Musb,
}

impl Level {
    pub const DBG: Self = Self::Code(0x0f);
    pub const DBG1: Self = Self::Code(0x0e);
    pub const DBG2: Self = Self::Code(0x0d);
    pub const INFO: Self = Self::Code(0x10);
    pub const NOTICE: Self = Self::Code(0x20);
    pub const WRN: Self = Self::Code(0x30);
    pub const ERR: Self = Self::Code(0x40);
    pub const ASSERT: Self = Self::Code(0xff);
    pub const SPEC: Self = Self::Code(0xfe);

    /// Display form for the plain `[lvl]` rendering, right-justified to
    /// three columns. The sentinel prints as `musb` and overflows the field.
    pub fn badge(&self) -> String {
        match self {
            Self::Code(n) => format!("{n:>3}"),
            Self::Musb => "musb".to_string(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(n) => write!(f, "{n}"),
            Self::Musb => f.write_str("musb"),
        }
    }
}
