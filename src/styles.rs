//! Style tables mapping parsed fields to colors.
//!
//! Device-log lookup is two-tier: the master table keys on the exact
//! `(module, level)` pair and is consulted first; the second table keys on
//! level alone and catches everything the master table misses. Which tier hit
//! decides the render shape, so lookups return a [`StyleMatch`] rather than a
//! bare color. All tables are fixed at compile time.

use crate::palette::{ColorSpec, Modifier, color};
use crate::severity::Level;

/// Exact `(module, level)` styles.
pub const MASTER_STYLE: &[((&str, Level), ColorSpec)] = &[
    (("GADGET", Level::DBG), ColorSpec::Plain(color::GREEN)),
    (("DRIVER", Level::DBG), ColorSpec::Plain(color::BLUE)),
    (
        ("GADGET", Level::INFO),
        ColorSpec::Styled(color::GREEN, Modifier::Bold),
    ),
    (
        ("DRIVER", Level::INFO),
        ColorSpec::Styled(color::BLUE, Modifier::Bold),
    ),
];

/// Level-only styles, consulted when the master table misses.
pub const SECOND_STYLE: &[(Level, ColorSpec)] = &[
    (Level::ASSERT, ColorSpec::Styled(color::RED, Modifier::Bold)),
    (Level::SPEC, ColorSpec::Styled(color::ORANGE, Modifier::Bold)),
    (Level::ERR, ColorSpec::Styled(color::RED, Modifier::Bold)),
    (Level::WRN, ColorSpec::Plain(color::RED)),
    (Level::INFO, ColorSpec::Plain(color::YELLOW)),
    (Level::Musb, ColorSpec::Plain(color::PURPLE)),
];

/// usbmon transfer tags. A line can contain several tags, so the first tag
/// found in this order wins — the order is part of the output contract.
pub const USBMON_STYLE: &[(&str, ColorSpec)] = &[
    ("Ci", ColorSpec::Plain(color::RED)),
    ("Co", ColorSpec::Plain(color::PURPLE)),
    ("Ii", ColorSpec::Plain(color::BLUE)),
    ("Io", ColorSpec::Plain(color::CYAN)),
    ("Bi", ColorSpec::Plain(color::GREEN)),
    ("Bo", ColorSpec::Plain(color::YELLOW)),
    ("Zi", ColorSpec::Plain(47)),
    ("Zo", ColorSpec::Plain(172)),
];

/// Which tier a device-log style lookup resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMatch {
    /// Master-table hit: colorize the message alone.
    Exact(ColorSpec),
    /// Second-table hit: colorize `module message`.
    Level(ColorSpec),
}

/// Two-tier style lookup for a parsed `(module, level)` pair.
pub fn lookup(module: &str, level: Level) -> Option<StyleMatch> {
    MASTER_STYLE
        .iter()
        .find(|((m, l), _)| *m == module && *l == level)
        .map(|(_, spec)| StyleMatch::Exact(*spec))
        .or_else(|| {
            SECOND_STYLE
                .iter()
                .find(|(l, _)| *l == level)
                .map(|(_, spec)| StyleMatch::Level(*spec))
        })
}

/// First usbmon tag contained in `line`, with its color.
pub fn usbmon_tag(line: &str) -> Option<(&'static str, ColorSpec)> {
    USBMON_STYLE
        .iter()
        .find(|(tag, _)| line.contains(tag))
        .map(|(tag, spec)| (*tag, *spec))
}
