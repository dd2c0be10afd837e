//! Log dialect recognition, field extraction, and rendering.
//!
//! A [`Dialect`] is selected once at startup and held for the process
//! lifetime. Each variant supports the same four operations the pipeline
//! drives: [`matches`](Dialect::matches), [`extract`](Dialect::extract),
//! [`style_for`](Dialect::style_for), and [`render`](Dialect::render).
//!
//! Three families exist:
//! - the regex-based device-log family, parameterized by the fixed-width
//!   capture prefix it skips (beagle 50, igep 48, netconsole 15);
//! - the usbmon keyword family, classified by transfer-tag substrings;
//! - the proxy passthrough filter, which never colorizes.

use std::fmt::Write;

use regex::Regex;

use crate::palette::ColorSpec;
use crate::severity::Level;
use crate::styles::{self, StyleMatch};

/// Pattern for the bracketed device-log header: `[ lvl] MODULE message`.
const DEVICE_PATTERN: &str = r"^\[\s*(?P<lvl>\d+)\]\s+(?P<module>\S+)\s*(?P<log>.*)";

/// Well-formed bracketed lines are longer than this; the header sits at a
/// fixed column behind the capture prefix.
const BRACKET_MIN_LEN: usize = 53;

/// Keywords that admit known informational lines without a bracket header.
const FALLBACK_KEYWORDS: [&str; 2] = ["musb", "B64"];

/// Marker for the proxy passthrough filter.
const PROXY_MARKER: &str = "Proxy Gadget";

/// Structured fields pulled out of one matching line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fields<'a> {
    /// Bracket-header (or keyword-fallback) device-log fields.
    Device {
        level: Level,
        module: &'a str,
        message: &'a str,
    },
    /// usbmon line with the first transfer tag found in it.
    Tagged { tag: &'static str, line: &'a str },
    /// Proxy line passed through verbatim.
    Passthrough { line: &'a str },
}

/// A pluggable log-format recognizer/colorizer.
#[derive(Debug)]
pub enum Dialect {
    /// Bracket-header device log with a fixed capture prefix to skip.
    Device(DeviceLog),
    /// usbmon trace, recognized by transfer tags.
    UsbMon,
    /// Proxy gadget filter: passthrough, no coloring.
    Proxy,
}

impl Dialect {
    /// Default dialect: beagle capture board, 50-column prefix.
    pub fn beagle() -> Self {
        Self::Device(DeviceLog::new(50))
    }

    /// igep capture board, 48-column prefix.
    pub fn igep() -> Self {
        Self::Device(DeviceLog::new(48))
    }

    /// Kernel netconsole, 15-column timestamp prefix.
    pub fn netconsole() -> Self {
        Self::Device(DeviceLog::new(15))
    }

    pub fn usbmon() -> Self {
        Self::UsbMon
    }

    pub fn proxy() -> Self {
        Self::Proxy
    }

    /// Whether `line` belongs to this dialect's log format.
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Self::Device(dev) => dev.matches(line),
            Self::UsbMon => styles::usbmon_tag(line).is_some(),
            Self::Proxy => line.contains(PROXY_MARKER),
        }
    }

    /// Extract structured fields from a line that passed
    /// [`matches`](Self::matches). `None` drops the line.
    pub fn extract<'a>(&self, line: &'a str) -> Option<Fields<'a>> {
        match self {
            Self::Device(dev) => dev.extract(line),
            Self::UsbMon => styles::usbmon_tag(line).map(|(tag, _)| Fields::Tagged { tag, line }),
            Self::Proxy => Some(Fields::Passthrough { line }),
        }
    }

    /// Resolve the style for extracted fields, if any table matches.
    pub fn style_for(&self, fields: &Fields<'_>) -> Option<StyleMatch> {
        match fields {
            Fields::Device { level, module, .. } => styles::lookup(module, *level),
            Fields::Tagged { tag, .. } => styles::USBMON_STYLE
                .iter()
                .find(|(t, _)| t == tag)
                .map(|(_, spec)| StyleMatch::Exact(*spec)),
            Fields::Passthrough { .. } => None,
        }
    }

    /// Render `fields` with the resolved style, appending to `out`.
    ///
    /// Device-log lines render three ways: a master-table hit colorizes the
    /// message alone, a second-table hit colorizes `module message`, and a
    /// miss on both tables falls back to a plain bracketed line with the
    /// level right-justified to three columns.
    pub fn render(
        &self,
        fields: &Fields<'_>,
        style: Option<StyleMatch>,
        use_color: bool,
        out: &mut String,
    ) {
        match fields {
            Fields::Device {
                level,
                module,
                message,
            } => match style {
                Some(StyleMatch::Exact(spec)) => paint(spec, message, use_color, out),
                Some(StyleMatch::Level(spec)) => {
                    let text = format!("{module} {message}");
                    paint(spec, &text, use_color, out);
                }
                None => {
                    let _ = write!(out, "[{}] {module} {message}", level.badge());
                }
            },
            Fields::Tagged { line, .. } => {
                if let Some(StyleMatch::Exact(spec) | StyleMatch::Level(spec)) = style {
                    paint(spec, line, use_color, out);
                }
            }
            Fields::Passthrough { line } => out.push_str(line),
        }
    }
}

fn paint(spec: ColorSpec, text: &str, use_color: bool, out: &mut String) {
    if use_color {
        spec.paint_into(text, out);
    } else {
        out.push_str(text);
    }
}

/// The regex device-log family. `offset` is the width of the capture
/// hardware's prefix (timestamp, device path) in front of the header.
///
/// Stateless per line: one compiled pattern and one constant offset.
#[derive(Debug)]
pub struct DeviceLog {
    offset: usize,
    pattern: Regex,
}

impl DeviceLog {
    fn new(offset: usize) -> Self {
        // The pattern is a compile-time constant; a failure here is a bug.
        let pattern = Regex::new(DEVICE_PATTERN).expect("device log pattern compiles");
        Self { offset, pattern }
    }

    /// A line belongs if the bracketed header sits at the expected column,
    /// or if it carries one of the fallback keywords anywhere.
    fn matches(&self, line: &str) -> bool {
        let bytes = line.as_bytes();
        let bracketed = line.len() > BRACKET_MIN_LEN
            && bytes.get(self.offset) == Some(&b'[')
            && bytes.get(self.offset + 4) == Some(&b']');
        bracketed || FALLBACK_KEYWORDS.iter().any(|kw| line.contains(kw))
    }

    fn extract<'a>(&self, line: &'a str) -> Option<Fields<'a>> {
        // An offset landing past the end (or inside a garbled multibyte
        // sequence) leaves an empty remainder rather than refusing the line.
        let rest = line.get(self.offset..).unwrap_or("");
        if let Some(fields) = self.extract_bracketed(rest) {
            return Some(fields);
        }
        // Keyword fallback: known informational lines without a header pass
        // through with the sentinel level and the remainder as the message.
        // Note the keywords must appear in the remainder, not just the line,
        // so a short keyword line that classified still drops here.
        if FALLBACK_KEYWORDS.iter().any(|kw| rest.contains(kw)) {
            return Some(Fields::Device {
                level: Level::Musb,
                module: "MUSB",
                message: rest,
            });
        }
        None
    }

    fn extract_bracketed<'a>(&self, rest: &'a str) -> Option<Fields<'a>> {
        let caps = self.pattern.captures(rest)?;
        // A digit run that overflows u32 is treated like a malformed header.
        let level = Level::Code(caps["lvl"].parse().ok()?);
        Some(Fields::Device {
            level,
            module: caps.name("module")?.as_str(),
            message: caps.name("log")?.as_str(),
        })
    }
}
