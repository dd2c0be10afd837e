//! Per-line processing: trim, classify, extract, style, render.

use crate::dialect::Dialect;

/// Process one raw input line and append the rendered output to `out`.
///
/// An empty `out` means the line was dropped. Every stage may drop:
/// classification, extraction, and style resolution all legitimately produce
/// no output for lines outside the selected dialect. This is the dominant
/// path on a busy console and is a filter, not an error.
pub fn format_line(line: &str, dialect: &Dialect, use_color: bool, out: &mut String) {
    // Only trailing whitespace is stripped: the device-log family locates
    // its header at a fixed column, so leading columns must survive.
    let line = line.trim_end();
    if !dialect.matches(line) {
        return;
    }
    let Some(fields) = dialect.extract(line) else {
        return;
    };
    let style = dialect.style_for(&fields);
    dialect.render(&fields, style, use_color, out);
}
