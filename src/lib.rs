//! `usbtint` — Colorize embedded USB debug logs from stdin.
//!
//! This library provides the core classification and rendering functionality
//! for the `usbtint` CLI tool. It recognizes several log dialects (capture
//! board device logs, usbmon traces, netconsole output, proxy gadget lines),
//! extracts module and severity fields from matching lines, and rewrites
//! them with 256-color terminal escapes chosen from fixed style tables.
//! Lines outside the selected dialect are dropped so the stream stays a
//! readable live tail.
//!
//! # Example
//!
//! ```
//! use usbtint::{Dialect, format_line};
//!
//! let dialect = Dialect::netconsole();
//! let mut out = String::new();
//!
//! let line = "[ 1234.567890] [ 64] OTHER device reset after port enumeration";
//! format_line(line, &dialect, false, &mut out);
//! assert_eq!(out, "OTHER device reset after port enumeration");
//! ```

pub mod cli;
pub mod config;
pub mod dialect;
pub mod error;
pub mod palette;
pub mod pipeline;
pub mod severity;
pub mod styles;

// Re-export primary API types for convenience.
pub use config::{Config, DialectKind};
pub use dialect::{Dialect, Fields};
pub use error::TintError;
pub use palette::{ColorSpec, Modifier};
pub use pipeline::format_line;
pub use severity::Level;
pub use styles::StyleMatch;
