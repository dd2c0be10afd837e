//! Command-line argument definitions for `usbtint`.
//!
//! Uses [`clap`] derive macros for argument parsing. The dialect flags are
//! mutually exclusive; with none given the default beagle device-log dialect
//! is used.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

/// Colorize embedded USB debug logs from stdin.
///
/// Reads capture-board, usbmon, netconsole, or proxy gadget log lines from
/// stdin and rewrites matching lines with 256-color escapes keyed on module
/// and severity. Lines outside the selected dialect are dropped.
#[derive(Debug, Parser)]
#[command(name = "usbtint", version, about, long_about = None)]
pub struct Cli {
    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Show only proxy gadget lines, uncolored.
    #[arg(long, group = "dialect")]
    pub proxy: bool,

    /// Colorize usbmon traces by transfer tag.
    #[arg(long, group = "dialect")]
    pub usbmon: bool,

    /// Parse logs captured on an igep board (48-column prefix).
    #[arg(long, group = "dialect")]
    pub igep: bool,

    /// Colorize netconsole output (15-column timestamp prefix).
    #[arg(long, group = "dialect")]
    pub netconsole: bool,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Generate shell completions and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}
