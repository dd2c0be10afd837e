use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{CommandFactory, Parser};

use usbtint::cli::{Cli, ColorMode};
use usbtint::config::Config;
use usbtint::pipeline::format_line;

/// Pause between read retries when a followed input source runs dry.
const RETRY_INTERVAL: Duration = Duration::from_secs(1);

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when usbtint exits early.
    reset_sigpipe();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "usbtint", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("usbtint: {e}");
            return ExitCode::from(1);
        }
    };

    let dialect = config.dialect.dialect();
    let use_color = resolve_color_mode(config.color_mode);

    // A regular file on stdin gets tail -f treatment: end-of-file only means
    // the producer has not written more yet. Pipes and terminals signal a
    // definitive end of stream instead.
    let follow = stdin_is_regular_file();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();
    let mut raw = Vec::new();
    let mut line_buf = String::new();

    loop {
        raw.clear();
        match reader.read_until(b'\n', &mut raw) {
            Ok(0) => {
                if follow {
                    thread::sleep(RETRY_INTERVAL);
                    continue;
                }
                break;
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                eprintln!("usbtint: read error: {e}");
                return ExitCode::from(2);
            }
        }

        // Device logs arrive over serial links and are sometimes garbled;
        // decode best-effort instead of dropping undecodable lines.
        let line = String::from_utf8_lossy(&raw);

        line_buf.clear();
        format_line(&line, &dialect, use_color, &mut line_buf);

        // Dropped lines produce an empty buffer — skip them.
        if line_buf.is_empty() {
            continue;
        }

        // Flush after every line so the stream stays usable as a live tail.
        let written = writeln!(writer, "{line_buf}").and_then(|()| writer.flush());
        if let Err(e) = written {
            if e.kind() == io::ErrorKind::BrokenPipe {
                return ExitCode::SUCCESS;
            }
            eprintln!("usbtint: write error: {e}");
            return ExitCode::from(2);
        }
    }

    ExitCode::SUCCESS
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            let stdout = io::stdout();
            if !stdout.is_terminal() {
                return false;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()) {
                return true;
            }
            true
        }
    }
}

/// True when stdin is a regular file rather than a pipe or terminal.
#[cfg(unix)]
fn stdin_is_regular_file() -> bool {
    use std::os::fd::AsRawFd;

    let fd = io::stdin().as_raw_fd();
    let mut st = unsafe { std::mem::zeroed::<libc::stat>() };
    if unsafe { libc::fstat(fd, &mut st) } != 0 {
        return false;
    }
    st.st_mode & libc::S_IFMT == libc::S_IFREG
}

#[cfg(not(unix))]
fn stdin_is_regular_file() -> bool {
    false
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a CLI filter like `usbtint`, this causes the *upstream* writer (e.g.
/// a capture script) to receive a `BrokenPipeError` when `usbtint` exits.
/// Restoring `SIG_DFL` lets the OS handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
