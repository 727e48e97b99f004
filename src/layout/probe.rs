//! Terminal width probe.
//!
//! Sources, in priority order:
//! 1. the output sink's own terminal
//! 2. the process's standard output
//! 3. the `COLUMNS` environment variable, when it parses to a positive integer
//! 4. `DEFAULT_TERMINAL_WIDTH`
//!
//! A failing source is skipped, never reported.

use std::env;
use std::io::{self, IsTerminal, Write};

/// Width assumed when nothing else is known
pub const DEFAULT_TERMINAL_WIDTH: usize = 100;

/// Environment-style explicit width override
pub const COLUMNS_ENV: &str = "COLUMNS";

/// An output sink that may be attached to a terminal
pub trait TerminalSink: Write {
    fn terminal_width(&self) -> Option<usize> {
        None
    }

    fn is_terminal(&self) -> bool {
        false
    }
}

impl TerminalSink for io::Stdout {
    fn terminal_width(&self) -> Option<usize> {
        terminal_size::terminal_size_of(self).map(|(w, _)| w.0 as usize)
    }

    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl TerminalSink for Vec<u8> {}

/// Where the render width comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalWidth {
    /// Probe the sink, stdout and the environment
    #[default]
    Detect,
    /// Use this width as is
    Fixed(usize),
}

impl TerminalWidth {
    pub fn resolve<S: TerminalSink + ?Sized>(self, sink: &S) -> usize {
        match self {
            TerminalWidth::Fixed(width) if width > 0 => width,
            _ => detect_terminal_width(sink),
        }
    }
}

/// Gets the current width of standard output, or None if not a terminal.
pub fn stdout_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

/// Probe every width source for `sink`
pub fn detect_terminal_width<S: TerminalSink + ?Sized>(sink: &S) -> usize {
    let columns = env::var(COLUMNS_ENV).ok();
    resolve_terminal_width(sink.terminal_width(), stdout_width(), columns.as_deref())
}

/// Pick the first usable width from already-queried sources
pub fn resolve_terminal_width(
    sink: Option<usize>,
    stdout: Option<usize>,
    columns_env: Option<&str>,
) -> usize {
    sink.filter(|w| *w > 0)
        .or_else(|| stdout.filter(|w| *w > 0))
        .or_else(|| {
            columns_env
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|w| *w > 0)
        })
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}
