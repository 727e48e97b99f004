//! Terminal Width Probe Tests

use pda::layout::{resolve_terminal_width, TerminalSink, TerminalWidth, DEFAULT_TERMINAL_WIDTH};

// =============================================================================
// Resolution Order Tests
// =============================================================================

#[test]
fn test_sink_width_wins() {
    assert_eq!(resolve_terminal_width(Some(120), Some(80), Some("60")), 120);
}

#[test]
fn test_stdout_before_environment() {
    assert_eq!(resolve_terminal_width(None, Some(80), Some("60")), 80);
}

#[test]
fn test_columns_environment() {
    assert_eq!(resolve_terminal_width(None, None, Some("60")), 60);
    assert_eq!(resolve_terminal_width(None, None, Some(" 72 ")), 72);
}

#[test]
fn test_unusable_sources_fall_through() {
    assert_eq!(resolve_terminal_width(Some(0), Some(0), Some("wide")), DEFAULT_TERMINAL_WIDTH);
    assert_eq!(resolve_terminal_width(None, None, Some("0")), DEFAULT_TERMINAL_WIDTH);
    assert_eq!(resolve_terminal_width(None, None, Some("-5")), DEFAULT_TERMINAL_WIDTH);
}

#[test]
fn test_default_when_nothing_known() {
    assert_eq!(resolve_terminal_width(None, None, None), 100);
}

// =============================================================================
// Sink Tests
// =============================================================================

#[test]
fn test_buffers_are_not_terminals() {
    let buf: Vec<u8> = Vec::new();
    assert_eq!(buf.terminal_width(), None);
    assert!(!TerminalSink::is_terminal(&buf));
}

#[test]
fn test_fixed_width_skips_probe() {
    let buf: Vec<u8> = Vec::new();
    assert_eq!(TerminalWidth::Fixed(42).resolve(&buf), 42);
}
