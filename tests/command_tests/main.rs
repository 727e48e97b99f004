//! Command test suite
//!
//! Every command runs end-to-end against a temporary data directory, with
//! buffers standing in for stdin, stdout and stderr.

mod format_tests;

use std::io::{self, Write};

use clap::Parser;
use pda::commands::{Command, Session};
use pda::config::WalSyncStrategy;
use pda::layout::{TerminalSink, TerminalWidth};
use pda::{Config, Result, Store};
use tempfile::TempDir;

// =============================================================================
// Shared Helpers
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "pda")]
struct TestCli {
    #[command(subcommand)]
    command: Command,
}

/// A sink that claims to be a terminal of a fixed width
#[derive(Default)]
pub struct FakeTty {
    pub buf: Vec<u8>,
    pub width: usize,
}

impl Write for FakeTty {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.write(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl TerminalSink for FakeTty {
    fn terminal_width(&self) -> Option<usize> {
        Some(self.width)
    }

    fn is_terminal(&self) -> bool {
        true
    }
}

/// Captured result of one command
pub struct Output {
    pub result: Result<()>,
    pub out: Vec<u8>,
    pub err: String,
}

impl Output {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    pub fn error(&self) -> String {
        match &self.result {
            Ok(()) => panic!("command succeeded"),
            Err(e) => e.to_string(),
        }
    }
}

pub struct Harness {
    _temp: TempDir,
    pub store: Store,
    pub width: TerminalWidth,
}

impl Harness {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let config = Config::builder()
            .data_dir(temp.path().join("stores"))
            .wal_sync_strategy(WalSyncStrategy::EveryWrite)
            .build();
        Self {
            _temp: temp,
            store: Store::new(config),
            width: TerminalWidth::Fixed(80),
        }
    }

    fn parse(args: &[&str]) -> Command {
        let argv = std::iter::once("pda").chain(args.iter().copied());
        TestCli::try_parse_from(argv).unwrap().command
    }

    /// Run with a plain buffer as stdout
    pub fn run(&self, args: &[&str], input: &str) -> Output {
        let mut out: Vec<u8> = Vec::new();
        let (result, err) = self.run_with(args, input, &mut out);
        Output { result, out, err }
    }

    /// Run with a fake terminal as stdout
    pub fn run_tty(&self, args: &[&str], input: &str, tty: &mut FakeTty) -> Output {
        let (result, err) = self.run_with(args, input, tty);
        Output {
            result,
            out: tty.buf.clone(),
            err,
        }
    }

    /// Run and assert success, returning stdout
    pub fn ok(&self, args: &[&str]) -> String {
        let output = self.run(args, "");
        if let Err(e) = &output.result {
            panic!("{:?} failed: {}", args, e);
        }
        output.stdout()
    }

    fn run_with(&self, args: &[&str], input: &str, out: &mut dyn TerminalSink) -> (Result<()>, String) {
        let command = Self::parse(args);
        let mut input = input.as_bytes();
        let mut err: Vec<u8> = Vec::new();

        let mut session = Session {
            store: &self.store,
            input: &mut input,
            out,
            err: &mut err,
            width: self.width,
        };
        let result = command.run(&mut session);
        (result, String::from_utf8_lossy(&err).into_owned())
    }
}
