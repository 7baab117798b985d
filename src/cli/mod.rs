//! CLI command handlers
//!
//! This module contains the interactive shell, bridging clap argument parsing
//! of each input line with the expense session.

pub mod commands;
pub mod shell;

pub use commands::{parse_line, ParsedLine, ShellCommand};
pub use shell::{LoopControl, Shell};
