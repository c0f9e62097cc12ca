//! Console commands
//!
//! Parses the commands and answers typed into the interactive console.

pub mod parser;

pub use parser::{Command, parse_command, parse_flag};
