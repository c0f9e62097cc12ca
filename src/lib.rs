pub mod auth;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod flows;
pub mod presentation;
pub mod storage;

pub use console::Console;
