//! Contains building blocks of CLI commands.

pub mod config;
pub mod output;
