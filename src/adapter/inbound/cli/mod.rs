//! CLI module graph.

pub mod check;
pub mod command;
pub mod deploy;
pub mod operator;
pub mod output;
