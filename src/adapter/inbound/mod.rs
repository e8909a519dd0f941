//! Inbound adapters: command line and deployment descriptors.

pub mod cli;
pub mod descriptor;
