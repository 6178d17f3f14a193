//! Pointpath CLI library.
//!
//! This crate provides the command-line front end for the pointpath library:
//! log initialisation, output formats and the subcommand handlers.

pub mod commands;
pub mod logging;
pub mod output;
