//! orderwash CLI library: argument definitions, command implementations,
//! logging setup, and summary printing.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
