//! CLI library components for the SUGEN format adapters.

pub mod cli;
pub mod commands;
pub mod logging;
