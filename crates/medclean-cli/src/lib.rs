//! Library components of the `medclean` command-line tool.

pub mod commands;
pub mod logging;
pub mod types;
