//! Library components of the amico command line tool.

pub mod clock;
pub mod commands;
pub mod logging;
pub mod report;
