//! Library side of the `archlink` command-line tool.

pub mod logging;
pub mod pipeline;
pub mod report;
