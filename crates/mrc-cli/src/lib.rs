//! Library side of the `mr-classifier` command: logging, label input and
//! output rendering.

pub mod input;
pub mod logging;
pub mod report;
