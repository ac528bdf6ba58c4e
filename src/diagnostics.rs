//! Stderr diagnostics shared by parsing and aggregation.

use std::fmt::Display;

pub fn warn(msg: impl Display) {
    eprintln!("warning: {}", msg);
}

pub fn error_message(msg: impl Display) -> String {
    format!("error: {}", msg)
}
