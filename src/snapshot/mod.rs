//! Per-side snapshot logs: cumulative progression samples over a game.

pub mod parse;
pub mod series;

pub use parse::parse_snapshot_file;
pub use series::{Snapshot, SnapshotSeries};
