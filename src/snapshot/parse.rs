use crate::Result;
use crate::diagnostics;
use crate::snapshot::series::{Snapshot, SnapshotSeries};
use anyhow::{Context, bail};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;

/// Parse a snapshot log file into an index-aligned series.
///
/// Expected columns (whitespace-separated):
/// time  minerals  gas  workers  supply  [Name=Count ...]
///
/// Example:
/// 0:30   335   0   13   14   Probe=13 Pylon=1 Nexus=1
///
/// A row with no Name=Count pairs is a valid, empty snapshot. Lines starting
/// with '#' and a column-header line are skipped.
pub fn parse_snapshot_file(path: &str) -> Result<SnapshotSeries> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read snapshot log {}", path))?;
    parse_snapshot_text(path, &text)
}

pub fn parse_snapshot_text(path: &str, text: &str) -> Result<SnapshotSeries> {
    // Capture:
    // 1) time label (any non-space token, e.g. "0:30")
    // 2-5) minerals, gas, workers, supply: non-negative integers
    // 6) rest of line: zero or more Name=Count pairs
    let re = Regex::new(r"^\s*(\S+)\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)\s*(.*?)\s*$")?;

    let mut out = SnapshotSeries::default();
    let mut seen_times: BTreeSet<String> = BTreeSet::new();

    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        let line = line.trim_end();

        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        // Skip header line if present.
        if line.contains("time") && line.contains("minerals") && line.contains("supply") {
            continue;
        }

        let caps = match re.captures(line) {
            Some(c) => c,
            None => {
                bail!(
                    "{}",
                    diagnostics::error_message(format!(
                        "snapshot log parse error at {}:{}: cannot parse line: {:?}",
                        path, lno, line
                    ))
                );
            }
        };

        let time = caps.get(1).unwrap().as_str().to_string();
        let minerals: u64 = caps.get(2).unwrap().as_str().parse()?;
        let gas: u64 = caps.get(3).unwrap().as_str().parse()?;
        let workers: u64 = caps.get(4).unwrap().as_str().parse()?;
        let supply: u64 = caps.get(5).unwrap().as_str().parse()?;

        if !seen_times.insert(time.clone()) {
            bail!(
                "{}",
                diagnostics::error_message(format!(
                    "duplicate timestamp {:?} at {}:{}",
                    time, path, lno
                ))
            );
        }

        let snap = parse_pairs(caps.get(6).unwrap().as_str())
            .with_context(|| format!("bad entry pair at {}:{}", path, lno))?;

        // Counts are cumulative totals; a decrease means the exporter is
        // feeding us non-cumulative data. Warn, do not abort.
        if let Some(prev) = out.snapshots.last() {
            for (name, count) in snap.iter() {
                if let Some(before) = prev.get(name) {
                    if count < before {
                        diagnostics::warn(format!(
                            "{}:{}: count for {:?} decreased from {} to {} (snapshots are cumulative)",
                            path, lno, name, before, count
                        ));
                    }
                }
            }
        }

        out.timestamps.push(time);
        out.minerals.push(minerals);
        out.gas.push(gas);
        out.workers.push(workers);
        out.supply.push(supply);
        out.snapshots.push(snap);
    }

    if out.is_empty() {
        bail!(
            "{}",
            diagnostics::error_message(format!("snapshot log {} contained no rows", path))
        );
    }

    Ok(out)
}

/// Parse "Probe=13 Pylon=1" into an ordered snapshot.
fn parse_pairs(s: &str) -> Result<Snapshot> {
    let mut snap = Snapshot::new();
    for token in s.split_whitespace() {
        let (name, count) = match token.split_once('=') {
            Some((n, c)) if !n.is_empty() => (n, c),
            _ => bail!("entry pair must be Name=Count: {:?}", token),
        };
        let count: u64 = count
            .parse()
            .with_context(|| format!("bad count in entry pair {:?}", token))?;
        if snap.get(name).is_some() {
            bail!("duplicate entry name in row: {:?}", name);
        }
        snap.push(name.to_string(), count);
    }
    Ok(snap)
}
