//! Build-order timeline: diff cumulative snapshots into discrete events.
//!
//! Each snapshot carries cumulative counts. The timeline is the sequence of
//! positive changes between consecutive snapshots: "what was built when".

use crate::Result;
use crate::config::WorkerSet;
use crate::snapshot::Snapshot;
use anyhow::bail;
use serde::Serialize;

/// One unit/building/upgrade change at a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildItem {
    pub name: String,
    pub delta: u64,
    /// True if `name` is a configured worker unit.
    pub worker: bool,
}

/// All changes observed at one timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub time: String,
    pub items: Vec<BuildItem>,
    /// True iff the entry holds a single item and that item is a worker
    /// unit. Such entries can be hidden wholesale, timestamp label included.
    pub worker_only: bool,
}

/// Diff an index-aligned snapshot sequence into timeline entries.
///
/// The first non-empty snapshot seeds the baseline and is never emitted: the
/// starting townhall and initial workers are not build events. Each later
/// snapshot is diffed against its immediate predecessor; a timestamp where
/// nothing changed produces no entry.
pub fn compute_timeline(
    timestamps: &[String],
    snapshots: &[Snapshot],
    workers: &WorkerSet,
) -> Result<Vec<TimelineEntry>> {
    if timestamps.len() != snapshots.len() {
        bail!(
            "timestamp/snapshot length mismatch: {} timestamps vs {} snapshots",
            timestamps.len(),
            snapshots.len()
        );
    }
    if snapshots.is_empty() {
        bail!("empty snapshot sequence");
    }

    // Bounded anchor scan: all-empty input yields an empty timeline.
    let anchor = match snapshots.iter().position(|s| !s.is_empty()) {
        Some(i) => i,
        None => return Ok(Vec::new()),
    };

    let mut out = Vec::new();
    let mut prev = &snapshots[anchor];

    for i in anchor + 1..snapshots.len() {
        let curr = &snapshots[i];
        let mut items = Vec::new();

        for (name, count) in curr.iter() {
            match prev.get(name) {
                // Known entry: only a positive delta is a build event.
                Some(before) => {
                    if count > before {
                        items.push(BuildItem {
                            name: name.to_string(),
                            delta: count - before,
                            worker: workers.contains(name),
                        });
                    }
                }
                // First appearance: emitted with the full count, even when
                // that count is 0. Matches the upstream behavior.
                None => items.push(BuildItem {
                    name: name.to_string(),
                    delta: count,
                    worker: workers.contains(name),
                }),
            }
        }

        if !items.is_empty() {
            let worker_only = items.len() == 1 && items[0].worker;
            out.push(TimelineEntry {
                time: timestamps[i].clone(),
                items,
                worker_only,
            });
        }

        // The reference always advances, entry emitted or not.
        prev = curr;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;

    fn workers() -> WorkerSet {
        Config::default().worker_set()
    }

    fn times(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn snap(pairs: &[(&str, u64)]) -> Snapshot {
        pairs.iter().map(|&(n, c)| (n, c)).collect()
    }

    #[test]
    fn anchor_is_seeded_not_emitted() {
        // Worked example: anchor at index 1; only index 2 diffs.
        let ts = times(&["0:00", "0:30", "1:00"]);
        let snaps = vec![snap(&[]), snap(&[("Probe", 1)]), snap(&[("Probe", 2), ("Pylon", 1)])];

        let timeline = compute_timeline(&ts, &snaps, &workers()).unwrap();

        assert_eq!(
            timeline,
            vec![TimelineEntry {
                time: "1:00".to_string(),
                items: vec![
                    BuildItem {
                        name: "Probe".to_string(),
                        delta: 1,
                        worker: true,
                    },
                    BuildItem {
                        name: "Pylon".to_string(),
                        delta: 1,
                        worker: false,
                    },
                ],
                worker_only: false,
            }]
        );
    }

    #[test]
    fn anchor_on_last_snapshot_yields_nothing() {
        let ts = times(&["0:00", "0:30", "1:00"]);
        let snaps = vec![snap(&[]), snap(&[]), snap(&[("Drone", 5)])];
        let timeline = compute_timeline(&ts, &snaps, &workers()).unwrap();
        assert_eq!(timeline, vec![]);
    }

    #[test]
    fn all_empty_snapshots_yield_nothing() {
        let ts = times(&["0:00", "0:30"]);
        let snaps = vec![snap(&[]), snap(&[])];
        let timeline = compute_timeline(&ts, &snaps, &workers()).unwrap();
        assert_eq!(timeline, vec![]);
    }

    #[test]
    fn unchanged_counts_emit_no_entry() {
        let ts = times(&["0:00", "0:30"]);
        let snaps = vec![snap(&[("Probe", 1)]), snap(&[("Probe", 1)])];
        let timeline = compute_timeline(&ts, &snaps, &workers()).unwrap();
        assert_eq!(timeline, vec![]);
    }

    #[test]
    fn first_appearance_is_included_even_at_zero() {
        let ts = times(&["0:00", "0:30"]);
        let snaps = vec![snap(&[("Nexus", 1)]), snap(&[("Nexus", 1), ("Pylon", 0)])];
        let timeline = compute_timeline(&ts, &snaps, &workers()).unwrap();

        assert_eq!(timeline.len(), 1);
        assert_eq!(
            timeline[0].items,
            vec![BuildItem {
                name: "Pylon".to_string(),
                delta: 0,
                worker: false,
            }]
        );
    }

    #[test]
    fn reference_advances_even_when_no_entry_is_emitted() {
        // Index 1 changes nothing; index 2 must diff against index 1, not 0.
        let ts = times(&["0:00", "0:30", "1:00"]);
        let snaps = vec![
            snap(&[("Probe", 1)]),
            snap(&[("Probe", 1)]),
            snap(&[("Probe", 3)]),
        ];
        let timeline = compute_timeline(&ts, &snaps, &workers()).unwrap();

        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].time, "1:00");
        assert_eq!(timeline[0].items[0].delta, 2);
    }

    #[test]
    fn single_worker_item_tags_the_whole_entry() {
        let ts = times(&["0:00", "0:30"]);
        let snaps = vec![snap(&[("SCV", 12)]), snap(&[("SCV", 13)])];
        let timeline = compute_timeline(&ts, &snaps, &workers()).unwrap();

        assert_eq!(timeline.len(), 1);
        assert!(timeline[0].worker_only);
        assert!(timeline[0].items[0].worker);
    }

    #[test]
    fn multi_item_entry_is_never_worker_only() {
        // Two worker kinds in one entry: each item is worker-tagged, but the
        // entry as a whole is not.
        let ts = times(&["0:00", "0:30"]);
        let snaps = vec![
            snap(&[("Probe", 1), ("Drone", 1)]),
            snap(&[("Probe", 2), ("Drone", 2)]),
        ];
        let timeline = compute_timeline(&ts, &snaps, &workers()).unwrap();

        assert_eq!(timeline.len(), 1);
        assert!(!timeline[0].worker_only);
        assert!(timeline[0].items.iter().all(|it| it.worker));
    }

    #[test]
    fn item_order_follows_snapshot_order() {
        let ts = times(&["0:00", "0:30"]);
        let snaps = vec![
            snap(&[("Zealot", 1)]),
            snap(&[("Zealot", 2), ("Gateway", 2), ("Adept", 1)]),
        ];
        let timeline = compute_timeline(&ts, &snaps, &workers()).unwrap();

        let names: Vec<&str> = timeline[0].items.iter().map(|it| it.name.as_str()).collect();
        assert_eq!(names, vec!["Zealot", "Gateway", "Adept"]);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let ts = times(&["0:00"]);
        let snaps = vec![snap(&[]), snap(&[])];
        let err = compute_timeline(&ts, &snaps, &workers()).unwrap_err();
        assert!(err.to_string().contains("length mismatch"), "{}", err);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let err = compute_timeline(&[], &[], &workers()).unwrap_err();
        assert!(err.to_string().contains("empty snapshot sequence"), "{}", err);
    }
}
