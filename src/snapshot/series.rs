/// Cumulative entry counts (units, buildings, upgrades) observed at or
/// before one timestamp.
///
/// Counts are kept as ordered pairs, not a map: item order inside a rendered
/// build block must follow the order the log wrote the entries, and that
/// contract should not hang off any map's iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    counts: Vec<(String, u64)>,
}

impl Snapshot {
    pub fn new() -> Snapshot {
        Snapshot { counts: Vec::new() }
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.counts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
    }

    /// Appends a pair; the caller is responsible for rejecting duplicates.
    pub fn push(&mut self, name: String, count: u64) {
        self.counts.push((name, count));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(n, c)| (n.as_str(), *c))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Snapshot {
        Snapshot {
            counts: iter.into_iter().map(|(n, c)| (n.into(), c)).collect(),
        }
    }
}

/// One side's full progression. All vectors are index-aligned: row i of the
/// log produced `timestamps[i]`, the four metric values at i, and
/// `snapshots[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotSeries {
    pub timestamps: Vec<String>,
    pub minerals: Vec<u64>,
    pub gas: Vec<u64>,
    pub workers: Vec<u64>,
    pub supply: Vec<u64>,
    pub snapshots: Vec<Snapshot>,
}

impl SnapshotSeries {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
