//! Aggregation model: combine both sides' snapshot series into one
//! serializable report.

use crate::Result;
use crate::build::{self, TimelineEntry};
use crate::config::{Config, WorkerSet};
use crate::snapshot::SnapshotSeries;
use serde::Serialize;

/// One side of the comparison, ready for the renderer. Metric vectors are
/// index-aligned with `timestamps`; each side carries its own timestamps
/// since the two runs may differ in length.
#[derive(Debug, Clone, Serialize)]
pub struct SideView {
    pub label: String,
    pub color: String,
    pub timestamps: Vec<String>,
    pub minerals: Vec<u64>,
    pub gas: Vec<u64>,
    pub workers: Vec<u64>,
    pub supply: Vec<u64>,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub benchmark_entries: usize,
    pub benchmark_worker_entries: usize,
    pub own_entries: usize,
    pub own_worker_entries: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub benchmark: SideView,
    pub own: SideView,
    pub totals: TotalsView,
}

/// Build report data: diff each side independently (never against the
/// other), then summarize.
pub fn build_report_data(
    benchmark: &SnapshotSeries,
    own: &SnapshotSeries,
    cfg: &Config,
) -> Result<ReportData> {
    let workers = cfg.worker_set();

    let benchmark = side_view("Benchmark", &cfg.benchmark_color, benchmark, &workers)?;
    let own = side_view("Own", &cfg.own_color, own, &workers)?;

    let totals = TotalsView {
        benchmark_entries: benchmark.timeline.len(),
        benchmark_worker_entries: worker_entry_count(&benchmark.timeline),
        own_entries: own.timeline.len(),
        own_worker_entries: worker_entry_count(&own.timeline),
    };

    Ok(ReportData {
        benchmark,
        own,
        totals,
    })
}

fn side_view(
    label: &str,
    color: &str,
    series: &SnapshotSeries,
    workers: &WorkerSet,
) -> Result<SideView> {
    let timeline = build::compute_timeline(&series.timestamps, &series.snapshots, workers)?;

    Ok(SideView {
        label: label.to_string(),
        color: color.to_string(),
        timestamps: series.timestamps.clone(),
        minerals: series.minerals.clone(),
        gas: series.gas.clone(),
        workers: series.workers.clone(),
        supply: series.supply.clone(),
        timeline,
    })
}

fn worker_entry_count(timeline: &[TimelineEntry]) -> usize {
    timeline.iter().filter(|e| e.worker_only).count()
}
