use crate::model::ReportData;

/// Render a self-contained HTML report (data embedded as JSON).
///
/// Important: we avoid `format!()` because the HTML contains many `{}` from
/// JS template literals (e.g., `${x}`), which would conflict with Rust
/// formatting.
pub fn render_html_report(data: &ReportData) -> anyhow::Result<String> {
    let json = serde_json::to_string(data)?; // embedded as JS object literal

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Build Comparison</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; display: flex; align-items: center; gap: 24px; }
  .summary { display: flex; gap: 16px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }
  .controls { margin-left: auto; font-size: 14px; }

  .charts { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; padding: 16px; }
  .chart { border: 1px solid #eee; border-radius: 8px; padding: 8px; }
  .chart h3 { margin: 0 0 4px 0; font-size: 14px; font-weight: 600; }
  .legend { font-size: 12px; color: #666; display: flex; gap: 12px; }
  .swatch { display: inline-block; width: 10px; height: 10px; border-radius: 2px; margin-right: 4px; }

  .builds { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; padding: 0 16px 16px; }
  .buildColumn h2 { font-size: 16px; margin: 8px 0; }
  .timestamp { display: flex; font-size: 12px; color: #777; margin-top: 6px; }
  .buildBlock { display: flex; flex-direction: column; gap: 2px; padding: 4px 8px; border-left: 3px solid #ddd; font-size: 14px; }
  .buildBlock > div { display: flex; }
</style>
</head>
<body>
<header>
  <div class="summary" id="summary"></div>
  <label class="controls">
    <input type="checkbox" id="showWorkers"> Show worker production
  </label>
</header>

<div class="charts" id="charts"></div>

<div class="builds">
  <div class="buildColumn">
    <h2 id="benchmarkTitle"></h2>
    <div id="benchmarkBuild"></div>
  </div>
  <div class="buildColumn">
    <h2 id="ownTitle"></h2>
    <div id="ownBuild"></div>
  </div>
</div>

<script>
// Embedded report data (JSON object literal)
const DATA = __DATA__;

const workerClass = "worker";

function renderSummary() {
  const t = DATA.totals;
  const el = document.getElementById("summary");
  el.innerHTML = `
    <span class="pill">benchmark entries: <b>${t.benchmark_entries}</b></span>
    <span class="pill">benchmark worker entries: <b>${t.benchmark_worker_entries}</b></span>
    <span class="pill">own entries: <b>${t.own_entries}</b></span>
    <span class="pill">own worker entries: <b>${t.own_worker_entries}</b></span>
  `;
}

// One polyline per side, each scaled over its own sample count so runs of
// different length stay comparable by game progress.
function polyline(values, maxY, color, w, h) {
  if (!values.length) return "";
  const pts = values.map((v, i) => {
    const x = values.length === 1 ? 0 : (i / (values.length - 1)) * w;
    const y = h - (maxY ? (v / maxY) * h : 0);
    return `${x.toFixed(1)},${y.toFixed(1)}`;
  });
  return `<polyline fill="none" stroke="${color}" stroke-width="2" points="${pts.join(" ")}"/>`;
}

function renderChart(title, benchValues, ownValues) {
  const w = 420, h = 140;
  const maxY = Math.max(1, ...benchValues, ...ownValues);

  const div = document.createElement("div");
  div.className = "chart";
  div.innerHTML = `
    <h3>${title}</h3>
    <div class="legend">
      <span><span class="swatch" style="background:${DATA.benchmark.color}"></span>${DATA.benchmark.label}</span>
      <span><span class="swatch" style="background:${DATA.own.color}"></span>${DATA.own.label}</span>
    </div>
    <svg viewBox="0 0 ${w} ${h}" width="100%" height="${h}">
      ${polyline(benchValues, maxY, DATA.benchmark.color, w, h)}
      ${polyline(ownValues, maxY, DATA.own.color, w, h)}
    </svg>
  `;
  document.getElementById("charts").appendChild(div);
}

function renderCharts() {
  renderChart("Mineral Rate", DATA.benchmark.minerals, DATA.own.minerals);
  renderChart("Gas Rate", DATA.benchmark.gas, DATA.own.gas);
  renderChart("Workers Created", DATA.benchmark.workers, DATA.own.workers);
  renderChart("Supply", DATA.benchmark.supply, DATA.own.supply);
}

function renderTimeline(target, side) {
  target.innerText = "";

  for (const entry of side.timeline) {
    const timestampElement = document.createElement("div");
    timestampElement.classList.add("timestamp");
    timestampElement.innerText = entry.time;

    const buildBlock = document.createElement("div");
    buildBlock.classList.add("buildBlock");

    for (const item of entry.items) {
      const buildElement = document.createElement("div");
      buildElement.innerText = item.name + ": " + item.delta;
      if (item.worker) buildElement.classList.add(workerClass);
      buildBlock.appendChild(buildElement);
    }

    if (entry.worker_only) {
      buildBlock.classList.add(workerClass);
      timestampElement.classList.add(workerClass);
    }

    target.appendChild(timestampElement);
    target.appendChild(buildBlock);
  }
}

// Show workers if checked, else hide them. Hidden by default.
function applyWorkerVisibility() {
  const show = document.getElementById("showWorkers").checked;
  for (const el of document.getElementsByClassName(workerClass)) {
    el.style.display = show ? "flex" : "none";
  }
}

document.getElementById("showWorkers").addEventListener("change", applyWorkerVisibility);

renderSummary();
renderCharts();
document.getElementById("benchmarkTitle").textContent = DATA.benchmark.label + " build";
document.getElementById("ownTitle").textContent = DATA.own.label + " build";
renderTimeline(document.getElementById("benchmarkBuild"), DATA.benchmark);
renderTimeline(document.getElementById("ownBuild"), DATA.own);
applyWorkerVisibility();
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}
