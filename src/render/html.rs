use crate::dataset::{Slot, display_rows};
use crate::diff::{DiffEntry, Field};
use crate::session::Session;
use serde::Serialize;

/// One table row with its highlight flags already decided by the diff.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub key: String,
    pub consumed: String,
    pub received: String,
    pub highlight_consumed: bool,
    pub highlight_received: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub x_rows: Vec<ReportRow>,
    pub y_rows: Vec<ReportRow>,
    pub entries: Vec<DiffEntry>,
}

/// Shape the session's datasets and last diff into renderable rows. Cells
/// are flagged through the diff's highlight predicate, so rows present only
/// in project Y are never flagged.
pub fn build_report_data(session: &Session) -> ReportData {
    let report = session.last_diff();

    let rows_for = |slot: Slot| -> Vec<ReportRow> {
        display_rows(session.dataset(slot))
            .into_iter()
            .map(|row| ReportRow {
                highlight_consumed: report.highlight(&row.key, slot, Field::Consumed),
                highlight_received: report.highlight(&row.key, slot, Field::Received),
                key: row.key,
                consumed: row.consumed,
                received: row.received,
            })
            .collect()
    };

    ReportData {
        x_rows: rows_for(Slot::X),
        y_rows: rows_for(Slot::Y),
        entries: report.entries().to_vec(),
    }
}

/// Render a self-contained HTML report (data embedded as JSON).
///
/// Important: we avoid `format!()` because the HTML contains many `{}` from JS
/// template literals (e.g., `${x}`), which would conflict with Rust formatting.
pub fn render_html_report(data: &ReportData) -> anyhow::Result<String> {
    let json = serde_json::to_string(data)?; // embedded as JS object literal

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Dataset Comparator</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  .container { display: flex; gap: 16px; padding: 12px 16px; align-items: flex-start; flex-wrap: wrap; }
  .panel { flex: 1; min-width: 320px; }

  .summary { display: flex; gap: 16px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }

  table { border-collapse: collapse; width: 100%; margin-top: 8px; }
  th, td { border-bottom: 1px solid #eee; padding: 6px 8px; text-align: left; font-size: 14px; }
  th { position: sticky; top: 0; background: white; border-bottom: 1px solid #ddd; }
  td.hl { background: #fde8e8; }
  .muted { color: #777; font-size: 12px; }
  code { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; font-size: 13px; }
</style>
</head>
<body>
<header>
  <div class="summary" id="summary"></div>
</header>

<div class="container">
  <div class="panel">
    <h2>Project X</h2>
    <table>
      <thead><tr><th>key</th><th>consumed</th><th>received</th></tr></thead>
      <tbody id="xBody"></tbody>
    </table>
  </div>

  <div class="panel">
    <h2>Project Y</h2>
    <table>
      <thead><tr><th>key</th><th>consumed</th><th>received</th></tr></thead>
      <tbody id="yBody"></tbody>
    </table>
  </div>
</div>

<div class="container">
  <div class="panel">
    <h2>Differences</h2>
    <div class="muted">Records present only in Project Y are not compared.</div>
    <table id="diffTable">
      <thead>
        <tr>
          <th>key</th>
          <th>X consumed</th><th>Y consumed</th>
          <th>X received</th><th>Y received</th>
        </tr>
      </thead>
      <tbody id="diffBody"></tbody>
    </table>
  </div>
</div>

<script>
// Embedded report data (JSON object literal)
const DATA = __DATA__;

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

function renderSummary() {
  const el = document.getElementById("summary");
  el.innerHTML = `
    <span class="pill">records in X: <b>${DATA.x_rows.length}</b></span>
    <span class="pill">records in Y: <b>${DATA.y_rows.length}</b></span>
    <span class="pill">differences: <b>${DATA.entries.length}</b></span>
  `;
}

function renderRows(rows, bodyId) {
  const body = document.getElementById(bodyId);
  body.innerHTML = "";
  for (const row of rows) {
    const tr = document.createElement("tr");
    tr.innerHTML = `
      <td><code>${escapeHtml(row.key)}</code></td>
      <td class="${row.highlight_consumed ? "hl" : ""}">${escapeHtml(row.consumed)}</td>
      <td class="${row.highlight_received ? "hl" : ""}">${escapeHtml(row.received)}</td>
    `;
    body.appendChild(tr);
  }
}

function renderDiff() {
  const body = document.getElementById("diffBody");
  body.innerHTML = "";
  for (const e of DATA.entries) {
    const tr = document.createElement("tr");
    tr.innerHTML = `
      <td><code>${escapeHtml(e.key)}</code></td>
      <td>${escapeHtml(e.x_consumed)}</td>
      <td>${escapeHtml(e.y_consumed)}</td>
      <td>${escapeHtml(e.x_received)}</td>
      <td>${escapeHtml(e.y_received)}</td>
    `;
    body.appendChild(tr);
  }
  if (DATA.entries.length === 0) {
    document.getElementById("diffTable").style.display = "none";
  }
}

renderSummary();
renderRows(DATA.x_rows, "xBody");
renderRows(DATA.y_rows, "yBody");
renderDiff();
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}
