use crate::model::ReportData;
use crate::palette::{BACKGROUND, HEADER_TEXT};

/// Render a self-contained HTML page (data embedded as JSON).
///
/// Placeholders are substituted with `str::replace` rather than `format!()`
/// because the CSS and JS bodies are full of `{}`.
pub fn render_html_report(data: &ReportData) -> anyhow::Result<String> {
    // "</" inside a string would close the <script> element early.
    let json = serde_json::to_string(data)?.replace("</", "<\\/");

    const TEMPLATE: &str = r##"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Items</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; background: __BACKGROUND__; color: #000; }
  header { padding: 16px; position: sticky; top: 0; background: __BACKGROUND__; }
  h1 { margin: 0; font-size: 32px; }
  .summary { font-size: 13px; color: #555; margin-top: 4px; }
  main { padding: 0 16px 24px; max-width: 720px; }

  section { margin-top: 20px; }
  section h2 { font-size: 22px; margin: 0 0 6px 4px; color: __HEADER_TEXT__; }
  .rows { border-radius: 10px; overflow: hidden; }
  .row { display: flex; justify-content: space-between; padding: 10px 14px; border-bottom: 1px solid rgba(0,0,0,0.06); }
  .row:last-child { border-bottom: none; }
  .row.sub { font-weight: 600; font-size: 14px; }
  .num { font-variant-numeric: tabular-nums; }
  .empty { color: #777; padding: 12px 0; }
</style>
</head>
<body>
<header>
  <h1>Items</h1>
  <div class="summary" id="summary"></div>
</header>
<main id="list"></main>

<script>
const DATA = __DATA__;

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

// "#RRGGBB" at 50% alpha.
function tint(hex) {
  const n = parseInt(hex.slice(1), 16);
  return `rgba(${(n >> 16) & 255}, ${(n >> 8) & 255}, ${n & 255}, 0.5)`;
}

function render() {
  const t = DATA.totals;
  document.getElementById("summary").textContent = `${t.groups} lists, ${t.items} items`;

  const root = document.getElementById("list");
  if (!DATA.groups.length) {
    root.innerHTML = `<div class="empty">No items.</div>`;
    return;
  }

  for (const g of DATA.groups) {
    const bg = tint(g.color);
    const rows = g.rows.map(r => `
      <div class="row" style="background:${bg}">
        <span>${escapeHtml(r.name)}</span><span class="num">${r.id}</span>
      </div>`).join("");

    const section = document.createElement("section");
    section.innerHTML = `
      <h2>List ID ${g.list_id}</h2>
      <div class="rows">
        <div class="row sub" style="background:${bg}"><span>Name</span><span>ID</span></div>
        ${rows}
      </div>`;
    root.appendChild(section);
  }
}

render();
</script>
</body>
</html>
"##;

    Ok(TEMPLATE
        .replace("__BACKGROUND__", &BACKGROUND.hex())
        .replace("__HEADER_TEXT__", &HEADER_TEXT.hex())
        .replace("__DATA__", &json))
}
