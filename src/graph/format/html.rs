//! Standalone HTML page embedding the Mermaid ERD.

use crate::graph::collect::GraphData;
use crate::graph::format::mermaid;

/// Generate an HTML page that renders the diagram with Mermaid from a CDN
pub fn to_html(graph: &GraphData, title: &str) -> String {
    let mermaid_code = mermaid::to_mermaid(graph);

    let stats = format!(
        "{} models · {} columns · {} relationships",
        graph.node_count(),
        graph.column_count(),
        graph.edge_count()
    );

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <script src="https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.min.js"></script>
  <style>
    body {{
      font-family: -apple-system, BlinkMacSystemFont, sans-serif;
      margin: 0;
      padding: 16px;
      color: #1f2328;
    }}

    header {{
      display: flex;
      justify-content: space-between;
      align-items: baseline;
      border-bottom: 1px solid #d0d7de;
      margin-bottom: 16px;
    }}

    .stats {{
      color: #656d76;
      font-size: 13px;
    }}

    .mermaid svg {{
      max-width: none !important;
    }}
  </style>
</head>
<body>
  <header>
    <h1>{title}</h1>
    <span class="stats">{stats}</span>
  </header>
  <pre class="mermaid">
{mermaid_code}
  </pre>
  <script>
    mermaid.initialize({{
      startOnLoad: true,
      maxTextSize: 500000,
      er: {{ useMaxWidth: false }}
    }});
  </script>
</body>
</html>
"##,
        title = escape_html(title),
        stats = stats,
        mermaid_code = escape_html(&mermaid_code),
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
