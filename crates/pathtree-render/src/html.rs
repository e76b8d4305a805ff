//! Static HTML viewer page.
//!
//! The page does not render the graph itself. It shows an image produced separately by Graphviz
//! (`dot -Tpng query_plan.dot -o query_plan.png`) inside a fixed-size scrollable viewport, next to
//! a sidebar listing the plan levels.

use crate::Result;
use crate::graph::PathGraph;
use crate::options::HtmlOptions;

pub fn write_html(graph: &PathGraph<'_>, options: &HtmlOptions) -> Result<String> {
    let levels_json = serde_json::to_string(&graph.level_numbers())?;
    let title = htmlize::escape_text(options.title.as_str());
    let image = htmlize::escape_attribute(options.image_file.as_str());

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ margin: 0; display: flex; font-family: sans-serif; }}
  #sidebar {{ width: 160px; padding: 12px; border-right: 1px solid #ccc; }}
  #sidebar ul {{ list-style: none; padding: 0; margin: 0; }}
  #sidebar li {{ padding: 2px 0; }}
  #viewport {{ width: {width}px; height: {height}px; overflow: auto; }}
</style>
</head>
<body>
<nav id="sidebar">
  <h3>Levels</h3>
  <ul id="levels"></ul>
</nav>
<div id="viewport">
  <img src="{image}" alt="{title}">
</div>
<script>
  const levels = {levels_json};
  const list = document.getElementById("levels");
  for (const level of levels) {{
    const item = document.createElement("li");
    item.textContent = "Level " + level;
    list.appendChild(item);
  }}
</script>
</body>
</html>
"#,
        width = options.viewport_width,
        height = options.viewport_height,
    ))
}
