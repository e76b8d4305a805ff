#![forbid(unsafe_code)]

//! Renders planner path trees as Graphviz DOT, with an optional static HTML viewer page.
//!
//! ```no_run
//! let records = pathtree_core::read_records("paths.tsv")?;
//! let rendered = pathtree_render::render(&records, &Default::default(), true)?;
//! std::fs::write("query_plan.dot", &rendered.dot)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod dot;
pub mod error;
pub mod graph;
pub mod html;
pub mod label;
pub mod options;

pub use error::{Error, Result};
pub use graph::{Edge, PathGraph, collect_edges, collect_levels, collect_nodes};
pub use options::{DuplicateNames, HtmlOptions, LevelGrouping, RenderOptions};

use pathtree_core::PathRecord;

#[derive(Debug, Clone)]
pub struct Rendered {
    pub dot: String,
    pub html: Option<String>,
}

pub fn render_dot(records: &[PathRecord], options: &RenderOptions) -> Result<String> {
    let graph = PathGraph::from_records(records, options)?;
    Ok(dot::write_dot(&graph, options))
}

pub fn render_html(records: &[PathRecord], options: &RenderOptions) -> Result<String> {
    let graph = PathGraph::from_records(records, options)?;
    html::write_html(&graph, &options.html)
}

/// Builds the graph once and produces the DOT document plus, if requested, the HTML page.
pub fn render(records: &[PathRecord], options: &RenderOptions, with_html: bool) -> Result<Rendered> {
    let graph = PathGraph::from_records(records, options)?;
    let dot = dot::write_dot(&graph, options);
    let html = if with_html {
        Some(html::write_html(&graph, &options.html)?)
    } else {
        None
    };
    Ok(Rendered { dot, html })
}
