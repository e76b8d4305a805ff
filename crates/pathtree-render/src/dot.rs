//! Graphviz DOT serialization.
//!
//! Output order is fixed: header, node declarations (input order), edges (sorted), level blocks
//! (ascending), closing brace. Node identifiers are written as-is; they must already be valid DOT
//! identifiers.

use crate::graph::PathGraph;
use crate::label::{escape_label_text, fill_color, node_label};
use crate::options::{LevelGrouping, RenderOptions};

/// Line-oriented DOT writer with two-space indentation.
#[derive(Debug, Default)]
pub struct DotBuilder {
    lines: Vec<String>,
    depth: usize,
}

impl DotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines
                .push(format!("{}{}", "  ".repeat(self.depth), text));
        }
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Writes `header {` and indents until the matching [`DotBuilder::close`].
    pub fn open(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.line(format!("{} {{", header.as_ref()));
        self.depth += 1;
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.line("}")
    }

    pub fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Identifier fragment for a level: `3` -> `3`, `-2` -> `neg2`.
pub fn level_ident(level: i64) -> String {
    if level < 0 {
        format!("neg{}", level.unsigned_abs())
    } else {
        level.to_string()
    }
}

pub fn write_dot(graph: &PathGraph<'_>, options: &RenderOptions) -> String {
    let mut b = DotBuilder::new();
    b.open(format!("digraph {}", options.graph_name));
    b.line(format!("rankdir={};", options.rankdir));
    b.line(format!("nodesep={};", options.nodesep));
    b.line(format!("ranksep={};", options.ranksep));
    b.line(format!(
        "node [shape=box, style=\"rounded,filled\", fillcolor=\"{}\"];",
        options.fill_color
    ));
    b.blank();

    for rec in &graph.nodes {
        b.line(format!(
            "{} [label=\"{}\", fillcolor=\"{}\"];",
            rec.name,
            node_label(rec, options.join_labels),
            fill_color(rec, options)
        ));
    }

    for edge in &graph.edges {
        b.line(format!("{} -> {};", edge.child, edge.parent));
    }

    for (level, names) in &graph.levels {
        let ident = level_ident(*level);
        let members = names
            .iter()
            .map(|n| format!("\"{}\";", escape_label_text(n)))
            .collect::<Vec<_>>();
        match options.grouping {
            LevelGrouping::Rank => {
                b.line(format!(
                    "{{ rank=same; level_{ident} [shape=plaintext, label=\"Level {level}\", fillcolor=none]; {} }}",
                    members.join(" ")
                ));
            }
            LevelGrouping::Cluster => {
                b.open(format!("subgraph cluster_level_{ident}"));
                b.line(format!("label=\"Level {level}\";"));
                b.line("style=dashed;");
                for m in &members {
                    b.line(m);
                }
                b.close();
            }
        }
    }

    b.close();
    b.finish()
}
