use crate::options::RenderOptions;
use pathtree_core::PathRecord;

/// DOT line break inside a quoted label.
const LABEL_BREAK: &str = "\\n";

/// Escapes text for use inside a double-quoted DOT string.
pub fn escape_label_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str(LABEL_BREAK),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// The multi-line node label: name, type, cost range and row estimate.
///
/// With `join_labels`, a two-child path's first line becomes `name(outer⋈inner)`.
pub fn node_label(rec: &PathRecord, join_labels: bool) -> String {
    let head = match rec.join_pair() {
        Some((outer, inner)) if join_labels => format!("{}({outer}⋈{inner})", rec.name),
        _ => rec.name.clone(),
    };
    let lines = [
        head,
        format!("Type: {}", rec.path_type.as_deref().unwrap_or_default()),
        format!(
            "Cost: {}..{}",
            rec.startup_cost.as_deref().unwrap_or_default(),
            rec.total_cost.as_deref().unwrap_or_default()
        ),
        format!("Rows: {}", rec.rows.as_deref().unwrap_or_default()),
    ];
    lines
        .iter()
        .map(|l| escape_label_text(l))
        .collect::<Vec<_>>()
        .join(LABEL_BREAK)
}

pub fn fill_color<'o>(rec: &PathRecord, options: &'o RenderOptions) -> &'o str {
    if rec.deleted {
        &options.deleted_fill_color
    } else {
        &options.fill_color
    }
}
