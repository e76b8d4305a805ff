use crate::cell::Cell;
use crate::{Error, Result};
use serde::Serialize;

/// Number of tab-separated columns in one dump row.
pub const FIELD_COUNT: usize = 8;

/// One candidate path from the planner dump.
///
/// Display fields (`path_type`, costs, `rows`) are kept as text; they are shown, never computed
/// with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathRecord {
    pub level: i64,
    pub name: String,
    pub path_type: Option<String>,
    pub children: Option<Vec<String>>,
    pub startup_cost: Option<String>,
    pub total_cost: Option<String>,
    pub rows: Option<String>,
    pub deleted: bool,
}

impl PathRecord {
    /// Builds a record from the decoded cells of one row.
    ///
    /// `line` is 1-based and only used for error reporting.
    pub fn from_cells(line: usize, cells: Vec<Cell>) -> Result<Self> {
        let found = cells.len();
        let Ok([level, name, path_type, children, startup_cost, total_cost, rows, deleted]) =
            <[Cell; FIELD_COUNT]>::try_from(cells)
        else {
            return Err(Error::FieldCount {
                line,
                expected: FIELD_COUNT,
                found,
            });
        };

        let level = match &level {
            Cell::Text(raw) => raw.trim().parse::<i64>().map_err(|_| Error::InvalidLevel {
                line,
                value: raw.clone(),
            })?,
            Cell::Null => {
                return Err(Error::InvalidLevel {
                    line,
                    value: crate::cell::NULL_SENTINEL.to_string(),
                });
            }
            Cell::List(items) => {
                return Err(Error::InvalidLevel {
                    line,
                    value: format!("{{{}}}", items.join(",")),
                });
            }
        };

        let name = match name {
            Cell::Text(s) if !s.is_empty() => s,
            _ => return Err(Error::MissingName { line }),
        };

        let children = match children {
            Cell::Null => None,
            Cell::List(items) => Some(items),
            // A bare name is a one-element list.
            Cell::Text(s) => Some(vec![s]),
        };

        Ok(Self {
            level,
            name,
            path_type: path_type.into_display(),
            children,
            startup_cost: startup_cost.into_display(),
            total_cost: total_cost.into_display(),
            rows: rows.into_display(),
            deleted: deleted.as_text() == Some("t"),
        })
    }

    /// Child path names, trimmed, with empty entries dropped.
    pub fn child_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.children
            .iter()
            .flatten()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
    }

    /// A join path has exactly two children.
    pub fn is_join(&self) -> bool {
        self.children.as_ref().is_some_and(|c| c.len() == 2)
    }

    /// The (outer, inner) child names of a join path.
    pub fn join_pair(&self) -> Option<(&str, &str)> {
        match self.children.as_deref() {
            Some([outer, inner]) => Some((outer.trim(), inner.trim())),
            _ => None,
        }
    }
}
