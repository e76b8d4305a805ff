//! Graph model built from path records.
//!
//! Each piece (nodes, edges, level groups) is collected by its own pure function so it can be
//! checked independently; [`PathGraph::from_records`] combines them and applies the
//! duplicate-name policy.

use crate::options::{DuplicateNames, RenderOptions};
use crate::{Error, Result};
use indexmap::IndexMap;
use indexmap::map::Entry;
use pathtree_core::PathRecord;
use std::collections::{BTreeMap, BTreeSet};

/// A `child -> parent` edge: data flows from the child path up into the parent.
///
/// Ordering is by child name, then parent name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub child: String,
    pub parent: String,
}

impl Edge {
    pub fn new(child: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            child: child.into(),
            parent: parent.into(),
        }
    }
}

/// Distinct records by name, first occurrence wins, input order preserved.
pub fn collect_nodes<'a>(records: impl IntoIterator<Item = &'a PathRecord>) -> Vec<&'a PathRecord> {
    let mut seen: IndexMap<&str, &PathRecord> = IndexMap::new();
    for rec in records {
        seen.entry(rec.name.as_str()).or_insert(rec);
    }
    seen.into_values().collect()
}

/// All `child -> parent` edges, deduplicated and sorted.
///
/// Records with absent children contribute nothing. Child names are never checked against the
/// node set.
pub fn collect_edges<'a>(records: impl IntoIterator<Item = &'a PathRecord>) -> BTreeSet<Edge> {
    let mut edges = BTreeSet::new();
    for rec in records {
        for child in rec.child_names() {
            edges.insert(Edge::new(child, rec.name.as_str()));
        }
    }
    edges
}

/// Level -> node names in input order, each name listed at most once per level.
pub fn collect_levels<'a>(
    records: impl IntoIterator<Item = &'a PathRecord>,
) -> BTreeMap<i64, Vec<String>> {
    let mut levels: BTreeMap<i64, Vec<String>> = BTreeMap::new();
    for rec in records {
        let names = levels.entry(rec.level).or_default();
        if !names.iter().any(|n| n == &rec.name) {
            names.push(rec.name.clone());
        }
    }
    levels
}

#[derive(Debug, Clone)]
pub struct PathGraph<'a> {
    pub nodes: Vec<&'a PathRecord>,
    pub edges: BTreeSet<Edge>,
    pub levels: BTreeMap<i64, Vec<String>>,
}

impl<'a> PathGraph<'a> {
    pub fn from_records(records: &'a [PathRecord], options: &RenderOptions) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyGraph);
        }
        check_duplicates(records, options.duplicate_names)?;

        let nodes = collect_nodes(records);
        let edges = collect_edges(records);
        // Levels follow the surviving nodes so a merged duplicate is ranked only once.
        let levels = collect_levels(nodes.iter().copied());

        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            levels = levels.len(),
            "built path graph"
        );

        Ok(Self {
            nodes,
            edges,
            levels,
        })
    }

    /// Smallest and largest level present.
    pub fn level_range(&self) -> Option<(i64, i64)> {
        let min = *self.levels.keys().next()?;
        let max = *self.levels.keys().next_back()?;
        Some((min, max))
    }

    pub fn level_numbers(&self) -> Vec<i64> {
        self.levels.keys().copied().collect()
    }
}

fn check_duplicates(records: &[PathRecord], policy: DuplicateNames) -> Result<()> {
    let mut first_level: IndexMap<&str, i64> = IndexMap::new();
    for rec in records {
        match first_level.entry(rec.name.as_str()) {
            Entry::Vacant(v) => {
                v.insert(rec.level);
            }
            Entry::Occupied(o) => {
                let first = *o.get();
                match policy {
                    DuplicateNames::Reject => {
                        return Err(Error::DuplicatePath {
                            name: rec.name.clone(),
                            first_level: first,
                            level: rec.level,
                        });
                    }
                    DuplicateNames::Merge => {
                        tracing::warn!(
                            path = %rec.name,
                            first_level = first,
                            level = rec.level,
                            "duplicate path name merged into first occurrence"
                        );
                    }
                }
            }
        }
    }
    Ok(())
}
