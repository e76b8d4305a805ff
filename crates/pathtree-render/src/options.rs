//! Render configuration.
//!
//! Options deserialize from camelCase JSON; every key is optional and falls back to the defaults
//! below, so a config file only needs the keys it changes:
//!
//! ```json
//! { "grouping": "cluster", "joinLabels": true, "html": { "viewportWidth": 1600 } }
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelGrouping {
    /// `{ rank=same; ... }` groups with a plaintext level caption node.
    #[default]
    Rank,
    /// Bordered `subgraph cluster_*` blocks captioned `Level N`.
    Cluster,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateNames {
    /// First occurrence defines the node; later ones only add edges.
    #[default]
    Merge,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HtmlOptions {
    pub title: String,
    pub image_file: String,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "Query plan".to_string(),
            image_file: "query_plan.png".to_string(),
            viewport_width: 1200,
            viewport_height: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    pub graph_name: String,
    pub rankdir: String,
    pub nodesep: f64,
    pub ranksep: f64,
    pub fill_color: String,
    pub deleted_fill_color: String,
    pub grouping: LevelGrouping,
    /// Annotate join paths as `name(outer⋈inner)`.
    pub join_labels: bool,
    pub duplicate_names: DuplicateNames,
    pub html: HtmlOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            graph_name: "query_plan".to_string(),
            rankdir: "TB".to_string(),
            nodesep: 0.5,
            ranksep: 0.5,
            fill_color: "lightblue".to_string(),
            deleted_fill_color: "lightcoral".to_string(),
            grouping: LevelGrouping::default(),
            join_labels: false,
            duplicate_names: DuplicateNames::default(),
            html: HtmlOptions::default(),
        }
    }
}

impl RenderOptions {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| {
            Error::Core(pathtree_core::Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::from_json_str(&text)
    }
}
