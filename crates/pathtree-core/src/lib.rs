#![forbid(unsafe_code)]

//! Typed records for planner path-tree dumps.
//!
//! Input is a tab-separated file with eight columns per row and no header:
//! `level`, `name`, `type`, `children`, `startup_cost`, `total_cost`, `rows`, `deleted`.
//! See [`cell`] for the per-cell decoding rules.

pub mod cell;
pub mod error;
pub mod reader;
pub mod record;

pub use cell::{Cell, decode_array, decode_cell};
pub use error::{Error, Result};
pub use reader::{parse_line, parse_records, read_records, split_row};
pub use record::{FIELD_COUNT, PathRecord};
