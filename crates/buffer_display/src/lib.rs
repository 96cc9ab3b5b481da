#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Shared buffer-list presentation helpers.
//!
//! Centralizes column-width policy, size labels and path labels so every
//! surface that lists buffers renders them consistently. Nothing here knows
//! about registries or marks; callers hand in plain strings and numbers.

mod columns;
mod label;

pub use columns::{
	ColumnSpec, ColumnWidths, FLAG_COLUMNS, display_width, fit_to_width, name_column_width,
	pad_end, pad_start, size_column_width,
};
pub use label::{PathDisplay, PathDisplayContext, SizeFormat, format_path_label, format_size};
