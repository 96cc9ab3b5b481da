#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Buffer list view over a live, externally owned buffer registry.
//!
//! A [`MenuView`] snapshots the registry into an ordered table, lets the user
//! put one pending mark on each row, and applies Save and Delete marks as a
//! single batch in which every step may fail on its own.
//!
//! # Main Types
//!
//! - [`Registry`] - the capability surface consumed from the buffer owner
//! - [`Host`] - the presentation surface the view calls outward
//! - [`MenuView`] - rows, cursor, marks, refresh and execute
//! - [`ViewConfig`] - [`MenuOptions`] plus runtime source, filter and sort hooks
//!
//! # Data Flow
//!
//! ```text
//! Registry ──snapshot::build──▶ MenuView.entries ──marks──▶ execute ──persist/destroy──▶ Registry
//!     ▲                                 │
//!     └────────────── refresh ◀─────────┘
//! ```
//!
//! The registry may kill any buffer between (or during) view operations.
//! Rows only hold a [`ResourceId`]; liveness is always re-queried.

pub mod config;
pub mod entry;
pub mod error;
pub mod host;
pub mod mark;
/// In-memory reference registry and recording host.
pub mod memory;
pub mod options;
pub mod policy;
pub mod registry;
pub mod resource;
pub mod snapshot;
mod view;

pub use config::{ResourceSource, ViewConfig};
pub use entry::{Entry, Row};
pub use error::{ConfigError, MenuError, PersistError, Result};
pub use host::{Host, RenderedRow};
pub use mark::{Mark, MarkKind};
pub use options::{ColumnOptions, MenuOptions, SortKey, SortSpec};
pub use registry::Registry;
pub use resource::{Attributes, ResourceId};
pub use view::{ExecuteFailure, ExecuteReport, MenuView, PaneTarget, Selection};
