//! Core library for nasa-explorer
//!
//! This crate implements the **Functional Core** of the nasa-explorer
//! application, following the Functional Core - Imperative Shell
//! architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`nasa_explorer_core`** (this crate): Pure transformation functions with zero I/O
//! - **`nasa-explorer`**: HTTP access, CLI, interactive session and MCP server
//!   (the Imperative Shell)
//!
//! The shell fetches one batch of search results from the NASA Images API and
//! hands it to this crate. Everything a view needs after that (normalized
//! records, filtered and sorted pages, the detail navigator) is computed here
//! from plain values.
//!
//! # Module Organization
//!
//! - [`nasa`]: API response types, record normalization, list and gallery projections
//! - [`pagination`]: Fixed-size page slicing
//! - [`navigation`]: Snapshots for previous/next traversal of a result set
//! - [`session`]: Browsing session state with sequenced fetches
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use nasa_explorer_core::nasa::{project_list, ListQuery, MediaRecord};
//!
//! let results: Vec<MediaRecord> = vec![/* fixture records */];
//!
//! let page = project_list(&results, &ListQuery::default());
//!
//! assert_eq!(page.pagination.current_page, 1);
//! ```

pub mod nasa;
pub mod navigation;
pub mod pagination;
pub mod session;
