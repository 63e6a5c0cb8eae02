//! clipfind - Filtering and search core of a clipboard-history manager
//!
//! This library turns raw user filter input into a matching predicate over
//! clipboard history items and keeps a rendered item list in sync with it:
//!
//! - Compiling filter text (literal multi-word or regex, optional
//!   case-insensitivity) into an immutable [`Filter`]
//! - Applying a filter to an ordered item list with in-text match
//!   highlighting and find-next navigation
//! - Debouncing keystroke-driven recompiles with focus-aware latency
//! - Persisting filter history and option flags, including one-time
//!   migration of history out of the legacy settings location
//!
//! # Example
//!
//! ```
//! use clipfind::filters::{FilterOptions, compile};
//!
//! let filter = compile("foo bar", FilterOptions::default());
//! assert!(filter.matches("a foo b bar c"));
//! assert!(!filter.matches("a bar b c"));
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod filters;
pub mod history;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::{Options, Settings};
pub use filters::{Filter, FilterOptions, FilterScheduler, compile};
pub use history::HistoryStore;
pub use models::ClipItem;
