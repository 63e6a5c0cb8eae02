//! Data models for clipboard history items.
//!
//! A [`ClipItem`] is one entry of the clipboard history: the flattened text
//! shown in the item list plus the full map of data formats the item was
//! captured with. The filtering core reads items but never mutates them.

pub mod item;

pub use item::{ClipItem, read_items};
