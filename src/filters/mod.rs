pub mod apply;
pub mod compile;
pub mod debounce;
pub mod filter;
pub mod options;
pub mod surface;

pub use apply::{ItemRow, apply_filter, visible_rows};
pub use compile::compile;
pub use debounce::{DEFAULT_QUIET_PERIOD, FilterScheduler};
pub use filter::Filter;
pub use options::FilterOptions;
pub use surface::{BufferSurface, HighlightSpan, HighlightStyle, Span, TextSurface};
