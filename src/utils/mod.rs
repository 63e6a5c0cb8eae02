pub mod paths;

pub use paths::{atomic_write, config_dir};
