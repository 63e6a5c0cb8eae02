use serde::{Deserialize, Serialize};

/// Pattern-compilation switches, toggled independently by the user.
///
/// Passed explicitly into [`compile`](super::compile::compile) so that filter
/// construction is a pure function of its inputs rather than of ambient
/// configuration state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Treat the input verbatim as a regular expression instead of a list of
    /// whitespace-separated literal tokens.
    pub use_regex: bool,
    /// Match without regard to letter case.
    pub case_insensitive: bool,
}

impl FilterOptions {
    pub fn new(use_regex: bool, case_insensitive: bool) -> Self {
        Self { use_regex, case_insensitive }
    }
}
