//! Filter compilation: raw input text plus options in, [`Filter`] out.

use regex::RegexBuilder;

use super::filter::{Filter, FilterKind};
use super::options::FilterOptions;

/// Compile user filter input into a [`Filter`].
///
/// In plain mode the input is split on whitespace runs, each token is escaped
/// to match literally, and tokens are joined with a non-greedy any-characters
/// gap: every word must appear, in order, anywhere in the text. In regex mode
/// the input is the pattern source verbatim.
///
/// Never fails: invalid regex syntax yields a filter that matches nothing.
pub fn compile(raw_text: &str, options: FilterOptions) -> Filter {
    let pattern = if options.use_regex {
        raw_text.to_string()
    } else {
        raw_text.split_whitespace().map(regex::escape).collect::<Vec<_>>().join(".*?")
    };

    let kind = if pattern.is_empty() {
        FilterKind::MatchAll
    } else {
        match RegexBuilder::new(&pattern).case_insensitive(options.case_insensitive).build() {
            Ok(re) => FilterKind::Pattern { re, case_insensitive: options.case_insensitive },
            Err(_) => FilterKind::MatchNone,
        }
    };

    Filter::new(raw_text.to_string(), kind)
}
