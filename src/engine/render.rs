//! Label rendering.

use crate::{CHARACTER_LIMIT, ParsedName};

/// Prefix printed before the name: `DR` for doctors, otherwise the MDES rank,
/// otherwise nothing. Doctor takes precedence.
pub(crate) fn prefix(name: &ParsedName) -> &str {
    if name.is_doctor {
        return "DR";
    }

    if name.is_mdes {
        return &name.rank;
    }

    ""
}

/// Join the prefix and tokens with single spaces, skipping empty segments.
pub(crate) fn render(name: &ParsedName) -> String {
    std::iter::once(prefix(name))
        .chain(name.tokens.iter().map(String::as_str))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Return true when `label` is within the character budget.
pub(crate) fn fits(label: &str) -> bool {
    label.chars().count() <= CHARACTER_LIMIT
}
