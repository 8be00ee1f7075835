//! Name record parsing.
//!
//! No validation happens here. Malformed ranks and out-of-range surname
//! indices are carried through untouched and handled by the rules.

use crate::{NameInput, ParsedName};

/// Split `input.name` on whitespace and copy the remaining fields.
///
/// ```text
/// "  TAN   BEE LIAN " ──▶ ["TAN", "BEE", "LIAN"]
/// ```
pub(crate) fn parse_name(input: &NameInput) -> ParsedName {
    ParsedName {
        tokens: input.name.split_whitespace().map(str::to_string).collect(),
        culture: input.culture,
        surname_indices: input.surname_indices.clone(),
        rank: input.rank.clone(),
        is_mdes: input.is_mdes,
        is_doctor: input.is_doctor,
    }
}
