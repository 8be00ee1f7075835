//! Candidate generation.
//!
//! For Chinese/English names with a surname that has given names on both
//! sides, truncation could reasonably keep either side. Both readings are
//! tried alongside the full name:
//!
//! ```text
//! ALEX TAN JUN XIONG   surname {1}
//!   ├─ ALEX TAN JUN XIONG      (unmodified)
//!   ├─ ALEX TAN                (front: tokens 0..=last surname)
//!   └─ TAN JUN XIONG           (back: tokens first surname.., re-based to {0})
//! ```
//!
//! Every other case yields the parsed name alone.

use tracing::debug;

use crate::{CultureType, ParsedName};

pub(crate) fn candidates(name: &ParsedName) -> Vec<ParsedName> {
    if name.culture != CultureType::ChineseEnglish {
        return vec![name.clone()];
    }

    let (Some(&first), Some(&last)) = (name.surname_indices.iter().min(), name.surname_indices.iter().max()) else {
        return vec![name.clone()];
    };

    let has_names_on_both_sides = first > 0 && last < name.tokens.len().saturating_sub(1);
    if !has_names_on_both_sides {
        return vec![name.clone()];
    }

    let front = name.with_tokens(name.tokens[..=last].to_vec());
    let back = ParsedName {
        tokens: name.tokens[first..].to_vec(),
        surname_indices: name.surname_indices.iter().map(|index| index - first).collect(),
        ..name.clone()
    };

    debug!(first, last, front = ?front.tokens, back = ?back.tokens, "interior surname, trying front and back variants");

    vec![name.clone(), front, back]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(name: &str, culture: CultureType, surname_indices: &[usize]) -> ParsedName {
        ParsedName {
            tokens: name.split_whitespace().map(str::to_string).collect(),
            culture,
            surname_indices: surname_indices.to_vec(),
            rank: String::new(),
            is_mdes: false,
            is_doctor: false,
        }
    }

    #[test]
    fn interior_surname_yields_three_variants() {
        let name = parsed("ALEX TAN JUN XIONG", CultureType::ChineseEnglish, &[1]);
        let out = candidates(&name);

        assert_eq!(out.len(), 3);
        assert_eq!(out[0], name);
        assert_eq!(out[1].tokens, vec!["ALEX", "TAN"]);
        assert_eq!(out[1].surname_indices, vec![1]);
        assert_eq!(out[2].tokens, vec!["TAN", "JUN", "XIONG"]);
        assert_eq!(out[2].surname_indices, vec![0]);
    }

    #[test]
    fn compound_interior_surname_is_rebased() {
        let name = parsed("A B C D E", CultureType::ChineseEnglish, &[3, 1]);
        let out = candidates(&name);

        assert_eq!(out[1].tokens, vec!["A", "B", "C", "D"]);
        assert_eq!(out[1].surname_indices, vec![3, 1]);
        assert_eq!(out[2].tokens, vec!["B", "C", "D", "E"]);
        assert_eq!(out[2].surname_indices, vec![2, 0]);
    }

    #[test]
    fn edge_surname_yields_unmodified_name_only() {
        for indices in [&[0][..], &[3][..], &[0, 1][..]] {
            let name = parsed("TAN JUN XIONG ALEX", CultureType::ChineseEnglish, indices);
            assert_eq!(candidates(&name), vec![name.clone()]);
        }
    }

    #[test]
    fn no_surname_yields_unmodified_name_only() {
        let name = parsed("TAN JUN XIONG", CultureType::ChineseEnglish, &[]);
        assert_eq!(candidates(&name), vec![name.clone()]);
    }

    #[test]
    fn out_of_range_surname_yields_unmodified_name_only() {
        let name = parsed("TAN JUN XIONG", CultureType::ChineseEnglish, &[7]);
        assert_eq!(candidates(&name), vec![name.clone()]);
    }

    #[test]
    fn largest_surname_index_yields_unmodified_name_only() {
        for indices in [&[usize::MAX][..], &[1, usize::MAX][..]] {
            let name = parsed("TAN BEE LIAN", CultureType::ChineseEnglish, indices);
            assert_eq!(candidates(&name), vec![name.clone()]);
        }
    }

    #[test]
    fn empty_name_with_surname_yields_unmodified_name_only() {
        let name = parsed("", CultureType::ChineseEnglish, &[0]);
        assert_eq!(candidates(&name), vec![name.clone()]);
    }

    #[test]
    fn other_cultures_never_branch() {
        for culture in [CultureType::Malay, CultureType::Indian] {
            let name = parsed("ADYA D/O NARAIN KUMAR", culture, &[1, 2]);
            assert_eq!(candidates(&name), vec![name.clone()]);
        }
    }
}
