use crate::ParsedName;
use crate::rules::predicates::is_md_or_ad;

/// Index of the first token that is not part of the surname.
pub fn first_given_name_index(name: &ParsedName) -> Option<usize> {
    (0..name.tokens.len()).find(|&index| !name.is_surname(index))
}

/// Index of the first token that is neither a surname nor an `MD`/`AD`
/// abbreviation.
pub fn first_spelt_given_name_index(name: &ParsedName) -> Option<usize> {
    name.tokens.iter().enumerate().position(|(index, token)| !name.is_surname(index) && !is_md_or_ad(token))
}

/// Keep the tokens for which `keep(index, token)` holds, preserving order.
pub fn retain_tokens(name: &ParsedName, keep: impl Fn(usize, &str) -> bool) -> Vec<String> {
    name.tokens.iter().enumerate().filter(|(index, token)| keep(*index, token)).map(|(_, token)| token.clone()).collect()
}

/// First character of `token` as a string, or an empty string.
pub fn initial(token: &str) -> String {
    token.chars().next().map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CultureType;

    fn parsed(tokens: &[&str], surname_indices: &[usize]) -> ParsedName {
        ParsedName {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            culture: CultureType::Malay,
            surname_indices: surname_indices.to_vec(),
            rank: String::new(),
            is_mdes: false,
            is_doctor: false,
        }
    }

    #[test]
    fn first_given_name_skips_surnames() {
        assert_eq!(first_given_name_index(&parsed(&["TAN", "BEE"], &[0])), Some(1));
        assert_eq!(first_given_name_index(&parsed(&["TAN"], &[0])), None);
        assert_eq!(first_given_name_index(&parsed(&[], &[])), None);
    }

    #[test]
    fn first_spelt_given_name_skips_abbreviations() {
        assert_eq!(first_spelt_given_name_index(&parsed(&["MD", "ad", "AHMAD"], &[])), Some(2));
        assert_eq!(first_spelt_given_name_index(&parsed(&["MD", "AD"], &[])), None);
    }

    #[test]
    fn initial_takes_first_char() {
        assert_eq!(initial("BEE"), "B");
        assert_eq!(initial("Émile"), "É");
        assert_eq!(initial(""), "");
    }
}
