/// Returns true when the token is a transliteration of Mohammed/Mohamad
/// (MOHAMED, MUHAMMAD, MOHAMAT, MAHAMAD, ...).
pub fn is_mohammed(token: &str) -> bool {
    regex!(r"(?i)^m[aeou][hx][ae]mm?[ae][dt]$").is_match(token)
}

/// Returns true when the token is a long-vowel spelling of Abdul (ABDOUL,
/// ABDAOOL, ABDEOOL, ...). The plain spellings ABDUL and ABDOOL are left as
/// they are.
pub fn is_abdul(token: &str) -> bool {
    regex!(r"(?i)^abd(?:[aeio]oo|ou)l$").is_match(token)
}

/// Returns true when the token is already the literal `MD` or `AD`
/// abbreviation, in any case.
pub fn is_md_or_ad(token: &str) -> bool {
    token.eq_ignore_ascii_case("MD") || token.eq_ignore_ascii_case("AD")
}
