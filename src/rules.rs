//! Per-culture rule tables.
//!
//! Each culture owns an ordered list of rules. Behavior differs only by which
//! list runs; the tables are built once and never change afterwards.

use once_cell::sync::Lazy;

use crate::{CultureType, Rule};

pub(crate) mod chinese_english;
pub(crate) mod helpers;
pub(crate) mod indian;
pub(crate) mod malay;
pub(crate) mod predicates;
pub(crate) mod shared;


static CHINESE_ENGLISH_RULES: Lazy<Vec<Rule>> = Lazy::new(chinese_english::get);
static MALAY_RULES: Lazy<Vec<Rule>> = Lazy::new(malay::get);
static INDIAN_RULES: Lazy<Vec<Rule>> = Lazy::new(indian::get);

/// Ordered rule list for `culture`.
pub(crate) fn for_culture(culture: CultureType) -> &'static [Rule] {
    match culture {
        CultureType::ChineseEnglish => &CHINESE_ENGLISH_RULES,
        CultureType::Malay => &MALAY_RULES,
        CultureType::Indian => &INDIAN_RULES,
    }
}
